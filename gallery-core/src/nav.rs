//! Reader navigation controls
//!
//! The controls are stateless: they do not track the current page and do not
//! check bounds; the viewport clamps scrolling at either end.

use serde::Serialize;

/// Guidance shown instead of downloading a work
pub const DOWNLOAD_GUIDANCE: &str = "To download images: open the works folder in the repo and use \"Download\" on GitHub or download single images.";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavControl {
    Previous,
    Next,
    Download,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Backward,
    Forward,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
}

/// What a front end should do when a control is activated
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavAction {
    /// Scroll by one viewport height
    Scroll {
        direction: ScrollDirection,
        behavior: ScrollBehavior,
    },

    /// Cancel the default action and show a message instead
    ShowMessage { message: &'static str },
}

impl NavAction {
    /// Signed scroll offset for a viewport of the given height
    pub fn scroll_offset(&self, viewport_height: f64) -> Option<f64> {
        match self {
            NavAction::Scroll {
                direction: ScrollDirection::Backward,
                ..
            } => Some(-viewport_height),
            NavAction::Scroll {
                direction: ScrollDirection::Forward,
                ..
            } => Some(viewport_height),
            NavAction::ShowMessage { .. } => None,
        }
    }
}

/// Action bound to a control
pub fn activate(control: NavControl) -> NavAction {
    match control {
        NavControl::Previous => NavAction::Scroll {
            direction: ScrollDirection::Backward,
            behavior: ScrollBehavior::Smooth,
        },
        NavControl::Next => NavAction::Scroll {
            direction: ScrollDirection::Forward,
            behavior: ScrollBehavior::Smooth,
        },
        NavControl::Download => NavAction::ShowMessage {
            message: DOWNLOAD_GUIDANCE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_and_next_scroll_one_viewport() {
        assert_eq!(activate(NavControl::Previous).scroll_offset(800.0), Some(-800.0));
        assert_eq!(activate(NavControl::Next).scroll_offset(800.0), Some(800.0));
        assert!(matches!(
            activate(NavControl::Next),
            NavAction::Scroll {
                behavior: ScrollBehavior::Smooth,
                ..
            }
        ));
    }

    #[test]
    fn test_download_never_transfers() {
        let action = activate(NavControl::Download);
        assert_eq!(action.scroll_offset(800.0), None);
        assert_eq!(
            action,
            NavAction::ShowMessage {
                message: DOWNLOAD_GUIDANCE
            }
        );
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(activate(NavControl::Previous)).unwrap();
        assert_eq!(json["action"], "scroll");
        assert_eq!(json["direction"], "backward");
        assert_eq!(json["behavior"], "smooth");
    }
}
