//! Per-work metadata loaded when a reader opens

use super::PageStrategy;
use serde::{Deserialize, Deserializer, Serialize};

/// Contents of `{base}/{slug}/meta.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Explicit page filenames, in reading order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,

    /// Number of sequentially named pages (`001.jpg` ...)
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<u32>,
}

impl WorkMeta {
    /// Minimal metadata used when `meta.json` cannot be loaded
    pub fn fallback(slug: &str) -> Self {
        Self {
            title: Some(slug.to_string()),
            pages: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Explicit page list, if present and non-empty
    pub fn explicit_pages(&self) -> Option<&[String]> {
        self.pages.as_deref().filter(|pages| !pages.is_empty())
    }

    /// Page count, if positive
    pub fn positive_count(&self) -> Option<u32> {
        self.count.filter(|&count| count > 0)
    }

    /// The page strategy this metadata selects
    pub fn strategy(&self) -> PageStrategy {
        if self.explicit_pages().is_some() {
            PageStrategy::Explicit
        } else if self.positive_count().is_some() {
            PageStrategy::Count
        } else {
            PageStrategy::Discovered
        }
    }
}

/// Accept any JSON number for `count`; non-positive or non-numeric values
/// behave as if the field were absent. Fractions are truncated.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let count = match value {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        _ => None,
    };
    Ok(count.filter(|&c| c > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback() {
        let meta = WorkMeta::fallback("foo");
        assert_eq!(meta.title.as_deref(), Some("foo"));
        assert_eq!(meta.pages, Some(Vec::new()));
        assert_eq!(meta.count, None);
        assert!(meta.explicit_pages().is_none());
        assert_eq!(meta.strategy(), PageStrategy::Discovered);
    }

    #[test]
    fn test_count_variants() {
        let parse = |json: &str| serde_json::from_str::<WorkMeta>(json).unwrap().count;
        assert_eq!(parse(r#"{"count": 3}"#), Some(3));
        assert_eq!(parse(r#"{"count": 2.7}"#), Some(2));
        assert_eq!(parse(r#"{"count": 0}"#), None);
        assert_eq!(parse(r#"{"count": -4}"#), None);
        assert_eq!(parse(r#"{"count": "3"}"#), None);
        assert_eq!(parse(r#"{"count": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_explicit_pages_ignores_empty_list() {
        let meta: WorkMeta = serde_json::from_str(r#"{"pages": [], "count": 2}"#).unwrap();
        assert!(meta.explicit_pages().is_none());
        assert_eq!(meta.positive_count(), Some(2));
        assert_eq!(meta.strategy(), PageStrategy::Count);
    }
}
