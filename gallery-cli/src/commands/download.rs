//! Download command implementation

use anyhow::Result;
use gallery_core::nav::{activate, NavAction, NavControl};
use gallery_core::validate_slug;

/// Show download guidance; nothing is transferred
pub fn download(slug: &str) -> Result<()> {
    validate_slug(Some(slug))?;

    if let NavAction::ShowMessage { message } = activate(NavControl::Download) {
        println!("{}", message);
    }

    Ok(())
}
