//! CLI command implementations

mod download;
mod list;
mod read;

pub use download::download;
pub use list::list;
pub use read::read;

use gallery_core::render::Links;
use gallery_core::{AssetSource, GalleryConfig};

/// Links for terminal output: only asset URLs are printed, works are
/// opened with `gallery read <SLUG>` rather than a reader address
fn asset_links(source: &dyn AssetSource, config: &GalleryConfig) -> Links {
    Links::new(source.locate(config.works_base()), "")
}
