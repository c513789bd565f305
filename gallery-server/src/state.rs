//! Application state

use anyhow::Result;
use gallery_core::render::Links;
use gallery_core::{AssetSource, GalleryConfig, GalleryRoot};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
///
/// Holds configuration only; every request reads the gallery assets afresh.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GalleryConfig>,

    /// Source the catalog and metadata are read from
    pub source: Arc<dyn AssetSource>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: GalleryConfig) -> Result<Self> {
        let source = config.open_source()?;
        Ok(Self::with_source(config, source))
    }

    /// Create state over an explicit source
    pub fn with_source(config: GalleryConfig, source: Arc<dyn AssetSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }

    /// Directory served under `/{works_dir}`, when the gallery is local
    pub fn works_dir(&self) -> Option<PathBuf> {
        match &self.config.root {
            GalleryRoot::Directory(root) => Some(root.join(self.config.works_base())),
            GalleryRoot::Http(_) => None,
        }
    }

    /// Route prefix for served works
    pub fn works_route(&self) -> String {
        format!("/{}", self.config.works_base())
    }

    /// Links used by the views: served assets for a local gallery,
    /// the remote host otherwise
    pub fn links(&self) -> Links {
        let asset_base = match &self.config.root {
            GalleryRoot::Directory(_) => self.works_route(),
            GalleryRoot::Http(_) => self.source.locate(self.config.works_base()),
        };
        Links::new(asset_base, "/reader")
    }
}
