//! Gallery configuration
//!
//! Defaults match the conventional static layout (`works.json` next to a
//! `works/` directory). Environment variables override the defaults and
//! front ends may override again from their own flags.

use crate::error::{GalleryError, Result};
use crate::source::{AssetSource, HttpSource, LocalSource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default manifest path, relative to the gallery root
pub const DEFAULT_MANIFEST: &str = "works.json";

/// Default directory holding one sub-directory per work
pub const DEFAULT_WORKS_DIR: &str = "works";

/// Where the static gallery lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryRoot {
    /// A directory on the local filesystem
    Directory(PathBuf),

    /// A static HTTP host; must end with `/` to be used as a base
    Http(Url),
}

impl GalleryRoot {
    /// Parse a root given as either a URL or a directory path
    pub fn parse(value: &str) -> Result<Self> {
        if value.starts_with("http://") || value.starts_with("https://") {
            let mut url = Url::parse(value)
                .map_err(|e| GalleryError::Config(format!("invalid root URL '{}': {}", value, e)))?;
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(Self::Http(url))
        } else if value.is_empty() {
            Err(GalleryError::Config("gallery root must not be empty".to_string()))
        } else {
            Ok(Self::Directory(PathBuf::from(value)))
        }
    }
}

/// Gallery settings shared by every front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub root: GalleryRoot,

    /// Directory (relative to the root) holding the works
    pub works_dir: String,

    /// Manifest path (relative to the root)
    pub manifest: String,

    /// Per-request timeout for the HTTP source; `None` waits indefinitely
    pub http_timeout: Option<Duration>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            root: GalleryRoot::Directory(PathBuf::from(".")),
            works_dir: DEFAULT_WORKS_DIR.to_string(),
            manifest: DEFAULT_MANIFEST.to_string(),
            http_timeout: None,
        }
    }
}

impl GalleryConfig {
    /// Build a config from defaults overridden by `GALLERY_*` variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(root) = lookup("GALLERY_ROOT") {
            config.root = GalleryRoot::parse(&root)?;
        }
        if let Some(dir) = lookup("GALLERY_WORKS_DIR") {
            config.works_dir = dir;
        }
        if let Some(manifest) = lookup("GALLERY_MANIFEST") {
            config.manifest = manifest;
        }
        if let Some(secs) = lookup("GALLERY_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                GalleryError::Config(format!("GALLERY_HTTP_TIMEOUT_SECS '{}' is not a number", secs))
            })?;
            config.http_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Replace the root
    pub fn with_root(mut self, root: GalleryRoot) -> Self {
        self.root = root;
        self
    }

    /// Check the relative paths are usable
    pub fn validate(&self) -> Result<()> {
        let works_dir = self.works_dir.trim_matches('/');
        if works_dir.is_empty() || works_dir.split('/').any(|c| c == "..") {
            return Err(GalleryError::Config(format!(
                "invalid works directory '{}'",
                self.works_dir
            )));
        }
        if self.manifest.trim_matches('/').is_empty() {
            return Err(GalleryError::Config("manifest path must not be empty".to_string()));
        }
        Ok(())
    }

    /// Works directory without surrounding slashes
    pub fn works_base(&self) -> &str {
        self.works_dir.trim_matches('/')
    }

    /// Open the asset source for the configured root
    pub fn open_source(&self) -> Result<Arc<dyn AssetSource>> {
        let source: Arc<dyn AssetSource> = match &self.root {
            GalleryRoot::Directory(path) => Arc::new(LocalSource::new(path)),
            GalleryRoot::Http(url) => Arc::new(HttpSource::new(url.clone(), self.http_timeout)?),
        };
        Ok(source)
    }
}
