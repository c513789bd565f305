//! Reader flow: metadata loading and page resolution

mod resolver;

pub use resolver::{PageResolver, PageSink};

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::source::{read_json, AssetSource};
use crate::types::{ReaderContext, WorkMeta};

/// Check a slug taken from a reader address
///
/// A missing or blank slug is the terminal "no slug specified" condition.
/// Slugs name a single directory, so separators and dot segments are refused.
pub fn validate_slug(slug: Option<&str>) -> Result<&str> {
    let slug = slug.filter(|s| !s.trim().is_empty()).ok_or(GalleryError::MissingSlug)?;

    if slug == "." || slug == ".." || slug.contains(['/', '\\']) || slug.contains('\0') {
        return Err(GalleryError::InvalidSlug(slug.to_string()));
    }
    Ok(slug)
}

/// Loads `meta.json` for a work
pub struct MetaLoader<'a> {
    source: &'a dyn AssetSource,
    works_base: String,
}

impl<'a> MetaLoader<'a> {
    pub fn new(source: &'a dyn AssetSource, works_base: impl Into<String>) -> Self {
        Self {
            source,
            works_base: works_base.into(),
        }
    }

    pub fn from_config(source: &'a dyn AssetSource, config: &GalleryConfig) -> Self {
        Self::new(source, config.works_base())
    }

    /// Path of a work's metadata file
    pub fn meta_path(&self, slug: &str) -> String {
        format!("{}/{}/meta.json", self.works_base, slug)
    }

    /// Load the metadata, substituting `{ title: slug, pages: [] }` on any failure
    pub async fn load(&self, slug: &str) -> WorkMeta {
        let path = self.meta_path(slug);
        match read_json::<WorkMeta>(self.source, &path).await {
            Ok(meta) => meta,
            Err(e) => {
                tracing::error!("Failed to load metadata for {}: {}", slug, e);
                WorkMeta::fallback(slug)
            }
        }
    }
}

/// Start a reader visit: validate the slug, then load its metadata
///
/// The metadata is never fetched when the slug is missing or invalid.
pub async fn open_reader(
    source: &dyn AssetSource,
    config: &GalleryConfig,
    slug: Option<&str>,
) -> Result<ReaderContext> {
    let slug = validate_slug(slug)?;
    let meta = MetaLoader::from_config(source, config).load(slug).await;
    Ok(ReaderContext::new(slug, meta))
}
