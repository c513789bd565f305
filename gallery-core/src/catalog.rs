//! Index flow: loading the works manifest and filtering it

use crate::config::GalleryConfig;
use crate::source::{read_json, AssetSource};
use crate::types::WorkRecord;
use serde::Serialize;

/// Loads the catalog from the manifest
pub struct ManifestLoader<'a> {
    source: &'a dyn AssetSource,
    path: String,
}

impl<'a> ManifestLoader<'a> {
    pub fn new(source: &'a dyn AssetSource, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
        }
    }

    /// Loader for the manifest named in the config
    pub fn from_config(source: &'a dyn AssetSource, config: &GalleryConfig) -> Self {
        Self::new(source, config.manifest.trim_start_matches('/'))
    }

    /// Load every record in manifest order
    ///
    /// Retrieval and parse failures are logged and produce an empty catalog.
    pub async fn load(&self) -> Vec<WorkRecord> {
        match read_json::<Vec<WorkRecord>>(self.source, &self.path).await {
            Ok(works) => {
                tracing::debug!("Loaded {} works from {}", works.len(), self.path);
                works
            }
            Err(e) => {
                tracing::error!("Failed to load works manifest {}: {}", self.path, e);
                Vec::new()
            }
        }
    }
}

/// Lowercased fields a query is matched against
///
/// Tags are joined by spaces, so a query may span two adjacent tags.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchKeys {
    pub title: String,
    pub artist: String,
    pub tags: String,
}

impl SearchKeys {
    pub fn of(work: &WorkRecord) -> Self {
        Self {
            title: work.title.as_deref().unwrap_or_default().to_lowercase(),
            artist: work.artist.as_deref().unwrap_or_default().to_lowercase(),
            tags: work.tags.join(" ").to_lowercase(),
        }
    }
}

/// Case-insensitive search over title, artist and tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkFilter {
    needle: String,
}

impl WorkFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// Whether the query is empty and therefore matches everything
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Each field is checked on its own, never concatenated with another.
    pub fn matches(&self, work: &WorkRecord) -> bool {
        self.is_empty() || self.matches_keys(&SearchKeys::of(work))
    }

    pub fn matches_keys(&self, keys: &SearchKeys) -> bool {
        self.is_empty()
            || keys.title.contains(&self.needle)
            || keys.artist.contains(&self.needle)
            || keys.tags.contains(&self.needle)
    }

    /// Matching records, in catalog order
    pub fn apply<'w>(&self, works: &'w [WorkRecord]) -> Vec<&'w WorkRecord> {
        works.iter().filter(|work| self.matches(work)).collect()
    }
}

/// Filter a catalog by a free-text query
pub fn filter_works<'w>(works: &'w [WorkRecord], query: &str) -> Vec<&'w WorkRecord> {
    WorkFilter::new(query).apply(works)
}
