//! Access to the static gallery assets
//!
//! Every backend exposes the same two capabilities the gallery needs:
//! reading a whole asset and a metadata-only existence check.

mod http;

pub use http::HttpSource;

use crate::error::SourceError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Result type for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Read-only view of a static gallery host
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Read the asset at the given root-relative path
    async fn read(&self, path: &str) -> SourceResult<Vec<u8>>;

    /// Check whether an asset exists without transferring its body
    async fn exists(&self, path: &str) -> SourceResult<bool>;

    /// Absolute location of an asset, for display
    fn locate(&self, path: &str) -> String;
}

/// Read an asset and parse it as JSON
pub async fn read_json<T: DeserializeOwned>(source: &dyn AssetSource, path: &str) -> SourceResult<T> {
    let bytes = source.read(path).await?;
    serde_json::from_slice(&bytes).map_err(|e| SourceError::Json {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Local directory source
pub struct LocalSource {
    root: std::path::PathBuf,
}

impl LocalSource {
    /// Create a source serving files below the given root directory
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a path below the root, refusing anything that escapes it
    fn full_path(&self, path: &str) -> SourceResult<std::path::PathBuf> {
        use std::path::Component;

        let mut normalized = std::path::PathBuf::new();
        for component in std::path::Path::new(path).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                    return Err(SourceError::InvalidPath(path.to_string()));
                }
            }
        }

        Ok(self.root.join(normalized))
    }
}

#[async_trait]
impl AssetSource for LocalSource {
    async fn read(&self, path: &str) -> SourceResult<Vec<u8>> {
        let full_path = self.full_path(path)?;
        match tokio::fs::read(&full_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, path: &str) -> SourceResult<bool> {
        let full_path = self.full_path(path)?;
        match tokio::fs::metadata(full_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn locate(&self, path: &str) -> String {
        self.full_path(path)
            .unwrap_or_else(|_| self.root.join(path))
            .display()
            .to_string()
    }
}

/// In-memory source (for testing and embedding)
#[derive(Default)]
pub struct MemorySource {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset
    pub fn insert(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), data.into());
    }

    /// Builder form of [`MemorySource::insert`]
    pub fn with(self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }
}

#[async_trait]
impl AssetSource for MemorySource {
    async fn read(&self, path: &str) -> SourceResult<Vec<u8>> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }

    async fn exists(&self, path: &str) -> SourceResult<bool> {
        Ok(self
            .data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path))
    }

    fn locate(&self, path: &str) -> String {
        format!("memory:{}", path)
    }
}
