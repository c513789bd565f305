//! Gallery Core Library
//!
//! Catalog and reader logic for a static image gallery. The gallery is a
//! `works.json` manifest plus one directory per work holding its images and
//! an optional `meta.json`. This crate loads and filters the catalog, resolves
//! the pages of a work and describes the views; front ends bind those
//! descriptions to a terminal or HTML.

pub mod catalog;
pub mod config;
pub mod error;
pub mod nav;
pub mod reader;
pub mod render;
pub mod source;
pub mod types;

pub use catalog::{filter_works, ManifestLoader, SearchKeys, WorkFilter};
pub use config::{GalleryConfig, GalleryRoot};
pub use error::{GalleryError, Result, SourceError};
pub use reader::{open_reader, validate_slug, MetaLoader, PageResolver, PageSink};
pub use source::{AssetSource, HttpSource, LocalSource, MemorySource};
pub use types::{PageStrategy, ReaderContext, ResolvedPageList, WorkMeta, WorkRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reader_flow() {
        let source = MemorySource::new()
            .with("works/moth/meta.json", br#"{"title":"Moth","count":2}"#.to_vec());
        let config = GalleryConfig::default();

        let mut ctx = open_reader(&source, &config, Some("moth")).await.unwrap();
        let mut seen = Vec::new();
        PageResolver::from_config(&source, &config)
            .resolve_into(&mut ctx, &mut |_: usize, name: &str| seen.push(name.to_string()))
            .await;

        assert_eq!(ctx.display_title(), "Moth");
        assert_eq!(seen, vec!["001.jpg", "002.jpg"]);
        assert_eq!(ctx.pages.unwrap().strategy, PageStrategy::Count);
    }
}
