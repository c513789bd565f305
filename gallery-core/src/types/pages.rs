//! Resolved page lists and the per-visit reader context

use super::WorkMeta;
use serde::{Deserialize, Serialize};

/// Filename of the sequentially named page at a 1-based index
pub fn page_filename(index: u32) -> String {
    format!("{:03}.jpg", index)
}

/// How a page list was produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PageStrategy {
    /// Taken verbatim from `meta.pages`
    Explicit,

    /// Synthesized from `meta.count`
    Count,

    /// Found by probing `001.jpg`, `002.jpg`, ... until the first miss
    Discovered,
}

/// Ordered page filenames for one work
///
/// Append-only: entries are never reordered or removed once pushed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedPageList {
    pub strategy: PageStrategy,
    pages: Vec<String>,
}

impl ResolvedPageList {
    /// Create an empty list for the given strategy
    pub fn new(strategy: PageStrategy) -> Self {
        Self {
            strategy,
            pages: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, filename: String) {
        self.pages.push(filename);
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.pages.iter()
    }

    pub fn into_pages(self) -> Vec<String> {
        self.pages
    }
}

impl<'a> IntoIterator for &'a ResolvedPageList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// State of one reader visit
///
/// Built fresh for every visit and handed to each reader step; nothing
/// about a visit outlives this value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReaderContext {
    pub slug: String,
    pub meta: WorkMeta,
    pub pages: Option<ResolvedPageList>,
}

impl ReaderContext {
    pub fn new(slug: impl Into<String>, meta: WorkMeta) -> Self {
        Self {
            slug: slug.into(),
            meta,
            pages: None,
        }
    }

    /// Title to display, falling back to the slug when absent or empty
    pub fn display_title(&self) -> &str {
        self.meta
            .title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_filename_padding() {
        assert_eq!(page_filename(1), "001.jpg");
        assert_eq!(page_filename(42), "042.jpg");
        assert_eq!(page_filename(999), "999.jpg");
        assert_eq!(page_filename(1000), "1000.jpg");
    }

    #[test]
    fn test_reader_context_title_fallback() {
        let ctx = ReaderContext::new("moth", WorkMeta::default());
        assert_eq!(ctx.display_title(), "moth");
        assert!(ctx.pages.is_none());

        let meta = WorkMeta {
            title: Some(String::new()),
            ..WorkMeta::default()
        };
        assert_eq!(ReaderContext::new("moth", meta).display_title(), "moth");
    }
}
