//! Renderer-agnostic view descriptions
//!
//! Everything here is a pure function from catalog or reader data to plain
//! values; binding them to HTML or a terminal is up to the front end.

use crate::catalog::{SearchKeys, WorkFilter};
use crate::config::GalleryConfig;
use crate::types::{ReaderContext, WorkRecord};
use serde::Serialize;

/// How asset and reader links are spelled for a given front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    /// Prefix for asset URLs, e.g. `works` or `/works`
    asset_base: String,

    /// Reader address without query, e.g. `reader.html` or `/reader`
    reader_page: String,
}

impl Links {
    pub fn new(asset_base: impl Into<String>, reader_page: impl Into<String>) -> Self {
        let asset_base = asset_base.into();
        Self {
            asset_base: asset_base.trim_end_matches('/').to_string(),
            reader_page: reader_page.into(),
        }
    }

    /// Root-relative links, as used by the static site itself
    pub fn relative(config: &GalleryConfig) -> Self {
        Self::new(config.works_base(), "reader.html")
    }

    /// URL of an asset inside a work's directory
    pub fn asset_url(&self, slug: &str, filename: &str) -> String {
        format!("{}/{}/{}", self.asset_base, slug, filename)
    }

    /// Cover image URL, defaulting to `cover.jpg` in the work's directory
    pub fn cover_url(&self, work: &WorkRecord) -> String {
        match &work.cover {
            Some(cover) if !cover.is_empty() => cover.clone(),
            _ => self.asset_url(&work.slug, "cover.jpg"),
        }
    }

    /// Reader address for a slug
    pub fn reader_href(&self, slug: &str) -> String {
        format!("{}?slug={}", self.reader_page, urlencoding::encode(slug))
    }
}

/// A clickable catalog card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Card {
    pub slug: String,
    pub href: String,
    pub cover_url: String,
    pub cover_alt: String,
    pub title: String,
    /// `"{artist} • {tags}"`, either part omitted when absent
    pub byline: String,
}

/// The index view for one query
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndexView {
    pub query: String,
    pub cards: Vec<Card>,
    /// Set when nothing matched and the empty-state indicator should show
    pub empty: bool,
}

/// A catalog card with what a client needs to re-filter it locally
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub card: Card,
    pub keys: SearchKeys,
    /// Whether the card matches the initial query
    pub visible: bool,
}

/// Every card of the catalog, marked against an initial query
///
/// Later query changes are applied to these entries without reloading
/// the catalog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogView {
    pub query: String,
    pub entries: Vec<CatalogEntry>,
    pub empty: bool,
}

/// One image of the reader view
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageImage {
    pub url: String,
    pub alt: String,
    pub lazy: bool,
}

/// Title and detail line shown above the pages
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetaHeader {
    pub title: String,
    pub details: String,
}

pub fn render_card(links: &Links, work: &WorkRecord) -> Card {
    let mut byline = String::new();
    if let Some(artist) = work.artist.as_deref().filter(|a| !a.is_empty()) {
        byline.push_str(artist);
        byline.push_str(" • ");
    }
    byline.push_str(&work.tags.join(", "));

    Card {
        slug: work.slug.clone(),
        href: links.reader_href(&work.slug),
        cover_url: links.cover_url(work),
        cover_alt: work.display_title().to_string(),
        title: work.display_title().to_string(),
        byline,
    }
}

/// Filter the catalog and describe the resulting cards
pub fn render_index(links: &Links, works: &[WorkRecord], query: &str) -> IndexView {
    let cards: Vec<Card> = WorkFilter::new(query)
        .apply(works)
        .into_iter()
        .map(|work| render_card(links, work))
        .collect();

    IndexView {
        query: query.to_string(),
        empty: cards.is_empty(),
        cards,
    }
}

/// Describe the whole catalog, marking the cards `query` matches
pub fn render_catalog(links: &Links, works: &[WorkRecord], query: &str) -> CatalogView {
    let filter = WorkFilter::new(query);
    let entries: Vec<CatalogEntry> = works
        .iter()
        .map(|work| {
            let keys = SearchKeys::of(work);
            CatalogEntry {
                card: render_card(links, work),
                visible: filter.matches_keys(&keys),
                keys,
            }
        })
        .collect();

    CatalogView {
        query: query.to_string(),
        empty: !entries.iter().any(|entry| entry.visible),
        entries,
    }
}

/// Describe a single page; `index` is 0-based
pub fn render_page(links: &Links, ctx: &ReaderContext, index: usize, filename: &str) -> PageImage {
    PageImage {
        url: links.asset_url(&ctx.slug, filename),
        alt: format!("{} page {}", ctx.display_title(), index + 1),
        lazy: true,
    }
}

/// Describe every resolved page, in document order
pub fn render_pages(links: &Links, ctx: &ReaderContext) -> Vec<PageImage> {
    ctx.pages
        .iter()
        .flat_map(|list| list.iter())
        .enumerate()
        .map(|(index, filename)| render_page(links, ctx, index, filename))
        .collect()
}

pub fn render_meta(ctx: &ReaderContext) -> MetaHeader {
    let mut parts = Vec::new();
    if let Some(artist) = ctx.meta.artist.as_deref().filter(|a| !a.is_empty()) {
        parts.push(format!("Artist: {}", artist));
    }
    if let Some(tags) = &ctx.meta.tags {
        parts.push(format!("• {}", tags.join(", ")));
    }

    MetaHeader {
        title: ctx.display_title().to_string(),
        details: parts.join(" "),
    }
}
