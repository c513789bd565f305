//! Page list resolution

use crate::config::GalleryConfig;
use crate::source::AssetSource;
use crate::types::{page_filename, PageStrategy, ReaderContext, ResolvedPageList};

/// Receives pages as soon as they are resolved, in ascending order
pub trait PageSink {
    fn page(&mut self, index: usize, filename: &str);
}

impl<F> PageSink for F
where
    F: FnMut(usize, &str),
{
    fn page(&mut self, index: usize, filename: &str) {
        self(index, filename)
    }
}

/// Decides the page list of a work
///
/// Strategies, first applicable wins: the explicit `pages` list, then
/// `count` synthesized names, then sequential discovery.
pub struct PageResolver<'a> {
    source: &'a dyn AssetSource,
    works_base: String,
}

impl<'a> PageResolver<'a> {
    pub fn new(source: &'a dyn AssetSource, works_base: impl Into<String>) -> Self {
        Self {
            source,
            works_base: works_base.into(),
        }
    }

    pub fn from_config(source: &'a dyn AssetSource, config: &GalleryConfig) -> Self {
        Self::new(source, config.works_base())
    }

    /// Resolve the page list, feeding each page to `sink` as it is decided
    pub async fn resolve(
        &self,
        ctx: &ReaderContext,
        sink: &mut (dyn PageSink + Send),
    ) -> ResolvedPageList {
        match ctx.meta.strategy() {
            PageStrategy::Explicit => {
                let mut list = ResolvedPageList::new(PageStrategy::Explicit);
                for page in ctx.meta.explicit_pages().unwrap_or_default() {
                    sink.page(list.len(), page);
                    list.push(page.clone());
                }
                list
            }
            PageStrategy::Count => {
                let mut list = ResolvedPageList::new(PageStrategy::Count);
                for index in 1..=ctx.meta.positive_count().unwrap_or_default() {
                    let name = page_filename(index);
                    sink.page(list.len(), &name);
                    list.push(name);
                }
                list
            }
            PageStrategy::Discovered => self.discover(&ctx.slug, sink).await,
        }
    }

    /// Resolve and store the result in the context
    pub async fn resolve_into(
        &self,
        ctx: &mut ReaderContext,
        sink: &mut (dyn PageSink + Send),
    ) {
        let list = self.resolve(ctx, sink).await;
        ctx.pages = Some(list);
    }

    /// Probe `001.jpg`, `002.jpg`, ... one at a time until the first miss.
    ///
    /// A failed probe, including a transport error, ends discovery for good:
    /// later indices are never tried even if they exist.
    async fn discover(
        &self,
        slug: &str,
        sink: &mut (dyn PageSink + Send),
    ) -> ResolvedPageList {
        let mut list = ResolvedPageList::new(PageStrategy::Discovered);
        let mut index: u32 = 1;

        loop {
            let name = page_filename(index);
            let path = format!("{}/{}/{}", self.works_base, slug, name);

            let found = matches!(self.source.exists(&path).await, Ok(true));
            if !found {
                tracing::debug!("Discovery for {} stopped at {}", slug, name);
                break;
            }

            sink.page(list.len(), &name);
            list.push(name);

            index = match index.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }

        list
    }
}
