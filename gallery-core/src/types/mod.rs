//! Core types for the gallery catalog and reader

mod meta;
mod pages;
mod work;

pub use meta::WorkMeta;
pub use pages::{page_filename, PageStrategy, ReaderContext, ResolvedPageList};
pub use work::WorkRecord;
