//! HTML view handlers

use super::error_status;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use gallery_core::render::{render_catalog, render_meta, render_pages};
use gallery_core::{open_reader, GalleryError, ManifestLoader, PageResolver, PageStrategy};
use serde::Deserialize;

/// Query parameters for the index page
#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Search query
    #[serde(default)]
    pub q: String,

    /// Message to show in an alert banner
    pub alert: Option<String>,
}

/// Index page: every work, with those not matching `q` hidden
///
/// The page filters itself as the query is edited; `q` is only the
/// initial state.
pub async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let works = ManifestLoader::from_config(state.source.as_ref(), &state.config)
        .load()
        .await;
    let view = render_catalog(&state.links(), &works, &query.q);

    Html(views::index_page(&view, query.alert.as_deref()).into_string())
}

/// Query parameters for the reader page
#[derive(Debug, Deserialize)]
pub struct ReaderQuery {
    pub slug: Option<String>,
}

/// Reader page for `?slug=`
///
/// Without a slug the visitor is sent back to the index with an alert.
pub async fn reader_page(
    State(state): State<AppState>,
    Query(query): Query<ReaderQuery>,
) -> Response {
    let mut ctx =
        match open_reader(state.source.as_ref(), &state.config, query.slug.as_deref()).await {
            Ok(ctx) => ctx,
            Err(GalleryError::MissingSlug) => {
                let alert = GalleryError::MissingSlug.to_string();
                let target = format!("/?alert={}", urlencoding::encode(&alert));
                return Redirect::to(&target).into_response();
            }
            Err(e) => return (error_status(&e), e.to_string()).into_response(),
        };

    let links = state.links();
    let header = render_meta(&ctx);
    let download_href = links.asset_url(&ctx.slug, "");

    // Listed and counted pages are known up front; discovered pages stream in
    let stream = match ctx.meta.strategy() {
        PageStrategy::Discovered => Some(format!(
            "/api/v1/works/{}/pages/stream",
            urlencoding::encode(&ctx.slug)
        )),
        PageStrategy::Explicit | PageStrategy::Count => {
            PageResolver::from_config(state.source.as_ref(), &state.config)
                .resolve_into(&mut ctx, &mut |_: usize, _: &str| {})
                .await;
            None
        }
    };

    let pages = render_pages(&links, &ctx);
    let markup = views::reader_page(&header, &pages, stream.as_deref(), &download_href);

    (StatusCode::OK, Html(markup.into_string())).into_response()
}
