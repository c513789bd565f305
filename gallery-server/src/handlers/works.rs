//! Works API handlers

use super::error_status;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use gallery_core::nav::{activate, NavAction, NavControl};
use gallery_core::render::{render_index, render_meta, render_pages, Card, MetaHeader, PageImage};
use gallery_core::{open_reader, validate_slug, ManifestLoader, PageResolver, PageStrategy, WorkMeta};
use serde::{Deserialize, Serialize};

/// Query parameters for listing works
#[derive(Debug, Deserialize)]
pub struct ListWorksQuery {
    /// Search query
    pub search: Option<String>,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListWorksResponse {
    pub works: Vec<Card>,
    pub total: usize,
}

/// List works, filtered by `search`
pub async fn list_works(
    State(state): State<AppState>,
    Query(query): Query<ListWorksQuery>,
) -> Json<ListWorksResponse> {
    let works = ManifestLoader::from_config(state.source.as_ref(), &state.config)
        .load()
        .await;
    let view = render_index(
        &state.links(),
        &works,
        query.search.as_deref().unwrap_or_default(),
    );

    Json(ListWorksResponse {
        total: view.cards.len(),
        works: view.cards,
    })
}

/// Work detail response
#[derive(Debug, Serialize)]
pub struct WorkResponse {
    pub slug: String,
    pub header: MetaHeader,
    pub meta: WorkMeta,
    pub strategy: PageStrategy,
    pub pages: Vec<PageImage>,
}

/// Get a work's metadata and fully resolved pages
///
/// Discovery is awaited to completion; use the page stream to receive
/// pages as they are found.
pub async fn get_work(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<WorkResponse>, (StatusCode, String)> {
    let mut ctx = open_reader(state.source.as_ref(), &state.config, Some(&slug))
        .await
        .map_err(|e| (error_status(&e), e.to_string()))?;

    PageResolver::from_config(state.source.as_ref(), &state.config)
        .resolve_into(&mut ctx, &mut |_: usize, _: &str| {})
        .await;

    let strategy = ctx.meta.strategy();
    let pages = render_pages(&state.links(), &ctx);

    Ok(Json(WorkResponse {
        header: render_meta(&ctx),
        slug: ctx.slug,
        meta: ctx.meta,
        strategy,
        pages,
    }))
}

/// Download response
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub slug: String,
    pub message: &'static str,
}

/// Download guidance; bulk download is not offered
pub async fn download_work(
    Path(slug): Path<String>,
) -> Result<Json<DownloadResponse>, (StatusCode, String)> {
    let slug = validate_slug(Some(&slug))
        .map_err(|e| (error_status(&e), e.to_string()))?
        .to_string();

    match activate(NavControl::Download) {
        NavAction::ShowMessage { message } => Ok(Json(DownloadResponse { slug, message })),
        NavAction::Scroll { .. } => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "download control is not a message".to_string(),
        )),
    }
}
