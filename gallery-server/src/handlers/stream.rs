//! Server-Sent Events handler for page discovery

use super::error_status;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use gallery_core::render::{render_page, PageImage};
use gallery_core::{open_reader, PageResolver, PageStrategy};
use std::convert::Infallible;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::StreamExt;

/// Messages sent while resolving
#[derive(Debug)]
enum PageEvent {
    Page(PageImage),
    Done {
        strategy: PageStrategy,
        count: usize,
    },
}

/// Stream a work's pages as they are resolved
///
/// Emits one `page` event per page in reading order, then a `done` event.
pub async fn stream_pages(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, (StatusCode, String)> {
    let mut ctx = open_reader(state.source.as_ref(), &state.config, Some(&slug))
        .await
        .map_err(|e| (error_status(&e), e.to_string()))?;

    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let links = state.links();
        let reader = ctx.clone();
        let page_tx = tx.clone();

        // A send only fails once the client is gone; discovery still runs out
        let mut emit = |index: usize, filename: &str| {
            let _ = page_tx.send(PageEvent::Page(render_page(&links, &reader, index, filename)));
        };
        PageResolver::from_config(state.source.as_ref(), &state.config)
            .resolve_into(&mut ctx, &mut emit)
            .await;

        let (strategy, count) = ctx
            .pages
            .as_ref()
            .map(|p| (p.strategy, p.len()))
            .unwrap_or((PageStrategy::Discovered, 0));
        tracing::debug!("Resolved {} pages for {}", count, ctx.slug);
        let _ = tx.send(PageEvent::Done { strategy, count });
    });

    let event_stream = UnboundedReceiverStream::new(rx).map(|event| {
        let (event_type, data) = match event {
            PageEvent::Page(page) => (
                "page",
                serde_json::json!({ "url": page.url, "alt": page.alt }).to_string(),
            ),
            PageEvent::Done { strategy, count } => (
                "done",
                serde_json::json!({ "strategy": strategy, "count": count }).to_string(),
            ),
        };

        Ok(Event::default().event(event_type).data(data))
    });

    Ok(Sse::new(event_stream).keep_alive(KeepAlive::default()))
}
