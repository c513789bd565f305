//! List command implementation

use anyhow::{Context, Result};
use super::asset_links;
use gallery_core::render::{render_index, Card};
use gallery_core::{GalleryConfig, ManifestLoader};
use serde::Serialize;

/// A listed work; the reader is reached with `command`
#[derive(Serialize)]
struct ListedWork<'a> {
    slug: &'a str,
    title: &'a str,
    byline: &'a str,
    cover_url: &'a str,
    command: String,
}

impl<'a> From<&'a Card> for ListedWork<'a> {
    fn from(card: &'a Card) -> Self {
        Self {
            slug: &card.slug,
            title: &card.title,
            byline: &card.byline,
            cover_url: &card.cover_url,
            command: format!("gallery read {}", card.slug),
        }
    }
}

#[derive(Serialize)]
struct ListOutput<'a> {
    query: &'a str,
    empty: bool,
    cards: Vec<ListedWork<'a>>,
}

/// List the works matching a query
pub async fn list(config: &GalleryConfig, query: &str, json: bool) -> Result<()> {
    let source = config.open_source().context("Failed to open gallery")?;

    // An unreadable manifest is logged by the loader and lists nothing
    let works = ManifestLoader::from_config(source.as_ref(), config)
        .load()
        .await;

    let view = render_index(&asset_links(source.as_ref(), config), &works, query);

    if json {
        let output = ListOutput {
            query: &view.query,
            empty: view.empty,
            cards: view.cards.iter().map(ListedWork::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if view.empty {
        if query.trim().is_empty() {
            println!("No works found");
        } else {
            println!("No works match '{}'", query.trim());
        }
        return Ok(());
    }

    for card in &view.cards {
        println!("{}  [{}]", card.title, card.slug);
        if !card.byline.is_empty() {
            println!("    {}", card.byline);
        }
        println!("    cover: {}", card.cover_url);
    }

    tracing::debug!("{} of {} works shown", view.cards.len(), works.len());

    Ok(())
}
