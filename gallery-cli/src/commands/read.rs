//! Read command implementation

use anyhow::{Context, Result};
use super::asset_links;
use gallery_core::render::{render_meta, render_page, render_pages, MetaHeader, PageImage};
use gallery_core::{open_reader, GalleryConfig, PageResolver, PageStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// Reader output
#[derive(Serialize)]
struct ReadOutput {
    slug: String,
    header: MetaHeader,
    strategy: PageStrategy,
    pages: Vec<PageImage>,
}

/// Resolve a work's pages and print them as they are found
pub async fn read(config: &GalleryConfig, slug: &str, json: bool) -> Result<()> {
    let source = config.open_source().context("Failed to open gallery")?;

    let mut ctx = open_reader(source.as_ref(), config, Some(slug)).await?;
    let links = asset_links(source.as_ref(), config);
    let header = render_meta(&ctx);

    if !json {
        println!("{}", header.title);
        if !header.details.is_empty() {
            println!("{}", header.details);
        }
    }

    let spinner = if json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .context("Invalid spinner template")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Resolving pages...");
        pb
    };

    {
        // Each page is printed as soon as it is resolved
        let reader = ctx.clone();
        let mut show = |index: usize, filename: &str| {
            if json {
                return;
            }
            let page = render_page(&links, &reader, index, filename);
            spinner.suspend(|| println!("{}", page.url));
            spinner.set_message(format!("{} found", index + 1));
        };
        PageResolver::from_config(source.as_ref(), config)
            .resolve_into(&mut ctx, &mut show)
            .await;
    }
    spinner.finish_and_clear();

    let pages = render_pages(&links, &ctx);
    if json {
        let output = ReadOutput {
            slug: ctx.slug.clone(),
            header,
            strategy: ctx
                .pages
                .as_ref()
                .map(|p| p.strategy)
                .unwrap_or(PageStrategy::Discovered),
            pages,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if pages.is_empty() {
        println!("No pages found");
    } else {
        println!("Total pages: {}", pages.len());
    }

    Ok(())
}
