//! Gallery CLI - browse a static image gallery from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gallery_core::{GalleryConfig, GalleryRoot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gallery")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Gallery root: a directory or an http(s) URL (overrides GALLERY_ROOT)
    #[arg(short, long, global = true)]
    root: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the works in the gallery
    List {
        /// Only show works whose title, artist or tags contain this text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read a work: show its details and resolve its pages
    Read {
        /// Work slug
        slug: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Explain how to download a work's images
    Download {
        /// Work slug
        slug: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "gallery_cli=debug,gallery_core=debug"
    } else {
        "gallery_cli=info,gallery_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = GalleryConfig::from_env()?;
    if let Some(root) = &cli.root {
        config = config.with_root(GalleryRoot::parse(root)?);
    }

    match cli.command {
        Commands::List { query, json } => commands::list(&config, &query, json).await,

        Commands::Read { slug, json } => commands::read(&config, &slug, json).await,

        Commands::Download { slug } => commands::download(&slug),
    }
}
