use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};
use tracing::{debug, info};

use fma_search::config::{self, Config};
use fma_search::host::LocalHost;
use fma_search::http::HttpFetcher;
use fma_search::{FreeMusicArchive, MediaSearchProvider, MediaType, SearchQuery, SearchResult};

#[derive(Parser)]
#[command(name = "fma-search", about = "Search Free Music Archive for playable tracks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for tracks matching a phrase
    Search {
        /// Phrase as it would be spoken
        #[arg(required = true)]
        phrase: Vec<String>,
        /// Requested media type
        #[arg(long, short = 't', default_value = "generic")]
        media_type: MediaType,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the search-page URL for a phrase
    Url {
        phrase: Vec<String>,
    },
    /// Show the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        init: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_config();
    match cli.command {
        Commands::Search {
            phrase,
            media_type,
            json,
        } => cmd_search(&cfg, &phrase.join(" "), media_type, json),
        Commands::Url { phrase } => cmd_url(&cfg, &phrase.join(" ")),
        Commands::Config { init } => cmd_config(&cfg, init),
    }
}

fn build_provider(cfg: &Config) -> Result<FreeMusicArchive<HttpFetcher, LocalHost>> {
    let fetcher = HttpFetcher::new(&cfg.http).context("failed to create HTTP client")?;
    let host = LocalHost::new(&cfg.resources);
    FreeMusicArchive::new(cfg.provider.clone(), fetcher, host)
        .context("invalid provider settings")
}

fn cmd_search(cfg: &Config, phrase: &str, media_type: MediaType, json: bool) -> Result<()> {
    let provider = build_provider(cfg)?;

    let results = if provider.supports(media_type) {
        provider
            .search(&SearchQuery::new(phrase, media_type))
            .with_context(|| format!("{} search for {:?} failed", provider.name(), phrase))?
    } else {
        info!("{} does not handle {} requests", provider.name(), media_type);
        Vec::new()
    };
    debug!(
        "timeout extensions requested: {}s",
        provider.host().extended_secs()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }
    Ok(())
}

fn print_table(results: &[SearchResult]) {
    if results.is_empty() {
        println!("No results.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Title", "Artist", "Album", "Confidence", "URI"]);
    for (i, r) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.title),
            Cell::new(&r.artist),
            Cell::new(r.album.as_deref().unwrap_or("-")),
            Cell::new(r.match_confidence),
            Cell::new(&r.uri),
        ]);
    }
    println!("{table}");
    println!("\n{} results", results.len());
}

fn cmd_url(cfg: &Config, phrase: &str) -> Result<()> {
    let provider = build_provider(cfg)?;
    println!("{}", provider.query_url(phrase));
    Ok(())
}

fn cmd_config(cfg: &Config, init: bool) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg)?);
    if init {
        config::save_config(cfg)?;
        println!("\nSaved to {}", config::config_path().display());
    }
    Ok(())
}
