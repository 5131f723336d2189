//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `catalog_core` wiring end to end: config, logging, store, search.
//! - Keep output deterministic JSON so results can be diffed by hand.
//!
//! Usage: `catalog [filter] [sort] [sort_dir] [page] [per_page]`.
//! An empty argument (`""`) skips a position.

use anyhow::{Context, Result};
use catalog_core::{
    init_logging, Category, CategoryCreateCommand, CategoryInMemoryRepository, CoreConfig,
    RawSearchParams, Repository, SearchParams, SearchableRepository,
};
use log::{error, info};
use std::process::ExitCode;

const SEED: [(&str, Option<&str>, bool); 5] = [
    ("Movie", Some("Feature-length films"), true),
    ("Documentary", None, true),
    ("Series", Some("Episodic shows"), true),
    ("Short Movie", None, false),
    ("Animation", Some("Animated titles"), true),
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err:#}");
            eprintln!("catalog: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = CoreConfig::from_env();

    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)
            .with_context(|| format!("failed to start logging in {}", log_dir.display()))?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        catalog_core::core_version()
    );

    let store = seed_store().await?;
    let raw = raw_params_from_args(std::env::args().skip(1));
    let params = SearchParams::from_raw(&raw, config.pagination);

    let result = store.search(&params).await.context("search failed")?;
    let json = serde_json::to_string_pretty(&result).context("failed to encode result")?;
    println!("{json}");
    Ok(())
}

async fn seed_store() -> Result<CategoryInMemoryRepository> {
    let store = CategoryInMemoryRepository::new();
    let mut categories = Vec::with_capacity(SEED.len());
    for (name, description, is_active) in SEED {
        let category = Category::create(CategoryCreateCommand {
            name: name.to_string(),
            description: description.map(str::to_string),
            is_active: Some(is_active),
        })
        .with_context(|| format!("invalid seed category `{name}`"))?;
        categories.push(category);
    }
    store.bulk_insert(categories).await?;
    Ok(store)
}

fn raw_params_from_args(args: impl IntoIterator<Item = String>) -> RawSearchParams {
    let mut positional = args
        .into_iter()
        .map(|arg| Some(arg).filter(|value| !value.trim().is_empty()));
    let mut next = || positional.next().flatten();
    RawSearchParams {
        filter: next(),
        sort: next(),
        sort_dir: next(),
        page: next(),
        per_page: next(),
    }
}
