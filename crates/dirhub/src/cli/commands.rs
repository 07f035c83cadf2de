//! # CLI Layer
//!
//! This module is **one possible UI client** for dirhub; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Owns the async runtime
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Logging, configuration, and the service built from it
//! 3. **Dispatch**: Route each command to a view loader or service call
//! 4. **Output Formatting**: Text via `render`, or JSON with `--json`
//! 5. **Error Handling**: Bubble errors up as `anyhow` for `main` to report

use super::form;
use super::render::{self, TerminalNotifier};
use super::setup::{BrowseArgs, Cli, Commands};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use dirhubapp::api::DirectoryService;
use dirhubapp::config::{load_config, DirhubConfig, CONFIG_FILE_NAME};
use dirhubapp::filter::{self, DirectoryFilter, ItemFilter, Selection};
use dirhubapp::model::DirectoryStatus;
use dirhubapp::pricing;
use dirhubapp::query::{Query, QueryState};
use dirhubapp::store::DataStore;
use dirhubapp::views;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

type Service = DirectoryService<Box<dyn DataStore>>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    let service = DirectoryService::from_config(&config).context("cannot open directory data")?;
    debug!(write_mode = %service.write_mode(), "service ready");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("cannot start runtime")?;
    runtime.block_on(dispatch(&cli, &service))
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("DIRHUB_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "dirhub=debug,dirhubapp=debug,warn"
        } else {
            "dirhub=warn,dirhubapp=warn"
        })
    });

    let format = env::var("DIRHUB_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Default settings file in the OS config directory.
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dirhub")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn resolve_config(cli: &Cli) -> Result<DirhubConfig> {
    let path = cli.config.clone().or_else(default_config_path);
    debug!(path = ?path, "loading configuration");
    Ok(load_config(path.as_deref())?)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

/// Run a page load through a query, surfacing a failed load as the error.
async fn load<T, F>(what: &str, fut: F) -> Result<T>
where
    F: std::future::Future<Output = dirhubapp::Result<T>>,
{
    let mut query = Query::new();
    query.run(fut).await;
    if let QueryState::Failed(err) = query.state() {
        debug!(error = %err, attempts = query.attempts(), "load failed");
    }
    query
        .into_result()
        .context("query did not settle")?
        .with_context(|| format!("failed to load {}", what))
}

fn search_query(search: &Option<String>) -> String {
    search.clone().unwrap_or_default()
}

async fn dispatch(cli: &Cli, service: &Service) -> Result<()> {
    let json = cli.json;
    let notifier = TerminalNotifier::new(json);

    match &cli.command {
        Commands::List { search } => {
            let view = load("dashboard", views::load_dashboard(service)).await?;
            let filter = DirectoryFilter {
                query: search_query(search),
                ..Default::default()
            };
            let shown = filter::filter_directories(&view.directories, &filter);
            emit(json, &shown, || render::dashboard(&view, &shown, today()))
        }
        Commands::Browse(args) => browse(service, args, json).await,
        Commands::Show { slug, search } => {
            let page = load("directory", views::load_directory_page(service, slug)).await?;
            let filter = ItemFilter {
                query: search_query(search),
                category: Selection::All,
            };
            let visible = page.visible_items(&filter);
            emit(json, &page, || render::directory_page(&page, &visible, today()))
        }
        Commands::Items {
            directory_id,
            search,
            category,
        } => {
            let items = service.list_items(*directory_id).await?;
            let filter = ItemFilter {
                query: search_query(search),
                category: category.map_or(Selection::All, Selection::Only),
            };
            let visible = filter::filter_items(&items, &filter);
            emit(json, &visible, || render::item_list(&visible))
        }
        Commands::Item { slug, item_id } => {
            let detail = load("item details", views::load_item_detail(service, slug, *item_id)).await?;
            emit(json, &detail, || render::item_detail(&detail))
        }
        Commands::Stats { directory_id } => match directory_id {
            Some(id) => {
                let stats = service.get_directory_stats(*id).await?;
                emit(json, &stats, || render::directory_stats(&stats))
            }
            None => {
                let stats = service.get_dashboard_stats().await?;
                emit(json, &stats, || render::dashboard_stats(&stats))
            }
        },
        Commands::Create(args) => {
            let fields = form::new_directory(args)?;
            let created = views::create_directory(service, &notifier, fields).await?;
            emit(json, &created, || render::directory(&created))
        }
        Commands::Update(args) => {
            let patch = form::directory_patch(args)?;
            let updated = views::update_directory(service, &notifier, args.id, &patch).await?;
            emit(json, &updated, || render::directory(&updated))
        }
        Commands::Delete { id } => {
            let ack = views::delete_directory(service, &notifier, *id).await?;
            emit(json, &ack, String::new)
        }
        Commands::Pricing { select } => {
            let selected = match select {
                Some(name) => pricing::select_tier(&notifier, name)
                    .map(|tier| tier.key())
                    .unwrap_or_else(|| pricing::DEFAULT_TIER.to_string()),
                None => pricing::DEFAULT_TIER.to_string(),
            };
            emit(json, &pricing::tiers(), || {
                render::pricing(pricing::tiers(), &selected)
            })
        }
    }
}

async fn browse(service: &Service, args: &BrowseArgs, json: bool) -> Result<()> {
    let filter = DirectoryFilter {
        query: search_query(&args.search),
        category: Selection::from_param(args.category.as_deref())
            .unwrap_or_else(|never| match never {}),
        status: Selection::<DirectoryStatus>::from_param(args.status.as_deref())
            .map_err(anyhow::Error::msg)?,
    };

    let view = load("directories", views::load_browse(service)).await?;

    let visible = view.visible(&filter, args.sort);
    emit(json, &visible, || render::browse(&view, &visible, today()))
}
