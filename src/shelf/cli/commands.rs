//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the catalog view and configuration
//! - `handle_*()`: Per-command handlers that call the API and print rendered output

use super::render::{render_catalog, render_categories, render_messages, render_product};
use super::session::{run_session, SessionOptions};
use super::setup::{Cli, Commands, FilterArgs};
use super::theme::color_enabled;
use clap::Parser;
use directories::ProjectDirs;
use shelf::api::CatalogView;
use shelf::config::ShelfConfig;
use shelf::criteria::CategoryFilter;
use shelf::error::Result;
use shelf::model::ProductId;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Overrides where `config.json` is looked up.
pub const CONFIG_DIR_ENV: &str = "SHELF_CONFIG_DIR";

struct AppContext {
    view: CatalogView,
    config: ShelfConfig,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::List(args)) => handle_list(&mut ctx, args),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Browse) => handle_browse(&mut ctx),
        None => handle_list(&mut ctx, FilterArgs::default()),
    }
}

/// Logs go to stderr so rendered output on stdout stays clean.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shelf=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> AppContext {
    let mut config = match config_dir() {
        Some(dir) => ShelfConfig::load(&dir).unwrap_or_else(|e| {
            warn!(dir = %dir.display(), error = %e, "could not load config, using defaults");
            ShelfConfig::default()
        }),
        None => ShelfConfig::default(),
    };

    if let Some(columns) = cli.columns {
        config.set_columns(columns);
    }
    debug!(?config, "configuration");

    AppContext {
        view: CatalogView::default(),
        config,
        use_color: color_enabled(cli.no_color),
    }
}

fn handle_list(ctx: &mut AppContext, args: FilterArgs) -> Result<()> {
    let criteria = args.into_criteria()?;
    ctx.view = std::mem::take(&mut ctx.view).with_criteria(criteria);
    let result = ctx.view.visible();

    print!(
        "{}",
        render_catalog(
            &result.listed_products,
            ctx.view.criteria(),
            &ctx.config,
            ctx.use_color
        )
    );
    print!(
        "{}",
        render_messages(&result.messages, ctx.use_color)
    );
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u32) -> Result<()> {
    let result = ctx.view.show(ProductId(id))?;
    for product in &result.listed_products {
        print!("{}", render_product(product, &ctx.config, ctx.use_color));
    }
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.view.categories();
    print!(
        "{}",
        render_categories(&result.category_counts, CategoryFilter::All, ctx.use_color)
    );
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let options = SessionOptions {
        use_color: ctx.use_color,
        prompt: stdin.is_terminal(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_session(&mut ctx.view, stdin.lock(), &mut out, &ctx.config, &options)
}
