//! Binary entry point: install logging, resolve arguments, build the starting
//! catalog, and drive the menu over stdin/stdout until the user exits.
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use library_catalog::{Args, Catalog, Session};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("failed to install log subscriber")?;

    let mut catalog = if args.empty {
        Catalog::new()
    } else {
        Catalog::seeded()
    };
    tracing::info!(books = catalog.len(), "catalog ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut catalog, stdin.lock(), stdout.lock(), args.shell_config()).run()
}
