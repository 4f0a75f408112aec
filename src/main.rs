//! `spdx-expr` — parse SPDX license expressions, print their canonical form
//! and list the licenses they reference.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install logging ([`logging`]).
//! 2. Load config ([`spdx_expr::config::load_config`]) and build the registry.
//! 3. Parse each expression into an [`spdx_expr::models::ExpressionReport`].
//! 4. Render the requested report ([`spdx_expr::report`]).
//! 5. Exit `0` (all parsed) or `1` (at least one expression unparseable).

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Command, ReportFormat};
use spdx_expr::config::load_config;
use spdx_expr::models::ExpressionReport;
use spdx_expr::report::{self, terminal::View};
use spdx_expr::IdentifierRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let registry = config.registry();
    debug!(
        version = registry.version(),
        licenses = registry.license_count(),
        exceptions = registry.exception_count(),
        "registry ready"
    );

    let (expressions, view) = match &cli.command {
        Command::Normalize { expressions } => (expressions, View::Canonical),
        Command::Licenses { expressions } => (expressions, View::Licenses),
    };

    let reports: Vec<ExpressionReport> = expressions
        .iter()
        .map(|expr| ExpressionReport::build(expr, &registry))
        .collect();

    let format = cli
        .report
        .unwrap_or_else(|| ReportFormat::from(config.output.format));

    match format {
        ReportFormat::Terminal => report::terminal::render(&reports, view, cli.quiet),
        ReportFormat::Json => println!("{}", report::json::render(&reports)?),
    }

    if reports.iter().any(|r| !r.is_parseable()) {
        std::process::exit(1);
    }

    Ok(())
}
