//! quote-sync-server CLI: stdio server or one-shot preview.
//!
//! Settings come from `packages/conf/quote-sync.yaml` under `PRJ_ROOT`, with
//! user overrides in `<PRJ_CONFIG_HOME>/quote-sync/settings.yaml`. Override the
//! config home with `--conf <dir>`.
//!
//! Logging: set `RUST_LOG=quote_sync=debug` (or `warn`, `info`) to see engine
//! logs on stderr.

mod cli;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quote_ast::Dialect;
use quote_sync::{
    DelimiterKind, RawEdit, Session, SyncConfig, load_sync_settings, render_corrections,
    set_config_home_override,
};
use quote_sync_server::run_stdio;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(conf_dir) = cli.conf.clone() {
        set_config_home_override(conf_dir);
    }

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "quote_sync=debug,quote_sync_server=debug"
        } else {
            "quote_sync=info,quote_sync_server=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = SyncConfig::from(load_sync_settings());
    tracing::debug!(
        dialects = ?config.enabled_dialects,
        strict_parse = config.strict_parse,
        "loaded settings"
    );

    match cli.command {
        Command::Serve => run_stdio(Session::new(config)).await,
        Command::Preview {
            file,
            line,
            character,
            delimiter,
        } => preview(config, &file, line, character, delimiter.into()),
    }
}

fn preview(
    config: SyncConfig,
    file: &Path,
    line: usize,
    character: usize,
    delimiter: DelimiterKind,
) -> Result<()> {
    let dialect = Dialect::from_path(file)
        .with_context(|| format!("unsupported file type: {}", file.display()))?;
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let edit = match delimiter.as_char() {
        Some(quote) => RawEdit::replace_char(line, character, quote.to_string()),
        None => RawEdit::delete_char(line, character),
    };

    let uri = file.display().to_string();
    let mut session = Session::new(config);
    session.open_document(&uri, dialect.language_id(), text.clone());
    let Some(response) = session.handle_change(&uri, &[edit], text) else {
        bail!("no quoted literal boundary at {}:{line}:{character}", file.display());
    };

    print!("{}", render_corrections(&response.results));
    Ok(())
}
