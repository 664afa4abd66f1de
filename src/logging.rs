//! Tracing bootstrap shared by the CLI commands and the HTTP server.

use std::{
    env,
    io::{self, IsTerminal},
};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directives applied when `RUST_LOG` is unset or unparseable: this crate and
/// request traces at info, everything else at warn.
pub const DEFAULT_DIRECTIVES: &str = "warn,medscan=info,tower_http=info";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVES`].
pub fn env_filter() -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(DEFAULT_DIRECTIVES).context("parsing default log directives"),
    }
}

/// Install the global subscriber. Events go to stderr so search results on
/// stdout stay machine-readable. Later calls are no-ops.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter()?);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::debug!(rust_log = env::var_os("RUST_LOG").is_some(), "tracing initialised");
    Ok(())
}
