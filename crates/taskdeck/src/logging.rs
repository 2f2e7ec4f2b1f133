//! Logging bootstrap.
//!
//! The library only emits `tracing` events; it never installs a subscriber on
//! its own. Embedders that have no subscriber of their own call
//! [`init_logging`] once at startup.
//!
//! # Invariants
//! - Initialization is idempotent: later calls return the filter already in use.
//! - Initialization never panics.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, TaskError};

const DEFAULT_FILTER: &str = "info";

static ACTIVE_FILTER: OnceCell<String> = OnceCell::new();

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins over `filter` when set; `filter` falls back to `info`.
/// Returns the directive string that ended up active.
pub fn init_logging(filter: Option<&str>) -> Result<&'static str> {
    let active = ACTIVE_FILTER.get_or_try_init(|| -> Result<String> {
        let directive = std::env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| filter.unwrap_or(DEFAULT_FILTER).to_string());

        let env_filter = EnvFilter::try_new(&directive)
            .map_err(|e| TaskError::Config(format!("invalid log filter `{directive}`: {e}")))?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(env_filter)
            .try_init()
            .map_err(|e| TaskError::Config(format!("failed to install subscriber: {e}")))?;

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            filter = %directive,
            "taskdeck logging initialized"
        );
        Ok(directive)
    })?;
    Ok(active.as_str())
}

/// The active filter directive, if [`init_logging`] has succeeded.
pub fn logging_status() -> Option<&'static str> {
    ACTIVE_FILTER.get().map(String::as_str)
}
