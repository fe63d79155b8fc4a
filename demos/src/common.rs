use std::path::Path;

use coinlens_core::{ChartConfig, CoinlensError};
use coinlens_mock::MockProvider;
use tracing_subscriber::fmt::format::FmtSpan;

/// Environment variable naming a JSON file with a `ChartConfig`.
pub const CONFIG_ENV: &str = "COINLENS_CONFIG";

/// Initialize a human-friendly tracing subscriber with env-based filtering.
///
/// Suggested: `RUST_LOG=info,coinlens=debug`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Provider for demos. Always the deterministic mock; no network access.
#[must_use]
pub const fn provider() -> MockProvider {
    MockProvider::new()
}

/// Load chart configuration from the file named by [`CONFIG_ENV`], or the
/// defaults when it is unset.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or the parsed
/// configuration fails validation.
pub fn load_config() -> Result<ChartConfig, Box<dyn std::error::Error>> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => read_config(Path::new(&path))?,
        None => ChartConfig::default(),
    };
    config.validate()?;
    tracing::debug!(?config, "chart configuration loaded");
    Ok(config)
}

fn read_config(path: &Path) -> Result<ChartConfig, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: ChartConfig = serde_json::from_str(&raw)?;
    Ok(config)
}

/// One-line rendering of an error for demo output.
#[must_use]
pub fn describe(err: &CoinlensError) -> String {
    if err.is_actionable() {
        format!("error: {err}")
    } else {
        format!("no data ({err})")
    }
}
