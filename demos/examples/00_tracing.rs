use coinlens_core::{HistoryChart, PredictionChart, Tier};
use coinlens_demos::common::{describe, init_tracing, load_config, provider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,coinlens=trace
    init_tracing();
    let config = load_config()?;
    let provider = provider();

    // GAPPY carries an unparseable date, so the merge logs a dropped point.
    for symbol in ["BTC", "GAPPY", "FAIL"] {
        let Some(history) = provider.history(symbol, Tier::Medium) else {
            continue;
        };
        match HistoryChart::build(symbol, &history, Tier::Medium, &config) {
            Ok(chart) => tracing::info!(symbol, points = chart.values.len(), "history chart ready"),
            Err(e) => tracing::warn!(symbol, "{}", describe(&e)),
        }
    }

    if let Some(payload) = provider.prediction("BTC") {
        let chart = PredictionChart::build("BTC", &payload, &config)?;
        tracing::info!(forecast = ?chart.forecast, "prediction chart ready");
    }

    Ok(())
}
