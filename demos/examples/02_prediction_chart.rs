use coinlens_core::prediction_charts;
use coinlens_demos::common::{describe, init_tracing, load_config, provider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = load_config()?;
    let payloads = provider().predictions(&["BTC", "ETH", "SOL", "FAIL"]);

    for (symbol, chart) in prediction_charts(&payloads, &config) {
        let chart = match chart {
            Ok(chart) => chart,
            Err(e) => {
                println!("\n## {symbol}: {}", describe(&e));
                continue;
            }
        };
        println!(
            "\n## {symbol}: axis [{:.1}, {:.1}] step {:.1}",
            chart.axis.min, chart.axis.max, chart.axis.step_size
        );
        println!("{:<10} | {:>12} | {:>12}", "Day", "Actual", "Predicted");
        let fmt = |v: &Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
        let tail = chart.labels.len().saturating_sub(5);
        let rows = chart
            .labels
            .iter()
            .zip(chart.actual.iter().zip(&chart.predicted))
            .skip(tail);
        for (label, (actual, predicted)) in rows {
            println!("{label:<10} | {:>12} | {:>12}", fmt(actual), fmt(predicted));
        }
    }

    Ok(())
}
