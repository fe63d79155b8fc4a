use coinlens_core::{Tier, history_charts};
use coinlens_demos::common::{describe, init_tracing, load_config, provider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = load_config()?;
    let provider = provider();

    for tier in Tier::ALL {
        let histories = provider.histories(&["BTC", "ETH", "FAIL"], tier);
        println!("\n## {} window", tier.title());

        // Each asset succeeds or fails on its own.
        for (symbol, chart) in history_charts(&histories, tier, &config) {
            match chart {
                Ok(chart) => {
                    println!(
                        "{symbol:<4} {:>3} points | axis [{:.0}, {:.0}] step {:.2} | change {}",
                        chart.values.len(),
                        chart.axis.min,
                        chart.axis.max,
                        chart.axis.step_size,
                        chart
                            .change
                            .and_then(|c| c.percent)
                            .map_or_else(|| "N/A".to_string(), |p| format!("{p:+.2}%")),
                    );
                    println!(
                        "     labels: {} .. {}",
                        chart.labels.first().map_or("-", String::as_str),
                        chart.labels.last().map_or("-", String::as_str),
                    );
                    let ticks: Vec<String> =
                        chart.axis.ticks().iter().map(|t| format!("{t:.0}")).collect();
                    println!("     ticks:  {}", ticks.join(", "));
                }
                Err(e) => println!("{symbol:<4} {}", describe(&e)),
            }
        }
    }

    Ok(())
}
