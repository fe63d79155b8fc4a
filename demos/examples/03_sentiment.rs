use coinlens_core::{aggregate_assets, reading_from_scores, score_to_percent};
use coinlens_demos::common::{init_tracing, provider};

fn bar(score: f64) -> String {
    let filled = usize::from(score_to_percent(score)) / 5;
    format!("[{:<20}]", "#".repeat(filled))
}

fn main() {
    init_tracing();
    let payloads = provider().sentiments(&["BTC", "ETH", "QUIET"]);

    println!("## Overall market sentiment");
    for (asset, agg) in aggregate_assets(&payloads) {
        if agg.has_data() {
            println!(
                "{asset:<6} {:+.2} {} ({} sources)",
                agg.average,
                bar(agg.average),
                agg.source_count
            );
        } else {
            println!("{asset:<6}   n/a  no sentiment data available");
        }
    }

    let headline_scores = [0.4, -0.1, 0.25, 0.0];
    let reading = reading_from_scores("reddit", &headline_scores);
    println!(
        "\nreddit headline mean: {:+.3} {}",
        reading.average,
        bar(reading.average)
    );
}
