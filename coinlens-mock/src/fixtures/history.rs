use coinlens_types::{PriceHistory, Tier};

use super::{price_path, trailing_days};

/// Number of daily points a provider returns for each timeframe.
pub const fn window_days(tier: Tier) -> usize {
    match tier {
        Tier::Short => 7,
        Tier::Medium => 30,
        Tier::Long => 182,
        Tier::Extended => 365,
    }
}

pub fn by_symbol(s: &str, tier: Tier) -> Option<PriceHistory> {
    let days = window_days(tier);
    match s {
        "BTC" => Some(build(s, days, price_path(days, 52_000.0, 9_000.0, 25.0), None)),
        "ETH" => Some(build(s, days, price_path(days, 3_000.0, 600.0, 2.0), None)),
        "FLAT" => Some(build(s, days, vec![100.0; days], Some("stale feed"))),
        "GAPPY" => {
            let mut h = build(s, days, price_path(days, 52_000.0, 9_000.0, 25.0), None);
            // Knock out every fifth value and corrupt one date.
            for (i, p) in h.prices.iter_mut().enumerate() {
                if i % 5 == 2 {
                    *p = None;
                }
            }
            if let Some(d) = h.dates.get_mut(1) {
                *d = "not-a-date".to_string();
            }
            Some(h)
        }
        "FAIL" => Some(PriceHistory {
            symbol: Some(s.to_string()),
            error: Some("Failed to load historical data".to_string()),
            ..PriceHistory::default()
        }),
        _ => None,
    }
}

fn build(symbol: &str, days: usize, prices: Vec<f64>, note: Option<&str>) -> PriceHistory {
    let dates: Vec<String> = trailing_days(days)
        .into_iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();
    let first = prices.first().copied();
    let last = prices.last().copied();
    let price_change = first.zip(last).map(|(a, b)| b - a);
    let price_change_percent = first
        .zip(price_change)
        .filter(|(a, _)| *a != 0.0)
        .map(|(a, c)| c / a * 100.0);
    PriceHistory {
        symbol: Some(symbol.to_string()),
        dates,
        prices: prices.into_iter().map(Some).collect(),
        current_price: last,
        price_change,
        price_change_percent,
        note: note.map(str::to_string),
        error: None,
    }
}
