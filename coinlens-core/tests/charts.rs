use chrono::{NaiveDate, TimeDelta};
use coinlens_core::labels::NEXT_DAY_LABEL;
use coinlens_core::{
    ChartConfig, CoinlensError, HistoryChart, PredictionChart, Tier, canonicalize,
    history_charts, prediction_charts,
};
use coinlens_mock::{MockProvider, end_date};

fn provider() -> MockProvider {
    MockProvider::new()
}

#[test]
fn one_failing_asset_does_not_hide_others() {
    let histories = provider().histories(&["BTC", "ETH", "FAIL"], Tier::Medium);
    let charts = history_charts(&histories, Tier::Medium, &ChartConfig::default());
    assert_eq!(charts.len(), 3);
    assert!(charts["BTC"].is_ok());
    assert!(charts["ETH"].is_ok());
    assert!(matches!(charts["FAIL"], Err(CoinlensError::Data(_))));
}

#[test]
fn medium_history_is_thinned_and_scaled() {
    let history = provider().history("BTC", Tier::Medium).unwrap();
    let chart = HistoryChart::build("BTC", &history, Tier::Medium, &ChartConfig::default()).unwrap();

    assert_eq!(chart.title, "BTC 30-Day Price History");
    assert_eq!(chart.values.len(), 16);
    assert_eq!(chart.labels.len(), chart.dates.len());
    assert_eq!(chart.tooltips.len(), chart.dates.len());
    assert_eq!(chart.dates.last().copied(), Some(end_date()));
    assert_eq!(chart.dates.first().copied(), Some(end_date() - TimeDelta::days(29)));
    assert!(chart.values.iter().flatten().all(|v| chart.axis.contains(*v)));

    // The change summary covers the full window, not only the shown points.
    let change = chart.change.unwrap();
    assert!((change.change - history.price_change.unwrap()).abs() < 1e-6);
    assert_eq!(chart.current_price, history.current_price);
}

#[test]
fn short_history_shows_every_day_with_day_labels() {
    let history = provider().history("ETH", Tier::Short).unwrap();
    let chart = HistoryChart::build("ETH", &history, Tier::Short, &ChartConfig::default()).unwrap();
    assert_eq!(chart.values.len(), 7);
    assert_eq!(chart.labels.first().map(String::as_str), Some("Aug 9"));
    assert_eq!(chart.labels.last().map(String::as_str), Some("Aug 15"));
    assert_eq!(chart.tooltips.last().map(String::as_str), Some("August 15, 2025"));
}

#[test]
fn long_history_uses_month_labels() {
    let history = provider().history("BTC", Tier::Extended).unwrap();
    let chart =
        HistoryChart::build("BTC", &history, Tier::Extended, &ChartConfig::default()).unwrap();
    assert!(chart.values.len() <= 31);
    assert_eq!(chart.labels.last().map(String::as_str), Some("Aug 2025"));
}

#[test]
fn gappy_history_drops_bad_date_and_keeps_gaps() {
    let history = provider().history("GAPPY", Tier::Medium).unwrap();
    let full = canonicalize(&history.points().unwrap());
    assert_eq!(full.len(), 29);
    assert!(full.iter().any(|p| p.value.is_none()));
    let dropped = end_date() - TimeDelta::days(28);
    assert!(full.iter().all(|p| p.date != dropped));

    let chart =
        HistoryChart::build("GAPPY", &history, Tier::Medium, &ChartConfig::default()).unwrap();
    assert!(chart.dates.windows(2).all(|w| w[0] < w[1]));
    assert!(!chart.dates.contains(&dropped));
}

#[test]
fn flat_history_still_has_a_usable_axis() {
    let history = provider().history("FLAT", Tier::Short).unwrap();
    let chart = HistoryChart::build("FLAT", &history, Tier::Short, &ChartConfig::default()).unwrap();
    assert!(chart.axis.min < 100.0 && chart.axis.max > 100.0);
    assert_eq!(chart.change.and_then(|c| c.percent), Some(0.0));
    assert_eq!(chart.note.as_deref(), Some("stale feed"));
}

#[test]
fn invalid_config_is_rejected_before_work() {
    let history = provider().history("BTC", Tier::Short).unwrap();
    let config = ChartConfig {
        target_ticks: 0,
        ..ChartConfig::default()
    };
    let err = HistoryChart::build("BTC", &history, Tier::Short, &config).unwrap_err();
    assert!(matches!(err, CoinlensError::InvalidArg(_)));
}

#[test]
fn prediction_with_dated_forecast() {
    let payload = provider().prediction("BTC").unwrap();
    let chart = PredictionChart::build("BTC", &payload, &ChartConfig::default()).unwrap();

    assert_eq!(chart.dates.len(), 31);
    assert_eq!(chart.actual.last().copied(), Some(None));
    let last_actual = payload.actual.last().copied().flatten().unwrap();
    assert_eq!(chart.forecast, Some(last_actual + 350.0));
    assert_eq!(chart.labels.last().map(String::as_str), Some(NEXT_DAY_LABEL));
    // BTC prediction charts round to whole thousands.
    assert_eq!(chart.axis.min % 1_000.0, 0.0);
    assert_eq!(chart.axis.max % 1_000.0, 0.0);
}

#[test]
fn prediction_forecast_without_date_lands_on_next_day() {
    let payload = provider().prediction("SOL").unwrap();
    let chart = PredictionChart::build("SOL", &payload, &ChartConfig::default()).unwrap();

    assert_eq!(chart.dates.len(), 31);
    assert_eq!(chart.dates.last().copied(), NaiveDate::from_ymd_opt(2025, 8, 16));
    assert_eq!(chart.forecast, Some(171.25));
    assert_eq!(chart.predicted.iter().flatten().count(), 1);
    assert!(chart.axis.contains(171.25));
}

#[test]
fn prediction_with_model_series() {
    let payload = provider().prediction("ETH").unwrap();
    let chart = PredictionChart::build("ETH", &payload, &ChartConfig::default()).unwrap();
    assert_eq!(chart.dates.len(), 30);
    assert!(chart.predicted.iter().all(Option::is_some));
    assert_eq!(chart.actual.iter().flatten().count(), 29);
    assert!(chart.forecast.is_some());
    assert_eq!(chart.axis.min % 100.0, 0.0);
}

#[test]
fn prediction_failures_are_per_asset() {
    let payloads = provider().predictions(&["BTC", "SOL", "FAIL"]);
    let charts = prediction_charts(&payloads, &ChartConfig::default());
    assert!(charts["BTC"].is_ok());
    assert!(charts["SOL"].is_ok());
    assert!(matches!(charts["FAIL"], Err(CoinlensError::Data(_))));
}

#[test]
fn chart_serializes_camel_case() {
    let history = provider().history("BTC", Tier::Short).unwrap();
    let chart = HistoryChart::build("BTC", &history, Tier::Short, &ChartConfig::default()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["tier"], "7d");
    assert!(json["axis"]["stepSize"].is_number());
    assert!(json["currentPrice"].is_number());
    assert_eq!(json["dates"][6], "2025-08-15");
}

#[test]
fn single_point_history_uses_reported_change() {
    let history = coinlens_core::PriceHistory {
        symbol: Some("BTC".into()),
        dates: vec!["2025-08-15".into()],
        prices: vec![Some(150.0)],
        current_price: Some(150.0),
        price_change: Some(50.0),
        price_change_percent: Some(50.0),
        ..coinlens_core::PriceHistory::default()
    };
    let chart = HistoryChart::build("BTC", &history, Tier::Short, &ChartConfig::default()).unwrap();
    let change = chart.change.unwrap();
    assert_eq!(change.start, 100.0);
    assert_eq!(change.end, 150.0);
    assert_eq!(change.change, 50.0);
    assert_eq!(change.percent, Some(50.0));
}

#[test]
fn single_point_without_reported_change_is_flat() {
    let history = coinlens_core::PriceHistory {
        dates: vec!["2025-08-15".into()],
        prices: vec![Some(150.0)],
        ..coinlens_core::PriceHistory::default()
    };
    let chart = HistoryChart::build("BTC", &history, Tier::Short, &ChartConfig::default()).unwrap();
    assert_eq!(chart.change.map(|c| c.change), Some(0.0));
}
