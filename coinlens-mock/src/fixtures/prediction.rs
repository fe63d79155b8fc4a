use coinlens_types::PredictionPayload;

use super::{price_path, trailing_days};

const DAYS: usize = 30;

pub fn by_symbol(s: &str) -> Option<PredictionPayload> {
    match s {
        // Backend shape: 30 actual closes, 31 dates, one next-day forecast.
        "BTC" => {
            let dates = iso_dates(DAYS + 1);
            let actual = price_path(DAYS, 58_000.0, 2_500.0, 40.0);
            let forecast = actual.last().map(|p| p + 350.0);
            Some(PredictionPayload {
                symbol: Some(s.to_string()),
                dates,
                actual: actual.into_iter().map(Some).collect(),
                predicted: Vec::new(),
                predicted_price: forecast,
                error: None,
            })
        }
        // Model series parallel to dates; the last date has no actual yet.
        "ETH" => {
            let dates = iso_dates(DAYS);
            let actual = price_path(DAYS - 1, 3_200.0, 180.0, 3.0);
            let predicted = price_path(DAYS, 3_210.0, 170.0, 3.0);
            Some(PredictionPayload {
                symbol: Some(s.to_string()),
                dates,
                actual: actual.into_iter().map(Some).collect(),
                predicted: predicted.into_iter().map(Some).collect(),
                predicted_price: None,
                error: None,
            })
        }
        // Forecast without a date for it: callers must derive the next day.
        "SOL" => {
            let dates = iso_dates(DAYS);
            let actual = price_path(DAYS, 160.0, 12.0, 0.5);
            Some(PredictionPayload {
                symbol: Some(s.to_string()),
                dates,
                actual: actual.into_iter().map(Some).collect(),
                predicted: Vec::new(),
                predicted_price: Some(171.25),
                error: None,
            })
        }
        "FAIL" => Some(PredictionPayload {
            symbol: Some(s.to_string()),
            error: Some("Prediction failed".to_string()),
            ..PredictionPayload::default()
        }),
        _ => None,
    }
}

fn iso_dates(days: usize) -> Vec<String> {
    trailing_days(days)
        .into_iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect()
}
