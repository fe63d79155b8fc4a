use std::collections::BTreeMap;

use coinlens_types::SentimentPayload;
use serde_json::{Value, json};

pub fn by_symbol(s: &str) -> Option<SentimentPayload> {
    match s {
        "BTC" => Some(build(
            s,
            [
                (
                    "reddit",
                    json!({ "average": 0.12, "scores": [0.3, -0.1, 0.16] }),
                ),
                ("coindesk", json!({ "average": 0.08, "scores": [0.08] })),
                (
                    "cointelegraph",
                    json!({ "average": -0.05, "scores": [-0.2, 0.1] }),
                ),
            ],
        )),
        // CoinDesk delivered headlines but no numeric average.
        "ETH" => Some(build(
            s,
            [
                ("reddit", json!({ "average": 0.3, "scores": [0.3] })),
                ("coindesk", json!({ "average": null, "scores": [] })),
                ("cointelegraph", json!({ "average": 0.1, "scores": [0.1] })),
            ],
        )),
        // Headlines only; no source produced a score.
        "QUIET" => {
            let mut fields = BTreeMap::new();
            fields.insert("reddit_headlines".to_string(), json!(["gm", "wagmi"]));
            Some(SentimentPayload {
                symbol: Some(s.to_string()),
                fields,
            })
        }
        _ => None,
    }
}

fn build<const N: usize>(symbol: &str, sources: [(&str, Value); N]) -> SentimentPayload {
    let mut fields = BTreeMap::new();
    for (source, entry) in sources {
        fields.insert(format!("{source}_headlines"), json!([format!("{symbol} headline from {source}")]));
        fields.insert(format!("{source}_sentiment"), entry);
    }
    SentimentPayload {
        symbol: Some(symbol.to_string()),
        fields,
    }
}
