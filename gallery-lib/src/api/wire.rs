//! Lenient decoding of the artworks listing response.
//!
//! The listing body looks like:
//!
//! ```json
//! { "pagination": { "total": 128394, "limit": 12, "current_page": 1 },
//!   "data": [ { "id": 1, "title": "..." } ] }
//! ```
//!
//! Decoding never fails hard. A body that is not a JSON object is reported as
//! malformed so the loader can substitute an empty page; a missing `data`
//! array is an empty page; items that do not decode are dropped one by one.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Records and reported total decoded from one listing body.
#[derive(Debug)]
pub(crate) struct Listing<R> {
    pub records: Vec<R>,
    /// `pagination.total`, when present and positive.
    pub total: Option<u64>,
    /// Number of items that were dropped because they did not decode.
    pub skipped: usize,
}

/// Decodes a listing body, or returns `None` if the body is malformed.
pub(crate) fn decode_listing<R: DeserializeOwned>(body: &str) -> Option<Listing<R>> {
    let Value::Object(mut root) = serde_json::from_str::<Value>(body).ok()? else {
        return None;
    };

    let total = root
        .get("pagination")
        .and_then(|p| p.get("total"))
        .and_then(positive_count);

    let items = match root.remove("data") {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };

    let mut skipped = 0;
    let records = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<R>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Dropping undecodable record: {}", e);
                skipped += 1;
                None
            }
        })
        .collect();

    Some(Listing {
        records,
        total,
        skipped,
    })
}

fn positive_count(value: &Value) -> Option<u64> {
    let count = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    count.filter(|n| *n > 0)
}
