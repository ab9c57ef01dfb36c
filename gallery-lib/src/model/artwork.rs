//! Artwork record summary

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::Identified;
use super::RecordId;

/// Fields requested from the artworks endpoint.
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Summary of one artwork as shown in a page.
///
/// Only `id` is required. Text fields that are missing or `null` come back as
/// empty strings and the dates as `None`, so a sparse record never fails to
/// parse.
///
/// # Example
///
/// ```
/// use gallery_lib::model::Artwork;
///
/// let artwork: Artwork = serde_json::from_str(r#"{"id": 7, "title": null}"#).unwrap();
/// assert_eq!(artwork.title, "");
/// assert_eq!(artwork.date_start, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Record identifier.
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inscriptions: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub date_start: Option<i64>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Creates an artwork with only an identifier and a title.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            place_of_origin: String::new(),
            artist_display: String::new(),
            inscriptions: String::new(),
            date_start: None,
            date_end: None,
        }
    }
}

impl Identified for Artwork {
    fn id(&self) -> RecordId {
        self.id
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integers, integral floats and numeric strings; anything else is `None`.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": 129884,
            "title": "Starry Night and the Astronauts",
            "place_of_origin": "United States",
            "artist_display": "Alma Thomas\nAmerican, 1891-1978",
            "inscriptions": null,
            "date_start": 1972,
            "date_end": 1972
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, RecordId::new(129884));
        assert_eq!(artwork.place_of_origin, "United States");
        assert_eq!(artwork.inscriptions, "");
        assert_eq!(artwork.date_start, Some(1972));
    }

    #[test]
    fn test_missing_fields_default() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(artwork, Artwork::new(1u64, ""));
    }

    #[test]
    fn test_lenient_dates() {
        let artwork: Artwork =
            serde_json::from_str(r#"{"id": 1, "date_start": "1850", "date_end": {"x": 1}}"#)
                .unwrap();
        assert_eq!(artwork.date_start, Some(1850));
        assert_eq!(artwork.date_end, None);
    }

    #[test]
    fn test_missing_id_fails() {
        assert!(serde_json::from_str::<Artwork>(r#"{"title": "x"}"#).is_err());
    }
}
