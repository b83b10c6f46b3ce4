use serde::{Deserialize, Deserializer, Serialize};

use crate::search_const::PAGE_SIZE;


/// One decoded response of the trademark search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResultPage {
    pub results: Vec<TrademarkRecord>,
    pub owners: Vec<FacetBucket>,
    pub attorneys: Vec<FacetBucket>,
    pub classes: Vec<FacetBucket>,
    pub correspondents: Vec<FacetBucket>,
    pub total_hits: u64,
}

impl SearchResultPage {
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_hits, PAGE_SIZE)
    }
}

/// Ceiling division; zero hits means zero pages.
pub fn total_pages(total_hits: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_hits.div_ceil(page_size)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub struct FacetBucket {
    pub key: String,
    pub count: u64,
}

/// A single hit. Field names follow the API `_source` object; every field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrademarkRecord {
    #[serde(deserialize_with = "opt_scalar_string")]
    pub mark_identification: Option<String>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub current_owner: Option<String>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub registration_number: Option<String>,
    /// Epoch seconds.
    #[serde(deserialize_with = "opt_epoch_seconds")]
    pub filing_date: Option<f64>,
    #[serde(deserialize_with = "opt_epoch_seconds")]
    pub status_date: Option<f64>,
    #[serde(deserialize_with = "opt_epoch_seconds")]
    pub registration_date: Option<f64>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub status_type: Option<String>,
    #[serde(deserialize_with = "scalar_string_list")]
    pub class_codes: Vec<String>,
    #[serde(deserialize_with = "scalar_string_list")]
    pub mark_description_description: Vec<String>,
    // the two below sit next to `_source` on the hit, not inside it
    #[serde(deserialize_with = "opt_scalar_string")]
    pub class_icon: Option<String>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub history_date: Option<String>,
}


#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Option<Scalar>>),
    One(Scalar),
}

fn opt_scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(String::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EpochValue {
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

/// Numbers pass through, numeric strings are parsed, anything else is missing.
fn opt_epoch_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<EpochValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(EpochValue::Number(n)) => Some(n),
        Some(EpochValue::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(EpochValue::Other(_)) | None => None,
    })
}

fn scalar_string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        None => vec![],
        Some(OneOrMany::One(s)) => vec![s.into()],
        Some(OneOrMany::Many(items)) => items.into_iter().flatten().map(String::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn record_accepts_numbers_where_strings_are_expected() {
        let record: TrademarkRecord = serde_json::from_str(r#"{
            "mark_identification": "NIKE",
            "registration_number": 978952,
            "class_codes": ["025", 28],
            "mark_description_description": "Footwear",
            "filing_date": 1700000000
        }"#).unwrap();
        assert_eq!(record.registration_number.as_deref(), Some("978952"));
        assert_eq!(record.class_codes, vec!["025".to_string(), "28".to_string()]);
        assert_eq!(record.mark_description_description, vec!["Footwear".to_string()]);
        assert_eq!(record.filing_date, Some(1700000000.0));
        assert_eq!(record.status_date, None);
    }

    #[test]
    fn record_parses_epoch_seconds_sent_as_strings() {
        let record: TrademarkRecord = serde_json::from_str(r#"{
            "filing_date": "1700000000",
            "status_date": " 946684800.5 ",
            "registration_date": 0
        }"#).unwrap();
        assert_eq!(record.filing_date, Some(1700000000.0));
        assert_eq!(record.status_date, Some(946684800.5));
        assert_eq!(record.registration_date, Some(0.0));
    }

    #[test]
    fn record_drops_unparseable_epoch_values() {
        let record: TrademarkRecord = serde_json::from_str(r#"{
            "mark_identification": "NIKE",
            "filing_date": "not a date",
            "status_date": {"seconds": 1},
            "registration_date": true
        }"#).unwrap();
        assert_eq!(record.mark_identification.as_deref(), Some("NIKE"));
        assert_eq!(record.filing_date, None);
        assert_eq!(record.status_date, None);
        assert_eq!(record.registration_date, None);
    }

    #[test]
    fn record_treats_null_fields_as_missing() {
        let record: TrademarkRecord = serde_json::from_str(r#"{
            "current_owner": null,
            "class_codes": null,
            "filing_date": null
        }"#).unwrap();
        assert_eq!(record, TrademarkRecord::default());
    }
}
