//! Display fields for one result card.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::search_result::TrademarkRecord;

pub const INVALID_DATE: &str = "Invalid Date";

/// en-GB short month names; September is "Sept", not "Sep".
const EN_GB_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrademarkCard {
    pub mark: String,
    pub company: String,
    pub owners: String,
    pub number: String,
    pub date: String,
    pub status: String,
    pub status_date: String,
    pub renewal_date: String,
    pub class_name: Vec<String>,
    pub class_codes: Vec<String>,
    pub class_icon: Option<String>,
    pub history_date: Option<String>,
}

impl TrademarkCard {
    pub fn from_record(record: &TrademarkRecord) -> Self {
        let owner = record.current_owner.clone().unwrap_or_default();
        Self {
            mark: record.mark_identification.clone().unwrap_or_default(),
            company: owner.clone(),
            owners: owner,
            number: record.registration_number.clone().unwrap_or_default(),
            date: format_epoch_date(record.filing_date),
            status: record.status_type.clone().unwrap_or_default(),
            status_date: format_epoch_date(record.status_date),
            renewal_date: format_epoch_date(record.registration_date),
            class_name: record.mark_description_description.clone(),
            class_codes: record.class_codes.clone(),
            class_icon: record.class_icon.clone(),
            history_date: record.history_date.clone(),
        }
    }

    /// Status labels from the API come in upper case ("LIVE", "DEAD").
    pub fn status_css_class(&self) -> &'static str {
        match self.status.to_ascii_lowercase().as_str() {
            "registered" | "live" => "status-registered",
            "pending" => "status-pending",
            "abandoned" | "dead" => "status-abandoned",
            _ => "status-other",
        }
    }
}

/// Formats epoch seconds as an en-GB day / short month / year string, e.g. `14 Nov 2023`.
pub fn format_epoch_date(epoch_seconds: Option<f64>) -> String {
    let Some(seconds) = epoch_seconds.filter(|s| s.is_finite()) else {
        return INVALID_DATE.to_string();
    };
    let millis = (seconds * 1000.0).floor();
    if millis.abs() > i64::MAX as f64 {
        return INVALID_DATE.to_string();
    }
    match DateTime::<Utc>::from_timestamp_millis(millis as i64) {
        Some(dt) => format!("{} {} {}", dt.day(), EN_GB_SHORT_MONTHS[dt.month0() as usize], dt.year()),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_like_en_gb() {
        assert_eq!(format_epoch_date(Some(1700000000.0)), "14 Nov 2023");
        assert_eq!(format_epoch_date(Some(0.0)), "1 Jan 1970");
        assert_eq!(format_epoch_date(Some(946684800.5)), "1 Jan 2000");
        assert_eq!(format_epoch_date(Some(1694563200.0)), "13 Sept 2023");
        assert_eq!(format_epoch_date(Some(1688169600.0)), "1 Jul 2023");
    }

    #[test]
    fn missing_or_nonsense_dates_are_invalid() {
        assert_eq!(format_epoch_date(None), INVALID_DATE);
        assert_eq!(format_epoch_date(Some(f64::NAN)), INVALID_DATE);
        assert_eq!(format_epoch_date(Some(1e300)), INVALID_DATE);
    }

    #[test]
    fn maps_record_to_card() {
        let record = TrademarkRecord {
            mark_identification: Some("NIKE".to_string()),
            current_owner: Some("NIKE, INC.".to_string()),
            registration_number: Some("978952".to_string()),
            filing_date: Some(1700000000.0),
            status_date: None,
            registration_date: Some(0.0),
            status_type: Some("registered".to_string()),
            class_codes: vec!["025".to_string()],
            mark_description_description: vec!["Athletic footwear".to_string()],
            class_icon: Some("shoe.png".to_string()),
            history_date: None,
        };
        let card = TrademarkCard::from_record(&record);
        assert_eq!(card.mark, "NIKE");
        assert_eq!(card.company, "NIKE, INC.");
        assert_eq!(card.owners, "NIKE, INC.");
        assert_eq!(card.number, "978952");
        assert_eq!(card.date, "14 Nov 2023");
        assert_eq!(card.status_date, INVALID_DATE);
        assert_eq!(card.renewal_date, "1 Jan 1970");
        assert_eq!(card.class_codes, vec!["025".to_string()]);
        assert_eq!(card.class_name, vec!["Athletic footwear".to_string()]);
        assert_eq!(card.class_icon.as_deref(), Some("shoe.png"));
        assert_eq!(card.status_css_class(), "status-registered");
    }

    #[test]
    fn empty_record_still_maps() {
        let card = TrademarkCard::from_record(&TrademarkRecord::default());
        assert_eq!(card.mark, "");
        assert_eq!(card.date, INVALID_DATE);
        assert_eq!(card.status_css_class(), "status-other");
    }
}
