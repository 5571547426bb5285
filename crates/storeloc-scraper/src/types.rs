//! Output records for the store page pipeline.

use serde::{Deserialize, Serialize};

/// Discriminator written to every [`StoreRecord`].
pub const LOCATION_TYPENAME: &str = "Location";
/// Discriminator written to every [`TradingHourEntry`].
pub const TRADING_HOUR_TYPENAME: &str = "TradingHour";

/// One store location extracted from a store page.
///
/// Field order matches the serialized key order consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    /// Trailing digits of the page URL path.
    pub location_id: Option<String>,
    pub public_name: String,
    pub phone_number: Option<String>,
    pub address1: Option<String>,
    /// Always `None`; the store pages carry no second address line.
    pub address2: Option<String>,
    /// Always `None`; the store pages carry no third address line.
    pub address3: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Page order, not weekday order. Empty when the page has no hours block.
    pub trading_hours: Vec<TradingHourEntry>,
    pub typename: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingHourEntry {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub hours: String,
    #[serde(rename = "weekDay")]
    pub week_day: String,
}

impl TradingHourEntry {
    #[must_use]
    pub fn new(week_day: String, hours: String) -> Self {
        Self {
            typename: TRADING_HOUR_TYPENAME.to_string(),
            hours,
            week_day,
        }
    }
}

/// Sort records ascending by `location_id` compared as plain strings.
///
/// Missing ids compare as `""` and therefore come first. The sort is stable,
/// so records sharing an id keep their input order.
pub fn sort_by_location_id(records: &mut [StoreRecord]) {
    records.sort_by(|a, b| {
        let a = a.location_id.as_deref().unwrap_or("");
        let b = b.location_id.as_deref().unwrap_or("");
        a.cmp(b)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location_id: Option<&str>, name: &str) -> StoreRecord {
        StoreRecord {
            location_id: location_id.map(str::to_string),
            public_name: name.to_string(),
            phone_number: None,
            address1: None,
            address2: None,
            address3: None,
            city: None,
            state: None,
            postcode: None,
            latitude: None,
            longitude: None,
            trading_hours: Vec::new(),
            typename: LOCATION_TYPENAME.to_string(),
            url: format!("https://example.com/stores/{name}"),
        }
    }

    #[test]
    fn sort_places_missing_id_first() {
        let mut records = vec![
            record(Some("0005"), "five"),
            record(None, "none"),
            record(Some("0002"), "two"),
        ];
        sort_by_location_id(&mut records);
        let ids: Vec<Option<&str>> = records.iter().map(|r| r.location_id.as_deref()).collect();
        assert_eq!(ids, vec![None, Some("0002"), Some("0005")]);
    }

    #[test]
    fn sort_is_lexicographic_not_numeric() {
        let mut records = vec![record(Some("10"), "ten"), record(Some("9"), "nine")];
        sort_by_location_id(&mut records);
        assert_eq!(records[0].public_name, "ten");
        assert_eq!(records[1].public_name, "nine");
    }

    #[test]
    fn sort_keeps_input_order_for_equal_ids() {
        let mut records = vec![
            record(None, "first"),
            record(Some("1"), "one"),
            record(None, "second"),
        ];
        sort_by_location_id(&mut records);
        let names: Vec<&str> = records.iter().map(|r| r.public_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "one"]);
    }

    #[test]
    fn serializes_with_downstream_key_names_and_order() {
        let mut r = record(Some("42"), "Bondi");
        r.latitude = Some(-33.87);
        r.trading_hours = vec![TradingHourEntry::new("MONDAY".into(), "9am - 5pm".into())];
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"locationId":"42","publicName":"Bondi","phoneNumber":null,"#,
                r#""address1":null,"address2":null,"address3":null,"city":null,"#,
                r#""state":null,"postcode":null,"latitude":-33.87,"longitude":null,"#,
                r#""tradingHours":[{"__typename":"TradingHour","hours":"9am - 5pm","weekDay":"MONDAY"}],"#,
                r#""typename":"Location","url":"https://example.com/stores/Bondi"}"#
            )
        );
    }
}
