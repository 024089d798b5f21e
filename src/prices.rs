//! Monthly price series per crop, loaded once at startup and shared read-only.

use crate::error::ConfigError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub type Series = [u32; 12];

const BUILTIN: &str = include_str!("../data/price_trends.json");

#[derive(Clone, Debug)]
pub struct PriceTable {
    series: HashMap<String, Series>,
}

/// Body of a price-trend response.
#[derive(Serialize, Debug, PartialEq)]
pub struct PriceTrends {
    pub months: [&'static str; 12],
    pub prices: BTreeMap<String, Series>,
}

impl PriceTable {
    /// The series embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN)
    }

    /// Parse `{crop: [12 numbers]}`. A series of any other length is rejected.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let series: HashMap<String, Series> =
            serde_json::from_str(raw).map_err(|e| ConfigError::PriceTable(e.to_string()))?;
        if series.is_empty() {
            return Err(ConfigError::PriceTable("no crops defined".into()));
        }
        Ok(Self { series })
    }

    pub async fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn series(&self, crop: &str) -> Option<&Series> {
        self.series.get(crop)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series for the requested crops. Names not in the table are skipped.
    pub fn select<'a, I>(&self, crops: I) -> PriceTrends
    where
        I: IntoIterator<Item = &'a str>,
    {
        let prices = crops
            .into_iter()
            .filter_map(|name| self.series(name).map(|s| (name.to_string(), *s)))
            .collect();
        PriceTrends { months: MONTHS, prices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_loads() {
        let table = PriceTable::builtin().unwrap();
        assert_eq!(table.len(), 14);
        assert_eq!(
            table.series("Wheat"),
            Some(&[2600, 2580, 2550, 2620, 2650, 2680, 2650, 2620, 2600, 2580, 2550, 2580])
        );
        assert_eq!(table.series("Pulses").map(|s| s[0]), Some(5700));
    }

    #[test]
    fn unknown_crops_are_dropped() {
        let table = PriceTable::builtin().unwrap();
        let trends = table.select(["Wheat", "Unknown"]);
        assert_eq!(trends.months, MONTHS);
        assert_eq!(trends.prices.len(), 1);
        assert!(trends.prices.contains_key("Wheat"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = PriceTable::builtin().unwrap();
        assert!(table.select(["wheat"]).prices.is_empty());
    }

    #[test]
    fn short_series_is_rejected() {
        let err = PriceTable::from_json(r#"{"Wheat": [1, 2, 3]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::PriceTable(_)));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(PriceTable::from_json("{}").is_err());
    }

    #[test]
    fn serializes_months_and_prices() {
        let table = PriceTable::from_json(r#"{"Rice": [1,2,3,4,5,6,7,8,9,10,11,12]}"#).unwrap();
        let value = serde_json::to_value(table.select(["Rice"])).unwrap();
        assert_eq!(value["months"][0], "Jan");
        assert_eq!(value["months"][11], "Dec");
        assert_eq!(value["prices"]["Rice"][11], 12);
    }
}
