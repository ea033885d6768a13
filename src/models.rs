// Data models for the car catalog

use crate::price::Price;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Car listing record, as found under `cars` in the catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u32,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub mileage: String,
    #[serde(default)]
    pub ground_clearance: String,
    #[serde(default)]
    pub boot_space: String,
    #[serde(default)]
    pub safety_rating: String,
    #[serde(default)]
    pub transmission: Vec<String>,
    #[serde(default)]
    pub fuel: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub offers: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
}

impl Car {
    /// Brand is the first space-separated token of the display name
    pub fn brand(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }

    /// Launch date as a calendar day, if the raw value is an ISO date or timestamp
    pub fn launch_day(&self) -> Option<NaiveDate> {
        let raw = self.launch_date.as_deref()?.trim();
        let day = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Number of whole stars to fill out of five
    pub fn filled_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}

/// Purchasable trim of a car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub fuel: String,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub waiting_period: String,
}
