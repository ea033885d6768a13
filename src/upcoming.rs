// Upcoming cars grid, filtered by fixed price bands

use crate::models::Car;
use crate::price::leading_float;
use std::collections::HashSet;

/// Label of the "no band selected" option
pub const ALL_PRICES: &str = "All Prices";

/// Cars named in the page summary
const TOP_CARS: usize = 3;

/// Price band in whole Lakh; `max` of `None` is open-ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceBand {
    /// `min <= lakh < max`
    pub fn contains(&self, lakh: f64) -> bool {
        lakh >= self.min && self.max.is_none_or(|max| lakh < max)
    }
}

pub static PRICE_BANDS: [PriceBand; 8] = [
    PriceBand { label: "1 - 5 Lakh", min: 1.0, max: Some(5.0) },
    PriceBand { label: "5 - 10 Lakh", min: 5.0, max: Some(10.0) },
    PriceBand { label: "10 - 15 Lakh", min: 10.0, max: Some(15.0) },
    PriceBand { label: "15 - 20 Lakh", min: 15.0, max: Some(20.0) },
    PriceBand { label: "20 - 35 Lakh", min: 20.0, max: Some(35.0) },
    PriceBand { label: "35 - 50 Lakh", min: 35.0, max: Some(50.0) },
    PriceBand { label: "50 Lakh - 1 Crore", min: 50.0, max: Some(100.0) },
    PriceBand { label: "Above 1 Crore", min: 100.0, max: None },
];

pub fn band(label: &str) -> Option<&'static PriceBand> {
    PRICE_BANDS.iter().find(|b| b.label == label)
}

/// Starting price read as a bare Lakh number.
///
/// Only the first word of the price is looked at, with the rupee sign dropped,
/// so `"₹1.2 Crore"` reads as 1.2 rather than 120.
pub fn starting_lakh(car: &Car) -> Option<f64> {
    let first = car.price.as_str().split(' ').next().unwrap_or_default();
    leading_float(&first.replace('₹', "").replace("Lakh*", ""))
}

/// Cars whose starting price falls in the band labelled `selected`.
///
/// `None` or an unknown label keeps every car. Cars whose price has no
/// leading number never match a band.
pub fn filter_by_band<'a>(cars: &'a [Car], selected: Option<&str>) -> Vec<&'a Car> {
    let Some(band) = selected.and_then(band) else {
        return cars.iter().collect();
    };

    cars.iter()
        .filter(|car| starting_lakh(car).is_some_and(|lakh| band.contains(lakh)))
        .collect()
}

/// Distinct brands in first-seen order, no sentinel
pub fn brands(cars: &[Car]) -> Vec<&str> {
    let mut seen = HashSet::new();
    cars.iter().map(Car::brand).filter(|b| seen.insert(*b)).collect()
}

pub fn top_cars<'l, 'a>(list: &'l [&'a Car]) -> &'l [&'a Car] {
    &list[..list.len().min(TOP_CARS)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cars() -> Vec<Car> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Tata Punch", "price": "₹6 Lakh - ₹10 Lakh*"},
            {"id": 2, "name": "Hyundai Creta", "price": "₹11 Lakh - ₹20 Lakh*"},
            {"id": 3, "name": "Maruti e Vitara", "price": "₹20 Lakh*"},
            {"id": 4, "name": "BMW X7", "price": "₹1.3 Crore - ₹1.35 Crore*"},
            {"id": 5, "name": "Tata Sierra", "price": "Coming soon"},
            {"id": 6, "name": "Maruti Alto", "price": "₹5 Lakh"}
        ]))
        .unwrap()
    }

    fn ids(list: &[&Car]) -> Vec<u32> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_starting_lakh() {
        let cars = cars();
        assert_eq!(starting_lakh(&cars[0]), Some(6.0));
        assert_eq!(starting_lakh(&cars[2]), Some(20.0));
        assert_eq!(starting_lakh(&cars[3]), Some(1.3));
        assert_eq!(starting_lakh(&cars[4]), None);
    }

    #[test]
    fn test_all_prices_keeps_everything() {
        let cars = cars();
        assert_eq!(filter_by_band(&cars, None).len(), 6);
        assert_eq!(filter_by_band(&cars, Some("Under 1 Lakh")).len(), 6);
    }

    #[test]
    fn test_band_bounds_are_half_open() {
        let cars = cars();
        assert_eq!(ids(&filter_by_band(&cars, Some("5 - 10 Lakh"))), vec![1, 6]);
        assert_eq!(ids(&filter_by_band(&cars, Some("1 - 5 Lakh"))), vec![4]);
        assert_eq!(ids(&filter_by_band(&cars, Some("20 - 35 Lakh"))), vec![3]);
        assert!(filter_by_band(&cars, Some("Above 1 Crore")).is_empty());
    }

    #[test]
    fn test_open_ended_band() {
        let top = band("Above 1 Crore").unwrap();
        assert!(top.contains(100.0));
        assert!(top.contains(5000.0));
        assert!(!top.contains(99.9));
    }

    #[test]
    fn test_brands_and_top_cars() {
        let cars = cars();
        assert_eq!(brands(&cars), vec!["Tata", "Hyundai", "Maruti", "BMW"]);

        let all = filter_by_band(&cars, None);
        assert_eq!(ids(top_cars(&all)), vec![1, 2, 3]);
        assert!(top_cars(&[]).is_empty());
    }
}
