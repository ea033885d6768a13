// In-memory catalog of car records with derived facets

use crate::filter::{self, ALL_BRANDS, ALL_FUEL_TYPES, ALL_TRANSMISSION, Filter, SortKey};
use crate::loader;
use crate::models::Car;
use crate::price::PriceRange;
use eyre::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Read-only car catalog, loaded once
#[derive(Debug, Clone)]
pub struct Catalog {
    cars: Vec<Car>,
    brands: Vec<String>,
    fuel_types: Vec<String>,
    transmissions: Vec<String>,
    bounds: PriceRange,
}

impl Catalog {
    /// Open the catalog at `path`, or the bundled catalog when `None`
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let cars = match path {
            Some(p) => loader::load_file(p)?,
            None => loader::load_bundled()?,
        };
        Ok(Self::new(cars))
    }

    pub fn new(cars: Vec<Car>) -> Self {
        let brands = with_sentinel(ALL_BRANDS, cars.iter().map(|c| c.brand()));
        let fuel_types = with_sentinel(ALL_FUEL_TYPES, cars.iter().flat_map(|c| c.fuel.iter().map(String::as_str)));
        let transmissions = with_sentinel(
            ALL_TRANSMISSION,
            cars.iter().flat_map(|c| c.transmission.iter().map(String::as_str)),
        );
        let bounds = price_bounds(&cars);

        debug!(
            cars = cars.len(),
            brands = brands.len() - 1,
            min = bounds.min,
            max = bounds.max,
            "Catalog indexed"
        );

        Self {
            cars,
            brands,
            fuel_types,
            transmissions,
            bounds,
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Brand options, starting with the "All Brands" sentinel
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Fuel options, starting with the "All Fuel Types" sentinel
    pub fn fuel_types(&self) -> &[String] {
        &self.fuel_types
    }

    /// Transmission options, starting with the "All Transmission" sentinel
    pub fn transmissions(&self) -> &[String] {
        &self.transmissions
    }

    /// Lowest lower bound and highest upper bound over all cars
    pub fn price_bounds(&self) -> PriceRange {
        self.bounds
    }

    /// Filter whose price window spans the whole catalog
    pub fn default_filter(&self) -> Filter {
        Filter::with_price_bounds(self.bounds.min, self.bounds.max)
    }

    pub fn get(&self, id: u32) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn search(&self, filter: &Filter, sort: SortKey) -> Vec<&Car> {
        filter::apply(&self.cars, filter, sort)
    }
}

/// Distinct values in first-seen order, after the sentinel
fn with_sentinel<'a>(sentinel: &str, values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec![sentinel.to_string()];
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

fn price_bounds(cars: &[Car]) -> PriceRange {
    if cars.is_empty() {
        return PriceRange::default();
    }

    cars.iter().fold(
        PriceRange {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        },
        |acc, car| PriceRange {
            min: acc.min.min(car.price.min()),
            max: acc.max.max(car.price.max()),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Catalog {
        let cars: Vec<Car> = serde_json::from_value(json!([
            {"id": 1, "name": "Tata Nexon", "price": "₹8 Lakh - ₹14 Lakh*",
             "fuel": ["Petrol", "Diesel"], "transmission": ["Manual", "Automatic"]},
            {"id": 2, "name": "Hyundai Creta", "price": "₹11 Lakh - ₹20 Lakh*",
             "fuel": ["Petrol"], "transmission": ["Automatic"]},
            {"id": 3, "name": "Tata Punch", "price": "₹6 Lakh",
             "fuel": ["CNG", "Petrol"], "transmission": ["Manual"]}
        ]))
        .unwrap();
        Catalog::new(cars)
    }

    #[test]
    fn test_facets_have_sentinel_and_first_seen_order() {
        let catalog = sample();
        assert_eq!(catalog.brands(), ["All Brands", "Tata", "Hyundai"]);
        assert_eq!(catalog.fuel_types(), ["All Fuel Types", "Petrol", "Diesel", "CNG"]);
        assert_eq!(catalog.transmissions(), ["All Transmission", "Manual", "Automatic"]);
    }

    #[test]
    fn test_price_bounds() {
        let catalog = sample();
        let bounds = catalog.price_bounds();
        assert_eq!(bounds.min, 600_000.0);
        assert_eq!(bounds.max, 2_000_000.0);

        let filter = catalog.default_filter();
        assert_eq!(filter.min_price, 600_000.0);
        assert_eq!(filter.max_price, 2_000_000.0);
        assert_eq!(catalog.search(&filter, SortKey::Relevance).len(), 3);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.brands(), ["All Brands"]);
        assert_eq!(catalog.price_bounds(), PriceRange::default());
        assert!(catalog.search(&catalog.default_filter(), SortKey::MostPopular).is_empty());
    }

    #[test]
    fn test_get() {
        let catalog = sample();
        assert_eq!(catalog.get(2).map(|c| c.name.as_str()), Some("Hyundai Creta"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_open_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cars.json");
        fs::write(&path, r#"{"cars":[{"id":5,"name":"Kia Sonet","price":"₹8 Lakh - ₹15 Lakh*"}]}"#).unwrap();

        let catalog = Catalog::open(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.brands(), ["All Brands", "Kia"]);
    }

    #[test]
    fn test_open_bundled() {
        let catalog = Catalog::open(None).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.brands()[0], ALL_BRANDS);
        assert!(catalog.price_bounds().min <= catalog.price_bounds().max);
    }
}
