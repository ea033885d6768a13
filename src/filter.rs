// Catalog filtering and sorting

use crate::models::Car;
use eyre::{Result, eyre};
use std::cmp::Ordering;
use std::str::FromStr;

/// Brand option meaning "no brand filter"
pub const ALL_BRANDS: &str = "All Brands";
/// Fuel option meaning "no fuel filter"
pub const ALL_FUEL_TYPES: &str = "All Fuel Types";
/// Transmission option meaning "no transmission filter"
pub const ALL_TRANSMISSION: &str = "All Transmission";

/// Upper price bound used before catalog bounds are known (12 Crore)
pub const DEFAULT_MAX_PRICE: f64 = 120_000_000.0;

/// Predicates applied to the catalog; a car must satisfy all of them
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Case-insensitive text matched against name, features and description
    pub query: String,
    /// Brand token, or [`ALL_BRANDS`]
    pub brand: String,
    /// Fuel type, or [`ALL_FUEL_TYPES`]
    pub fuel: String,
    /// Transmission, or [`ALL_TRANSMISSION`]
    pub transmission: String,
    /// Inclusive lower price bound in rupees
    pub min_price: f64,
    /// Inclusive upper price bound in rupees
    pub max_price: f64,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            query: String::new(),
            brand: ALL_BRANDS.to_string(),
            fuel: ALL_FUEL_TYPES.to_string(),
            transmission: ALL_TRANSMISSION.to_string(),
            min_price: 0.0,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl Filter {
    /// Default filter with the price window set to `[min, max]`
    pub fn with_price_bounds(min: f64, max: f64) -> Self {
        Self {
            min_price: min,
            max_price: max,
            ..Self::default()
        }
    }

    pub fn matches(&self, car: &Car) -> bool {
        self.matches_query(car)
            && self.matches_brand(car)
            && self.matches_fuel(car)
            && self.matches_transmission(car)
            && self.matches_price(car)
    }

    pub fn matches_query(&self, car: &Car) -> bool {
        let needle = self.query.to_lowercase();
        car.name.to_lowercase().contains(&needle)
            || car.features.iter().any(|f| f.to_lowercase().contains(&needle))
            || car.description.to_lowercase().contains(&needle)
    }

    pub fn matches_brand(&self, car: &Car) -> bool {
        self.brand == ALL_BRANDS || car.name.starts_with(&self.brand)
    }

    pub fn matches_fuel(&self, car: &Car) -> bool {
        self.fuel == ALL_FUEL_TYPES || car.fuel.contains(&self.fuel)
    }

    pub fn matches_transmission(&self, car: &Car) -> bool {
        self.transmission == ALL_TRANSMISSION || car.transmission.contains(&self.transmission)
    }

    /// Containment, not overlap: a car straddling either edge is excluded
    pub fn matches_price(&self, car: &Car) -> bool {
        car.price.range().within(self.min_price, self.max_price)
    }
}

/// Result orderings offered by the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    PriceLowToHigh,
    PriceHighToLow,
    RatingHighToLow,
    MostPopular,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::RatingHighToLow,
        SortKey::MostPopular,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLowToHigh => "Price - Low to High",
            SortKey::PriceHighToLow => "Price - High to Low",
            SortKey::RatingHighToLow => "Rating - High to Low",
            SortKey::MostPopular => "Most Popular",
        }
    }

    /// Short command-line alias
    pub fn alias(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLowToHigh => "price-asc",
            SortKey::PriceHighToLow => "price-desc",
            SortKey::RatingHighToLow => "rating",
            SortKey::MostPopular => "popular",
        }
    }

    fn compare(self, a: &Car, b: &Car) -> Ordering {
        match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::PriceLowToHigh => a.price.min().total_cmp(&b.price.min()),
            SortKey::PriceHighToLow => b.price.max().total_cmp(&a.price.max()),
            SortKey::RatingHighToLow => b.rating.total_cmp(&a.rating),
            SortKey::MostPopular => b.reviews.cmp(&a.reviews),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortKey {
    type Err = eyre::Report;

    /// Accepts the display label (any dash style or case) or the short alias
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_label(s);
        SortKey::ALL
            .into_iter()
            .find(|k| normalize_label(k.label()) == wanted || k.alias() == wanted)
            .ok_or_else(|| eyre!("Unknown sort option: {}", s))
    }
}

fn normalize_label(s: &str) -> String {
    s.trim().replace(['–', '—'], "-").to_lowercase()
}

/// Filter `cars` and order the survivors by `sort`.
///
/// The sort is stable, so ties (and `Relevance`) keep catalog order.
pub fn apply<'a>(cars: &'a [Car], filter: &Filter, sort: SortKey) -> Vec<&'a Car> {
    let mut list: Vec<&Car> = cars.iter().filter(|car| filter.matches(car)).collect();
    if sort != SortKey::Relevance {
        list.sort_by(|a, b| sort.compare(a, b));
    }
    list
}
