// Detail page projection: one car, split into display sections

use crate::models::{Car, Variant};
use eyre::{Result, eyre};
use std::str::FromStr;

/// Tab on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Specifications,
    Features,
    Variants,
    Reviews,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Specifications,
        Section::Features,
        Section::Variants,
        Section::Reviews,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Specifications => "specifications",
            Section::Features => "features",
            Section::Variants => "variants",
            Section::Reviews => "reviews",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|sec| sec.as_str() == wanted)
            .ok_or_else(|| eyre!("Unknown section: {}", s))
    }
}

/// Outcome of looking a car up by id
#[derive(Debug)]
pub enum Lookup<'a> {
    Found(DetailView<'a>),
    NotFound { id: u32 },
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<DetailView<'a>> {
        match self {
            Lookup::Found(view) => Some(view),
            Lookup::NotFound { .. } => None,
        }
    }
}

/// Find the car with `id`; the result starts on the overview tab
pub fn lookup(cars: &[Car], id: u32) -> Lookup<'_> {
    match cars.iter().find(|c| c.id == id) {
        Some(car) => Lookup::Found(DetailView::new(car)),
        None => Lookup::NotFound { id },
    }
}

/// Labelled spec row
pub type SpecRow = (&'static str, String);

/// Selected car plus the active tab
#[derive(Debug, Clone)]
pub struct DetailView<'a> {
    car: &'a Car,
    section: Section,
}

impl<'a> DetailView<'a> {
    pub fn new(car: &'a Car) -> Self {
        Self {
            car,
            section: Section::default(),
        }
    }

    pub fn car(&self) -> &'a Car {
        self.car
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn select(&mut self, section: Section) {
        self.section = section;
    }

    /// Engine, power, transmission, fuel and mileage
    pub fn key_specs(&self) -> Vec<SpecRow> {
        let car = self.car;
        vec![
            ("Engine", car.engine.clone()),
            ("Power", car.power.clone()),
            ("Transmission", car.transmission.join(", ")),
            ("Fuel Type", car.fuel.join(", ")),
            ("Mileage", car.mileage.clone()),
        ]
    }

    pub fn additional_specs(&self) -> Vec<SpecRow> {
        let car = self.car;
        vec![
            ("Ground Clearance", car.ground_clearance.clone()),
            ("Boot Space", car.boot_space.clone()),
            ("Safety Rating", car.safety_rating.clone()),
        ]
    }

    pub fn features(&self) -> &'a [String] {
        &self.car.features
    }

    pub fn variants(&self) -> &'a [Variant] {
        &self.car.variants
    }

    pub fn reviews(&self) -> ReviewSummary {
        ReviewSummary {
            rating: self.car.rating,
            filled_stars: self.car.filled_stars(),
            count: self.car.reviews,
        }
    }
}

/// Aggregate shown on the reviews tab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewSummary {
    pub rating: f64,
    pub filled_stars: usize,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cars() -> Vec<Car> {
        serde_json::from_value(json!([
            {
                "id": 4, "name": "Mahindra XUV700", "price": "₹14 Lakh - ₹26 Lakh*",
                "rating": 4.6, "reviews": 1800,
                "engine": "1999 cc", "power": "197 bhp", "mileage": "13 kmpl",
                "groundClearance": "200 mm", "bootSpace": "240 L", "safetyRating": "5 Star",
                "fuel": ["Petrol", "Diesel"], "transmission": ["Manual", "Automatic"],
                "features": ["ADAS Level 2", "Panoramic Sunroof"],
                "variants": [
                    {"name": "MX", "price": "₹14 Lakh", "fuel": "Petrol", "transmission": "Manual", "waitingPeriod": "2-4 weeks"}
                ]
            },
            {"id": 5, "name": "Kia Seltos", "price": "₹11 Lakh"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_lookup_found_defaults_to_overview() {
        let cars = cars();
        let view = lookup(&cars, 4).found().unwrap();
        assert_eq!(view.car().name, "Mahindra XUV700");
        assert_eq!(view.section(), Section::Overview);
    }

    #[test]
    fn test_lookup_not_found() {
        let cars = cars();
        assert!(matches!(lookup(&cars, 99), Lookup::NotFound { id: 99 }));
        assert!(matches!(lookup(&[], 4), Lookup::NotFound { id: 4 }));
    }

    #[test]
    fn test_section_projections() {
        let cars = cars();
        let mut view = lookup(&cars, 4).found().unwrap();
        view.select(Section::Variants);
        assert_eq!(view.section(), Section::Variants);

        let specs = view.key_specs();
        assert_eq!(specs[2], ("Transmission", "Manual, Automatic".to_string()));
        assert_eq!(specs[3], ("Fuel Type", "Petrol, Diesel".to_string()));
        assert_eq!(view.additional_specs()[0], ("Ground Clearance", "200 mm".to_string()));
        assert_eq!(view.features().len(), 2);
        assert_eq!(view.variants()[0].waiting_period, "2-4 weeks");

        let reviews = view.reviews();
        assert_eq!(reviews.filled_stars, 4);
        assert_eq!(reviews.count, 1800);
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("Specifications".parse::<Section>().unwrap(), Section::Specifications);
        assert_eq!("reviews".parse::<Section>().unwrap(), Section::Reviews);
        assert!("gallery".parse::<Section>().is_err());
        assert_eq!(Section::Features.to_string(), "features");
    }
}
