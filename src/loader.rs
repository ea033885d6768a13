// Catalog document loading

use crate::models::Car;
use eyre::{Context, Result, eyre};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Catalog data shipped with the binary
pub const BUNDLED_CARS: &str = include_str!("../data/cars.json");

/// Load the bundled catalog document
pub fn load_bundled() -> Result<Vec<Car>> {
    parse_document(BUNDLED_CARS).context("Bundled catalog is invalid")
}

/// Load a catalog document from disk
pub fn load_file(path: &Path) -> Result<Vec<Car>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read catalog file {:?}", path))?;
    let cars = parse_document(&content).with_context(|| format!("Failed to load catalog from {:?}", path))?;

    info!(file = ?path, count = cars.len(), "Loaded catalog");
    Ok(cars)
}

/// Parse a `{ "cars": [...] }` document.
///
/// The document must be valid JSON with a `cars` array. Individual entries that
/// do not match the car schema are skipped. When an id repeats, the first entry wins.
pub fn parse_document(content: &str) -> Result<Vec<Car>> {
    let document: Value = serde_json::from_str(content).context("Catalog is not valid JSON")?;

    let entries = document
        .get("cars")
        .ok_or_else(|| eyre!("Catalog document has no \"cars\" key"))?
        .as_array()
        .ok_or_else(|| eyre!("\"cars\" must be an array"))?;

    let mut seen = HashSet::new();
    let mut cars = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let car: Car = match serde_json::from_value(entry.clone()) {
            Ok(c) => c,
            Err(e) => {
                warn!(index, error = ?e, "Failed to parse car entry, skipping");
                continue;
            }
        };

        if !seen.insert(car.id) {
            warn!(index, id = car.id, "Duplicate car id, keeping first occurrence");
            continue;
        }

        if car.price.min() == 0.0 {
            warn!(id = car.id, price = %car.price, "Price did not parse, treating as 0");
        }

        cars.push(car);
    }

    Ok(cars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_document() {
        let cars = parse_document(
            r#"{"cars":[
                {"id":1,"name":"Tata Nexon","price":"₹8 Lakh - ₹14 Lakh*"},
                {"id":2,"name":"Hyundai Creta","price":"₹11 Lakh - ₹20 Lakh*"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].name, "Tata Nexon");
        assert_eq!(cars[1].price.max(), 2_000_000.0);
    }

    #[test]
    fn test_parse_document_skips_malformed_entries() {
        let cars = parse_document(
            r#"{"cars":[
                {"id":1,"name":"Valid","price":"₹5 Lakh"},
                {"id":"two","name":"Bad id","price":"₹5 Lakh"},
                {"name":"No id","price":"₹5 Lakh"},
                {"id":3,"name":"Also Valid","price":"₹6 Lakh"}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<u32> = cars.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_parse_document_duplicate_id_keeps_first() {
        let cars = parse_document(
            r#"{"cars":[
                {"id":1,"name":"First","price":"₹5 Lakh"},
                {"id":1,"name":"Second","price":"₹6 Lakh"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].name, "First");
    }

    #[test]
    fn test_parse_document_shape_errors() {
        assert!(parse_document("{not json").is_err());
        assert!(parse_document(r#"{"vehicles":[]}"#).is_err());
        assert!(parse_document(r#"{"cars":{}}"#).is_err());
        assert!(parse_document(r#"{"cars":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cars.json");
        fs::write(&path, r#"{"cars":[{"id":9,"name":"Kia Seltos","price":"₹11 Lakh"}]}"#).unwrap();

        let cars = load_file(&path).unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].brand(), "Kia");
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file(&PathBuf::from("/nonexistent/cars.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let cars = load_bundled().unwrap();
        assert!(cars.len() > 6);
        assert!(cars.iter().all(|c| c.price.min() > 0.0));
    }
}
