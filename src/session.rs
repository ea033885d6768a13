// Listing view state owned by one browsing session

use crate::catalog::Catalog;
use crate::filter::{Filter, SortKey};
use crate::models::Car;
use crate::page::{PageLink, Paginator};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::debug;

/// Granularity of the budget slider, in rupees (1 Lakh)
pub const PRICE_STEP: f64 = 100_000.0;

/// Filters, sort, page and saved cars for the catalog listing
#[derive(Debug, Clone)]
pub struct Session {
    filter: Filter,
    sort: SortKey,
    pager: Paginator,
    page_delay: Duration,
    bounds: (f64, f64),
    saved: BTreeSet<u32>,
}

/// One rendered page of the listing
#[derive(Debug)]
pub struct ListingPage<'a> {
    /// Cars on the current page
    pub cars: Vec<&'a Car>,
    /// Cars matching the filter, across all pages
    pub matched: usize,
    /// Cars in the catalog
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub links: Vec<PageLink>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Session {
    /// Fresh session with the price window spanning the catalog
    pub fn new(catalog: &Catalog, page_size: usize, page_delay: Duration) -> Self {
        let bounds = catalog.price_bounds();
        Self {
            filter: catalog.default_filter(),
            sort: SortKey::default(),
            pager: Paginator::new(page_size),
            page_delay,
            bounds: (bounds.min, bounds.max),
            saved: BTreeSet::new(),
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.pager.current()
    }

    pub fn is_loading(&self) -> bool {
        self.pager.is_loading()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.pager.reset();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.filter.brand = brand.into();
        self.pager.reset();
    }

    pub fn set_fuel(&mut self, fuel: impl Into<String>) {
        self.filter.fuel = fuel.into();
        self.pager.reset();
    }

    pub fn set_transmission(&mut self, transmission: impl Into<String>) {
        self.filter.transmission = transmission.into();
        self.pager.reset();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.pager.reset();
    }

    /// Set both ends of the price window as given
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.filter.min_price = min;
        self.filter.max_price = max;
        self.pager.reset();
    }

    /// Move the slider-controlled upper bound.
    ///
    /// Snaps to the nearest whole Lakh and stays within the catalog bounds.
    pub fn set_max_price(&mut self, max: f64) {
        let (lo, hi) = self.bounds;
        let snapped = (max / PRICE_STEP).round() * PRICE_STEP;
        self.filter.max_price = snapped.clamp(lo, hi.max(lo));
        self.pager.reset();
    }

    /// Filtered, sorted matches for the current state
    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Car> {
        catalog.search(&self.filter, self.sort)
    }

    /// Request page `page`; out-of-range requests leave the session unchanged
    pub fn go_to_page(&mut self, catalog: &Catalog, page: usize) -> bool {
        let matched = self.results(catalog).len();
        self.pager.go_to(page, matched, self.page_delay)
    }

    pub fn listing<'a>(&self, catalog: &'a Catalog) -> ListingPage<'a> {
        let results = self.results(catalog);
        let matched = results.len();

        ListingPage {
            cars: self.pager.slice(&results).to_vec(),
            matched,
            total: catalog.len(),
            page: self.pager.current(),
            total_pages: self.pager.total_pages(matched),
            links: self.pager.links(matched),
            has_previous: self.pager.has_previous(),
            has_next: self.pager.has_next(matched),
        }
    }

    /// Flip the saved flag of `id`, returning whether it is now saved
    pub fn toggle_saved(&mut self, id: u32) -> bool {
        let saved = if self.saved.remove(&id) {
            false
        } else {
            self.saved.insert(id);
            true
        };
        debug!(id, saved, "Toggled saved car");
        saved
    }

    pub fn is_saved(&self, id: u32) -> bool {
        self.saved.contains(&id)
    }

    pub fn saved(&self) -> impl Iterator<Item = u32> + '_ {
        self.saved.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        let cars: Vec<Car> = (1..=14)
            .map(|i: u32| {
                let brand = if i % 2 == 0 { "Tata" } else { "Kia" };
                serde_json::from_value(json!({
                    "id": i,
                    "name": format!("{} Model{}", brand, i),
                    "price": format!("₹{} Lakh - ₹{} Lakh*", i, i + 2),
                    "reviews": i * 10,
                    "fuel": ["Petrol"],
                    "transmission": ["Manual"]
                }))
                .unwrap()
            })
            .collect();
        Catalog::new(cars)
    }

    fn session(catalog: &Catalog) -> Session {
        Session::new(catalog, 6, Duration::ZERO)
    }

    #[test]
    fn test_initial_listing() {
        let catalog = catalog();
        let session = session(&catalog);
        let page = session.listing(&catalog);

        assert_eq!(page.matched, 14);
        assert_eq!(page.total, 14);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.cars.len(), 6);
        assert_eq!(page.cars[0].id, 1);
        assert!(!page.has_previous);
        assert!(page.has_next);
        assert_eq!(session.filter().min_price, 100_000.0);
        assert_eq!(session.filter().max_price, 1_600_000.0);
    }

    #[test]
    fn test_page_change_and_rejection() {
        let catalog = catalog();
        let mut session = session(&catalog);

        assert!(session.go_to_page(&catalog, 3));
        let page = session.listing(&catalog);
        assert_eq!(page.page, 3);
        assert_eq!(page.cars.len(), 2);
        assert!(!page.has_next);

        assert!(!session.go_to_page(&catalog, 4));
        assert!(!session.go_to_page(&catalog, 0));
        assert_eq!(session.current_page(), 3);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_filter_change_returns_to_first_page() {
        let catalog = catalog();
        let mut session = session(&catalog);
        session.go_to_page(&catalog, 2);

        session.set_brand("Tata");
        assert_eq!(session.current_page(), 1);
        let page = session.listing(&catalog);
        assert_eq!(page.matched, 7);
        assert!(page.cars.iter().all(|c| c.brand() == "Tata"));
    }

    #[test]
    fn test_sort_and_query() {
        let catalog = catalog();
        let mut session = session(&catalog);
        session.set_sort(SortKey::MostPopular);
        assert_eq!(session.listing(&catalog).cars[0].id, 14);

        session.set_query("model1");
        let ids: Vec<u32> = session.results(&catalog).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![14, 13, 12, 11, 10, 1]);
    }

    #[test]
    fn test_slider_snaps_and_clamps() {
        let catalog = catalog();
        let mut session = session(&catalog);

        session.set_max_price(549_999.0);
        assert_eq!(session.filter().max_price, 500_000.0);
        assert_eq!(session.results(&catalog).len(), 3);

        session.set_max_price(99_000_000.0);
        assert_eq!(session.filter().max_price, 1_600_000.0);

        session.set_max_price(0.0);
        assert_eq!(session.filter().max_price, 100_000.0);
    }

    #[test]
    fn test_explicit_price_range() {
        let catalog = catalog();
        let mut session = session(&catalog);
        session.set_price_range(300_000.0, 700_000.0);
        let ids: Vec<u32> = session.results(&catalog).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_toggle_saved() {
        let catalog = catalog();
        let mut session = session(&catalog);

        assert!(session.toggle_saved(3));
        assert!(session.toggle_saved(1));
        assert!(session.is_saved(3));
        assert_eq!(session.saved().collect::<Vec<_>>(), vec![1, 3]);

        assert!(!session.toggle_saved(3));
        assert!(!session.is_saved(3));
    }

    #[test]
    fn test_set_fuel_and_transmission() {
        let catalog = catalog();
        let mut session = session(&catalog);
        session.set_fuel("Diesel");
        assert!(session.results(&catalog).is_empty());
        session.set_fuel("Petrol");
        session.set_transmission("Manual");
        assert_eq!(session.results(&catalog).len(), 14);
    }
}
