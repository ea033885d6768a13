// Plain-text rendering of catalog views

use crate::catalog::Catalog;
use crate::detail::{DetailView, Lookup, Section, SpecRow};
use crate::filter::SortKey;
use crate::models::Car;
use crate::page::PageLink;
use crate::price::format_rupees;
use crate::routes::Route;
use crate::session::ListingPage;
use crate::upcoming::{self, ALL_PRICES, PRICE_BANDS};
use colored::Colorize;
use std::fmt;

/// Features shown on a listing card before "+N more"
const CARD_FEATURES: usize = 3;

pub fn listing(page: &ListingPage<'_>, saved: impl Fn(u32) -> bool) -> String {
    Listing { page, saved }.to_string()
}

pub fn card(car: &Car, saved: bool) -> String {
    Card { car, saved }.to_string()
}

/// Detail page for a lookup; `saved` reports whether a car id is in the saved set
pub fn detail(lookup: &Lookup<'_>, saved: impl Fn(u32) -> bool) -> String {
    match lookup {
        Lookup::Found(view) => DetailPage {
            view,
            saved: saved(view.car().id),
        }
        .to_string(),
        Lookup::NotFound { id } => NotFound { id: *id }.to_string(),
    }
}

/// Brand, fuel and transmission options, price bounds and sort choices
pub fn facets(catalog: &Catalog) -> String {
    Facets { catalog }.to_string()
}

pub fn upcoming(cars: &[Car], selected: Option<&str>) -> String {
    Upcoming { cars, selected }.to_string()
}

struct Listing<'p, 'a, F> {
    page: &'p ListingPage<'a>,
    saved: F,
}

impl<F: Fn(u32) -> bool> fmt::Display for Listing<'_, '_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page;
        writeln!(f, "Showing {} of {} cars", page.matched, page.total)?;

        if page.cars.is_empty() {
            return writeln!(f, "\n{}", "No cars match the selected filters.".dimmed());
        }

        for &car in &page.cars {
            write!(f, "\n{}", Card { car, saved: (self.saved)(car.id) })?;
        }

        if !page.links.is_empty() {
            writeln!(f, "\n{}", page_bar(page))?;
        }
        Ok(())
    }
}

struct Card<'a> {
    car: &'a Car,
    saved: bool,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let car = self.car;

        write!(f, "#{} {}", car.id, car.name.bold())?;
        if car.is_popular {
            write!(f, " [{}]", "Popular".yellow())?;
        }
        if self.saved {
            write!(f, " {}", "♥".red())?;
        }
        writeln!(f)?;

        writeln!(f, "  {} {} ({} reviews)", stars(car.filled_stars()), car.rating, car.reviews)?;
        writeln!(f, "  {}", car.price.as_str().bright_yellow().bold())?;
        writeln!(
            f,
            "  {} | {} | {} | {}",
            car.fuel.join(", "),
            car.transmission.join(", "),
            car.engine,
            car.mileage
        )?;

        if !car.features.is_empty() {
            let shown = car.features.iter().take(CARD_FEATURES).cloned().collect::<Vec<_>>();
            write!(f, "  {}", shown.join(" · "))?;
            if car.features.len() > CARD_FEATURES {
                write!(f, " +{} more", car.features.len() - CARD_FEATURES)?;
            }
            writeln!(f)?;
        }

        if !car.offers.is_empty() {
            writeln!(f, "  {}", car.offers.cyan())?;
        }
        writeln!(f, "  View Details: {}", Route::CarDetail(car.id))
    }
}

fn page_bar(page: &ListingPage<'_>) -> String {
    let mut parts = Vec::new();
    parts.push(if page.has_previous { "Previous".to_string() } else { "Previous".dimmed().to_string() });

    for link in &page.links {
        parts.push(match link {
            PageLink::Page(p) if *p == page.page => format!("[{}]", p).bold().to_string(),
            PageLink::Page(p) => p.to_string(),
            PageLink::Gap => "...".to_string(),
        });
    }

    parts.push(if page.has_next { "Next".to_string() } else { "Next".dimmed().to_string() });
    parts.join(" ")
}

fn stars(filled: usize) -> String {
    let filled = filled.min(5);
    format!("{}{}", "★".repeat(filled).yellow(), "☆".repeat(5 - filled))
}

struct NotFound {
    id: u32,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "Car not found".red().bold())?;
        writeln!(f, "No car has id {}.", self.id)?;
        writeln!(f, "Back to listings: {}", Route::Catalog)
    }
}

struct DetailPage<'v, 'a> {
    view: &'v DetailView<'a>,
    saved: bool,
}

impl fmt::Display for DetailPage<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        let car = view.car();

        write!(f, "{}", car.name.bold())?;
        if self.saved {
            write!(f, "  {}", "♥ Saved".red())?;
        }
        writeln!(f)?;
        writeln!(f, "{}", car.price.as_str().bright_yellow().bold())?;

        let tabs: Vec<String> = Section::ALL
            .iter()
            .map(|s| {
                if *s == view.section() {
                    format!("[{}]", s).bold().to_string()
                } else {
                    s.to_string()
                }
            })
            .collect();
        writeln!(f, "{}\n", tabs.join("  "))?;

        match view.section() {
            Section::Overview => {
                if !car.description.is_empty() {
                    writeln!(f, "{}\n", car.description)?;
                }
                spec_table(f, "Key Specifications", &view.key_specs())?;
                bullet_list(f, "Highlights", &car.highlights)?;
                bullet_list(f, "Pros", &car.pros)?;
                bullet_list(f, "Cons", &car.cons)?;
            }
            Section::Specifications => {
                spec_table(f, "Engine & Transmission", &view.key_specs())?;
                spec_table(f, "Dimensions & Safety", &view.additional_specs())?;
            }
            Section::Features => bullet_list(f, "Features", view.features())?,
            Section::Variants => {
                writeln!(
                    f,
                    "{:<24} {:<16} {:<10} {:<12} {}",
                    "Variant".bold(),
                    "Price".bold(),
                    "Fuel".bold(),
                    "Transmission".bold(),
                    "Waiting Period".bold()
                )?;
                for v in view.variants() {
                    writeln!(
                        f,
                        "{:<24} {:<16} {:<10} {:<12} {}",
                        v.name, v.price, v.fuel, v.transmission, v.waiting_period
                    )?;
                }
            }
            Section::Reviews => {
                let summary = view.reviews();
                writeln!(f, "{} {}", summary.rating, stars(summary.filled_stars))?;
                writeln!(f, "Based on {} reviews", summary.count)?;
            }
        }
        Ok(())
    }
}

fn spec_table(f: &mut fmt::Formatter<'_>, title: &str, rows: &[SpecRow]) -> fmt::Result {
    writeln!(f, "{}", title.underline())?;
    for (label, value) in rows {
        writeln!(f, "  {:<18} {}", label, value)?;
    }
    writeln!(f)
}

fn bullet_list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}", title.underline())?;
    for item in items {
        writeln!(f, "  • {}", item)?;
    }
    writeln!(f)
}

struct Facets<'c> {
    catalog: &'c Catalog,
}

impl fmt::Display for Facets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.catalog;
        let bounds = catalog.price_bounds();
        let sorts: Vec<&str> = SortKey::ALL.iter().map(|k| k.label()).collect();

        writeln!(f, "{:<14} {}", "Brands".bold(), catalog.brands().join(", "))?;
        writeln!(f, "{:<14} {}", "Fuel".bold(), catalog.fuel_types().join(", "))?;
        writeln!(f, "{:<14} {}", "Transmission".bold(), catalog.transmissions().join(", "))?;
        writeln!(
            f,
            "{:<14} {} - {}",
            "Budget".bold(),
            format_rupees(bounds.min),
            format_rupees(bounds.max)
        )?;
        writeln!(f, "{:<14} {}", "Sort".bold(), sorts.join(", "))
    }
}

struct Upcoming<'c, 's> {
    cars: &'c [Car],
    selected: Option<&'s str>,
}

impl fmt::Display for Upcoming<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = upcoming::filter_by_band(self.cars, self.selected);
        let brands = upcoming::brands(self.cars);
        let active = self.selected.and_then(upcoming::band).map(|b| b.label).unwrap_or(ALL_PRICES);

        writeln!(f, "{}", "Explore New Cars".bold())?;
        writeln!(
            f,
            "Choose from {}+ new models across {} brands\n",
            list.len(),
            brands.len()
        )?;

        let bands: Vec<String> = std::iter::once(ALL_PRICES)
            .chain(PRICE_BANDS.iter().map(|b| b.label))
            .map(|label| {
                if label == active {
                    format!("[{}]", label).bold().to_string()
                } else {
                    label.to_string()
                }
            })
            .collect();
        writeln!(f, "{}\n", bands.join(" | "))?;

        if list.is_empty() {
            writeln!(f, "{}", "No cars found for the selected filters.".dimmed())?;
        }
        for car in &list {
            writeln!(f, "{}  {}", car.name.bold(), car.price.as_str().bright_yellow())?;
            match (car.launch_day(), car.launch_date.as_deref()) {
                (Some(day), _) => writeln!(f, "  Launch: {}", day.format("%d/%m/%Y"))?,
                (None, Some(raw)) => writeln!(f, "  Launch: {}", raw)?,
                (None, None) => {}
            }
        }

        writeln!(f, "\n{}: {}", "Brands".bold(), brands.join(", "))?;

        let top = upcoming::top_cars(&list);
        if !top.is_empty() {
            writeln!(f, "\nTop models:")?;
            for car in top {
                writeln!(f, "  • {} ({})", car.name, car.price)?;
            }
        }
        Ok(())
    }
}
