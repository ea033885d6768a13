// CarHub - Car listing catalog with search, filters, sorting and pagination

pub mod auth;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod models;
pub mod page;
pub mod price;
pub mod render;
pub mod routes;
pub mod session;
pub mod upcoming;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use detail::{DetailView, Lookup, Section, lookup};
pub use filter::{Filter, SortKey, apply};
pub use models::{Car, Variant};
pub use page::{PageLink, Paginator, paginate};
pub use price::{Price, PriceRange, parse_one, parse_range};
pub use routes::Route;
pub use session::Session;
