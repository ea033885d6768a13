// Navigation routes

use eyre::{Result, eyre};
use std::str::FromStr;

/// Page the user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Catalog,
    /// `/car/{id}`
    CarDetail(u32),
    /// `/upcoming-cars`
    UpcomingCars,
    /// `/login`
    Login,
    /// `/register`
    Register,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Catalog => write!(f, "/"),
            Route::CarDetail(id) => write!(f, "/car/{}", id),
            Route::UpcomingCars => write!(f, "/upcoming-cars"),
            Route::Login => write!(f, "/login"),
            Route::Register => write!(f, "/register"),
        }
    }
}

impl FromStr for Route {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let path = s.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Ok(Route::Catalog),
            "/upcoming-cars" => Ok(Route::UpcomingCars),
            "/login" => Ok(Route::Login),
            "/register" => Ok(Route::Register),
            _ => {
                let id = trimmed
                    .strip_prefix("/car/")
                    .ok_or_else(|| eyre!("No route matches {}", s))?;
                let id = id.parse().map_err(|_| eyre!("Invalid car id in route: {}", s))?;
                Ok(Route::CarDetail(id))
            }
        }
    }
}
