use carhub::auth::{LoginForm, RegistrationForm};
use carhub::{Catalog, Config, Route, Section, Session, SortKey, logging, lookup, render};
use clap::{Args, Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "carhub")]
#[command(about = "CarHub CLI - Browse, filter and inspect the car catalog")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a config file (default: <config dir>/carhub/config.yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON document to use instead of the bundled data
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cars matching the given filters
    List(ListArgs),

    /// Show one car's detail page
    Show {
        /// Car id
        id: u32,

        /// Tab to display
        #[arg(short, long, default_value = "overview")]
        section: Section,
    },

    /// Show filter options and catalog price bounds
    Facets,

    /// Browse upcoming cars by price band
    Upcoming {
        /// Price band label, e.g. "5 - 10 Lakh"
        #[arg(short, long)]
        band: Option<String>,
    },

    /// Render the page behind a route, e.g. /car/3
    Open {
        route: Route,
    },

    /// Submit the registration form
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        /// Agree to the terms and conditions
        #[arg(long)]
        agree: bool,
    },

    /// Submit the login form
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Args, Default)]
struct ListArgs {
    /// Search name, features and description
    #[arg(short, long)]
    query: Option<String>,

    #[arg(short, long)]
    brand: Option<String>,

    #[arg(short, long)]
    fuel: Option<String>,

    #[arg(short, long)]
    transmission: Option<String>,

    /// Lower price bound in rupees
    #[arg(long)]
    min_price: Option<f64>,

    /// Upper price bound in rupees
    #[arg(long)]
    max_price: Option<f64>,

    /// Sort order: relevance, price-asc, price-desc, rating, popular
    #[arg(short, long, default_value = "relevance")]
    sort: SortKey,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,
}

fn main() -> Result<()> {
    // Setup tracing
    logging::init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.data.is_some() {
        config.data_path = cli.data.clone();
    }
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let catalog = Catalog::open(config.data_path.as_deref())?;

    match cli.command {
        Commands::List(args) => print!("{}", list(&catalog, &config, &args)),
        Commands::Show { id, section } => print!("{}", show(&catalog, &config, id, section)),
        Commands::Facets => print!("{}", render::facets(&catalog)),
        Commands::Upcoming { band } => print!("{}", render::upcoming(catalog.cars(), band.as_deref())),
        Commands::Open { route } => open(&catalog, &config, route),
        Commands::Register {
            name,
            email,
            phone,
            password,
            confirm_password,
            agree,
        } => {
            let form = RegistrationForm {
                name,
                email,
                phone,
                password,
                confirm_password,
                agree_to_terms: agree,
            };
            println!("Creating account...");
            let next = form.submit(config.submit_delay)?;
            println!("Account created. Continue at {}", next);
        }
        Commands::Login { email, password } => {
            let form = LoginForm { email, password };
            println!("Signing in...");
            let next = form.submit(config.submit_delay)?;
            println!("Signed in. Continue at {}", next);
        }
    }

    Ok(())
}

fn list(catalog: &Catalog, config: &Config, args: &ListArgs) -> String {
    let mut session = Session::new(catalog, config.page_size, config.page_delay);

    if let Some(q) = &args.query {
        session.set_query(q.as_str());
    }
    if let Some(b) = &args.brand {
        session.set_brand(b.as_str());
    }
    if let Some(f) = &args.fuel {
        session.set_fuel(f.as_str());
    }
    if let Some(t) = &args.transmission {
        session.set_transmission(t.as_str());
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let filter = session.filter();
        let min = args.min_price.unwrap_or(filter.min_price);
        let max = args.max_price.unwrap_or(filter.max_price);
        session.set_price_range(min, max);
    }
    session.set_sort(args.sort);

    if args.page != 1 && !session.go_to_page(catalog, args.page) {
        warn!(page = args.page, "Page out of range, showing page 1");
    }

    render::listing(&session.listing(catalog), |id| session.is_saved(id))
}

fn show(catalog: &Catalog, config: &Config, id: u32, section: Section) -> String {
    let session = Session::new(catalog, config.page_size, config.page_delay);
    let mut found = lookup(catalog.cars(), id);
    if let carhub::Lookup::Found(view) = &mut found {
        view.select(section);
    }
    render::detail(&found, |id| session.is_saved(id))
}

fn open(catalog: &Catalog, config: &Config, route: Route) {
    let page = match route {
        Route::Catalog => list(catalog, config, &ListArgs { page: 1, ..ListArgs::default() }),
        Route::CarDetail(id) => show(catalog, config, id, Section::default()),
        Route::UpcomingCars => render::upcoming(catalog.cars(), None),
        Route::Login => "Login: carhub login --email <EMAIL> --password <PASSWORD>\n".to_string(),
        Route::Register => {
            "Register: carhub register --name <NAME> --email <EMAIL> --phone <PHONE> --password <PASSWORD> --confirm-password <PASSWORD> --agree\n"
                .to_string()
        }
    };
    print!("{}", page);
}
