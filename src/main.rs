use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vendor_directory::callback::CallbackFormHandler;
use vendor_directory::config::Settings;
use vendor_directory::models::{CallbackRequest, Coordinates};
use vendor_directory::page::{MemoryCallbackForm, MemoryInput, MemoryListing, MemoryModal, ModalTrigger, Recorder};
use vendor_directory::services::FixedPosition;
use vendor_directory::{suggest, ApiService, ListingController, ListingOutcome, LocationHelper, SubmitOutcome};

#[derive(Parser)]
#[command(name = "vendor-directory")]
#[command(author, version, about = "Headless client for the vendor directory")]
struct Cli {
    /// Settings file; defaults to config/default.* when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the vendor listing for a query and category
    Search {
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(short = 'k', long, default_value = "")]
        category: String,

        /// Write the listing HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Request a callback from a vendor
    Callback {
        #[arg(long)]
        vendor_phone: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        phone: String,

        #[arg(short, long, default_value = "")]
        message: String,

        /// Accept the Terms & Conditions
        #[arg(long)]
        accept_terms: bool,
    },
    /// Resolve a position to the city used for searching
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Print the navigation target for a search
    Url {
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(short, long, default_value = "")]
        location: String,

        /// Target the /search results page instead of the home listing
        #[arg(long)]
        results_page: bool,
    },
    /// Autocomplete business names
    Suggest {
        #[arg(short, long)]
        q: String,

        #[arg(long, default_value = "")]
        city: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };

    info!(
        started_at = %Utc::now().format("%Y-%m-%d %H:%M:%S"),
        api = %settings.api.base_url,
        "Starting vendor directory client"
    );

    let api = ApiService::new(&settings)?;

    match cli.command {
        Commands::Search { query, category, output } => {
            let listing = Arc::new(MemoryListing::new());
            let controller = ListingController::new(api, settings.display.clone())
                .with_listing(listing.clone())
                .with_search_input(Arc::new(MemoryInput::new(query)))
                .with_category_filter(Arc::new(MemoryInput::new(category)));

            let outcome = controller.on_search_input().await;
            match output {
                Some(path) => tokio::fs::write(&path, listing.html()).await?,
                None => println!("{}", listing.html()),
            }
            if outcome == ListingOutcome::Failed {
                bail!("vendor listing could not be loaded");
            }
        }
        Commands::Callback { vendor_phone, name, phone, message, accept_terms } => {
            let notices = Arc::new(Recorder::new());
            let form = Arc::new(MemoryCallbackForm::new(CallbackRequest {
                user_name: name,
                user_phone: phone,
                message,
                terms_accepted: accept_terms,
                ..Default::default()
            }));
            let handler = CallbackFormHandler::new(
                api,
                form,
                Arc::new(MemoryModal::open()),
                notices.clone(),
            );

            handler.on_modal_show(Some(&ModalTrigger::for_phone(vendor_phone)));
            let outcome = handler.submit().await;
            for notice in notices.entries() {
                println!("{notice}");
            }
            if !matches!(outcome, SubmitOutcome::Submitted(_)) {
                bail!("callback request was not accepted");
            }
        }
        Commands::Locate { lat, lon } => {
            let location = Arc::new(MemoryInput::default());
            let helper = LocationHelper::new(api, Arc::new(Recorder::new()), Arc::new(Recorder::new()))
                .with_location_input(location.clone());
            let here = FixedPosition(Coordinates { latitude: lat, longitude: lon });

            let city = helper.use_my_location(&here).await?;
            println!("{city}");
        }
        Commands::Url { query, location, results_page } => {
            let notices = Arc::new(Recorder::new());
            let helper = LocationHelper::new(api, notices.clone(), Arc::new(Recorder::new()))
                .with_search_input(Arc::new(MemoryInput::new(query)))
                .with_location_input(Arc::new(MemoryInput::new(location)));

            let url = if results_page {
                helper.perform_search()
            } else {
                helper.search_vendors()
            };
            match url {
                Some(url) => println!("{url}"),
                None => bail!("{}", notices.last().unwrap_or_default()),
            }
        }
        Commands::Suggest { q, city } => {
            for name in suggest(&api, &q, &city).await? {
                println!("{name}");
            }
        }
    }

    Ok(())
}
