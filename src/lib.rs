//! Client-side layer of a local vendor directory: vendor search listing,
//! callback-request form and geolocation-assisted search helpers.

pub mod callback;
pub mod clients;
pub mod config;
pub mod error;
pub mod listing;
pub mod location;
pub mod models;
pub mod page;
pub mod render;
pub mod services;
pub mod utils;

pub use callback::{CallbackFormHandler, SubmitOutcome};
pub use error::{Error, Result};
pub use listing::{filter_and_sort, ListingController, ListingOutcome};
pub use location::{suggest, LocationHelper, SearchTarget, SearchTerms};
pub use models::Vendor;
pub use render::{render_card, stars};
pub use services::ApiService;
