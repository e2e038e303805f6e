mod controller;
mod pipeline;

pub use controller::{ListingController, ListingOutcome};
pub use pipeline::{filter_and_sort, MIN_LISTED_RATING};
