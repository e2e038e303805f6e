//! Geolocation-assisted search box: fill the city from the device position,
//! validate the search fields and navigate to the results.

mod search;

use std::sync::Arc;
use tracing::{debug, info};
use crate::error::Result;
use crate::page::{InputField, Navigator, Notifier};
use crate::services::{PositionSource, ReverseGeocoder, SuggestionSource};

pub use search::{SearchTarget, SearchTerms, EMPTY_SEARCH_NOTICE};

pub struct LocationHelper<G> {
    geocoder: G,
    search_input: Option<Arc<dyn InputField>>,
    location_input: Option<Arc<dyn InputField>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl<G: ReverseGeocoder> LocationHelper<G> {
    pub fn new(geocoder: G, notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            geocoder,
            search_input: None,
            location_input: None,
            notifier,
            navigator,
        }
    }

    pub fn with_search_input(mut self, input: Arc<dyn InputField>) -> Self {
        self.search_input = Some(input);
        self
    }

    pub fn with_location_input(mut self, input: Arc<dyn InputField>) -> Self {
        self.location_input = Some(input);
        self
    }

    /// Reverse geocodes the current position and writes the locality into
    /// the location field. Position and geocoder errors are returned as-is.
    pub async fn use_my_location(&self, position: &dyn PositionSource) -> Result<String> {
        let coords = position.current_position().await?;
        debug!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "Resolving current position"
        );

        let address = self.geocoder.reverse(coords).await?;
        let locality = address.locality().to_string();

        if let Some(input) = &self.location_input {
            input.set_value(&locality);
        }
        info!(locality = %locality, "Location field filled from position");
        Ok(locality)
    }

    /// Navigates to the home listing. Returns the URL, or `None` when both
    /// fields are empty and the user was asked to fill one in.
    pub fn search_vendors(&self) -> Option<String> {
        self.navigate_to(SearchTarget::Home)
    }

    /// Same as [`search_vendors`](Self::search_vendors) but targets `/search`.
    pub fn perform_search(&self) -> Option<String> {
        self.navigate_to(SearchTarget::Results)
    }

    fn navigate_to(&self, target: SearchTarget) -> Option<String> {
        let read = |field: &Option<Arc<dyn InputField>>| {
            field.as_ref().map(|f| f.value()).unwrap_or_default()
        };

        match SearchTerms::new(&read(&self.search_input), &read(&self.location_input)) {
            Ok(terms) => {
                let url = terms.url(target);
                debug!(url = %url, "Navigating to search results");
                self.navigator.navigate(&url);
                Some(url)
            }
            Err(_) => {
                self.notifier.notify(EMPTY_SEARCH_NOTICE);
                None
            }
        }
    }
}

/// Autocomplete for the search box; an empty prefix never hits the backend.
pub async fn suggest<S: SuggestionSource + ?Sized>(
    source: &S,
    prefix: &str,
    city: &str,
) -> Result<Vec<String>> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Ok(Vec::new());
    }

    let mut names = source.fetch_suggestions(prefix, city.trim()).await?;
    names.sort();
    names.dedup();
    Ok(names)
}
