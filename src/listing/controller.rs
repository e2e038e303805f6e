use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info};
use crate::config::DisplaySettings;
use crate::error::Result;
use crate::listing::filter_and_sort;
use crate::page::{InputField, ListingArea};
use crate::render::{render_listing, FAILED_HTML, LOADING_HTML};
use crate::services::VendorSource;

/// What a single `search` left in the listing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The page has no listing area; nothing was requested.
    Inert,
    Rendered(usize),
    Empty,
    Failed,
    /// A newer search was issued before this one completed; its result was dropped.
    Superseded,
}

/// Drives the vendor listing: loading indicator, fetch, filter, sort, render.
///
/// Every trigger starts a new search. Searches may overlap; only the most
/// recently issued one writes its result, so a slow early response never
/// replaces a fresher listing.
pub struct ListingController<S> {
    source: S,
    display: DisplaySettings,
    listing: Option<Arc<dyn ListingArea>>,
    search_input: Option<Arc<dyn InputField>>,
    category_filter: Option<Arc<dyn InputField>>,
    issued: AtomicU64,
}

impl<S: VendorSource> ListingController<S> {
    pub fn new(source: S, display: DisplaySettings) -> Self {
        Self {
            source,
            display,
            listing: None,
            search_input: None,
            category_filter: None,
            issued: AtomicU64::new(0),
        }
    }

    pub fn with_listing(mut self, listing: Arc<dyn ListingArea>) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_search_input(mut self, input: Arc<dyn InputField>) -> Self {
        self.search_input = Some(input);
        self
    }

    pub fn with_category_filter(mut self, filter: Arc<dyn InputField>) -> Self {
        self.category_filter = Some(filter);
        self
    }

    /// Initial load with no query and no category.
    pub async fn on_ready(&self) -> ListingOutcome {
        self.search("", "").await
    }

    pub async fn on_search_input(&self) -> ListingOutcome {
        let (query, category) = self.current_filters();
        self.search(&query, &category).await
    }

    pub async fn on_category_change(&self) -> ListingOutcome {
        let (query, category) = self.current_filters();
        self.search(&query, &category).await
    }

    fn current_filters(&self) -> (String, String) {
        let query = self
            .search_input
            .as_ref()
            .map(|input| input.value())
            .unwrap_or_default();
        let category = self
            .category_filter
            .as_ref()
            .map(|filter| filter.value())
            .unwrap_or_default();
        (query, category)
    }

    pub async fn search(&self, query: &str, category: &str) -> ListingOutcome {
        let Some(listing) = self.listing.as_ref() else {
            debug!("No listing area on page, ignoring search");
            return ListingOutcome::Inert;
        };

        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        listing.set_html(LOADING_HTML.to_string());

        debug!(
            ticket = ticket,
            query = query,
            category = category,
            "Searching vendors"
        );

        let result = self.load(query, category).await;

        let latest = self.issued.load(Ordering::SeqCst);
        if latest != ticket {
            debug!(
                ticket = ticket,
                latest = latest,
                "Dropping superseded search result"
            );
            return ListingOutcome::Superseded;
        }

        match result {
            Ok((html, count)) => {
                listing.set_html(html);
                info!(
                    query = query,
                    category = category,
                    listed = count,
                    "Vendor listing rendered"
                );
                if count == 0 {
                    ListingOutcome::Empty
                } else {
                    ListingOutcome::Rendered(count)
                }
            }
            Err(e) => {
                error!(
                    error = %e,
                    query = query,
                    category = category,
                    "Failed to load vendor list"
                );
                listing.set_html(FAILED_HTML.to_string());
                ListingOutcome::Failed
            }
        }
    }

    async fn load(&self, query: &str, category: &str) -> Result<(String, usize)> {
        let vendors = self.source.fetch_vendors(query, category).await?;
        let fetched = vendors.len();
        let listed = filter_and_sort(vendors);

        debug!(
            fetched = fetched,
            listed = listed.len(),
            "Filtered vendor results"
        );

        let html = render_listing(&listed, &self.display)?;
        Ok((html, listed.len()))
    }
}
