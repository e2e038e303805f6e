pub mod api;

use async_trait::async_trait;
use crate::error::Result;
use crate::models::{CallbackRequest, CallbackResponse, Coordinates, GeocodeAddress, Vendor};

pub use api::ApiService;

/// Backend search: `GET /api/vendors?query=&category=`.
#[async_trait]
pub trait VendorSource: Send + Sync {
    async fn fetch_vendors(&self, query: &str, category: &str) -> Result<Vec<Vendor>>;
}

/// Backend autocomplete: `GET /api/vendor_suggestions?q=&city=`.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch_suggestions(&self, prefix: &str, city: &str) -> Result<Vec<String>>;
}

/// `POST /submit_callback`.
#[async_trait]
pub trait CallbackSink: Send + Sync {
    async fn submit_callback(&self, request: &CallbackRequest) -> Result<CallbackResponse>;
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, position: Coordinates) -> Result<GeocodeAddress>;
}

/// Source of the device's current position.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates>;
}

/// A position supplied up front, e.g. from the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl PositionSource for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.0)
    }
}
