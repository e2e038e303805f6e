use std::sync::Arc;
use async_trait::async_trait;
use rquest_util::Emulation;
use serde::de::DeserializeOwned;
use tracing::{error, debug};
use crate::clients::HttpClient;
use crate::config::Settings;
use crate::error::{Result, Error};
use crate::models::{
    CallbackRequest, CallbackResponse, Coordinates, GeocodeAddress, ReverseGeocodeResponse, Vendor,
};
use crate::services::{CallbackSink, ReverseGeocoder, SuggestionSource, VendorSource};
use crate::utils::{encode_pairs, with_query};

/// HTTP access to the directory backend and the reverse geocoder.
#[derive(Clone)]
pub struct ApiService {
    api: Arc<HttpClient>,
    geocoder: Arc<HttpClient>,
    api_base: String,
    geocoder_base: String,
}

impl ApiService {
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = HttpClient::new(&settings.api.headers, Emulation::Firefox136)?;
        let geocoder = HttpClient::new(&settings.geocoder.headers, Emulation::Firefox136)?;

        Ok(Self {
            api: Arc::new(api),
            geocoder: Arc::new(geocoder),
            api_base: settings.api.base_url.clone(),
            geocoder_base: settings.geocoder.base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(client: &HttpClient, url: &str, what: &str) -> Result<T> {
        let request = client.get(url);
        let response = client.send(request).await?;
        let status = response.status();

        debug!(
            status = status.as_u16(),
            url = url,
            "API response received"
        );

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                url = url,
                "Unexpected status code for {}", what
            );
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                body = %body_str,
                "Failed to parse {} response", what
            );
            Error::from(e)
        })
    }
}

#[async_trait]
impl VendorSource for ApiService {
    async fn fetch_vendors(&self, query: &str, category: &str) -> Result<Vec<Vendor>> {
        let url = with_query(
            &self.api_base,
            "/api/vendors",
            &[("query", query), ("category", category)],
        );
        Self::get_json(&self.api, &url, "vendor search").await
    }
}

#[async_trait]
impl SuggestionSource for ApiService {
    async fn fetch_suggestions(&self, prefix: &str, city: &str) -> Result<Vec<String>> {
        let url = with_query(
            &self.api_base,
            "/api/vendor_suggestions",
            &[("q", prefix), ("city", city)],
        );
        Self::get_json(&self.api, &url, "vendor suggestions").await
    }
}

#[async_trait]
impl CallbackSink for ApiService {
    async fn submit_callback(&self, request: &CallbackRequest) -> Result<CallbackResponse> {
        let url = format!("{}/submit_callback", self.api_base.trim_end_matches('/'));
        let body = encode_pairs(&request.form_fields());

        debug!(
            vendor_phone = %request.vendor_phone,
            url = %url,
            "Submitting callback request"
        );

        let response = self.api.send(self.api.post_form(&url, body)).await?;
        let status = response.status();
        let body = response.bytes().await?;

        // Validation and storage failures come back as 4xx/5xx with a JSON
        // message, so the body is parsed regardless of status.
        match serde_json::from_slice::<CallbackResponse>(&body) {
            Ok(reply) => Ok(reply),
            Err(e) if status.is_success() => {
                let body_str = String::from_utf8_lossy(&body);
                error!(
                    error = %e,
                    body = %body_str,
                    "Failed to parse callback response"
                );
                Err(Error::from(e))
            }
            Err(_) => {
                error!(
                    status = status.as_u16(),
                    url = %url,
                    "Callback endpoint returned an error without a message"
                );
                Err(Error::Status(status.as_u16()))
            }
        }
    }
}

#[async_trait]
impl ReverseGeocoder for ApiService {
    async fn reverse(&self, position: Coordinates) -> Result<GeocodeAddress> {
        let lat = position.latitude.to_string();
        let lon = position.longitude.to_string();
        let url = with_query(
            &self.geocoder_base,
            "/reverse",
            &[("format", "json"), ("lat", lat.as_str()), ("lon", lon.as_str())],
        );
        let response: ReverseGeocodeResponse =
            Self::get_json(&self.geocoder, &url, "reverse geocode").await?;
        Ok(response.address)
    }
}
