use std::collections::HashMap;
use rquest::{Client, Response, RequestBuilder};
use rquest_util::Emulation;
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use crate::error::{Error, Result};
use tracing::{error, debug};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Thin wrapper over `rquest::Client` that applies a fixed header set to
/// every request and maps throttling responses to dedicated errors.
pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(headers: &HashMap<String, String>, emulation: Emulation) -> Result<Self> {
        let mut header_map = HeaderMap::new();

        for (key, value) in headers.iter() {
            match (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(header_name), Ok(header_value)) => {
                    header_map.insert(header_name, header_value);
                    debug!(
                        header_key = key,
                        header_value = value,
                        "Adding header"
                    );
                }
                _ => {
                    error!(
                        header_key = key,
                        header_value = value,
                        "Invalid header value"
                    );
                    return Err(Error::InvalidHeader(key.clone()));
                }
            }
        }

        debug!(
            emulation = ?emulation,
            "Creating client with emulation"
        );

        let client = Client::builder()
            .emulation(emulation)
            .build()?;

        Ok(Self {
            client,
            headers: header_map,
        })
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        debug!(url = url, "Creating GET request");
        self.with_headers(self.client.get(url))
    }

    /// POST with a pre-encoded `application/x-www-form-urlencoded` body.
    pub fn post_form(&self, url: &str, body: String) -> RequestBuilder {
        debug!(url = url, body_len = body.len(), "Creating form POST request");
        self.with_headers(self.client.post(url))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }
        request
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => {
                debug!("Rate limit exceeded");
                Err(Error::RateLimit)
            },
            StatusCode::FORBIDDEN => {
                debug!(
                    url = %response.url(),
                    "Received 403 Forbidden"
                );
                Err(Error::Forbidden)
            },
            _ => Ok(response)
        }
    }
}
