use std::fmt;

use log::{debug, error, warn};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::config::{ClientOptions, REDACTED};
use crate::api::error::Error;

/// Module holding the API types
pub mod types;

/// Various API Utils
pub mod utils;

/// Error type
pub mod error;

/// Client configuration
pub mod config;

/// Webhook signature verification
pub mod webhook;

/// Addon Methods
pub mod addons;
/// Brand Methods
pub mod brands;
/// Checkout Session Methods
pub mod checkout_sessions;
/// Customer Methods
pub mod customers;
/// Discount Methods
pub mod discounts;
/// Dispute Methods
pub mod disputes;
/// License Key Instance Methods
pub mod license_key_instances;
/// License Key Methods
pub mod license_keys;
/// License activation Methods
pub mod licenses;
/// Meter Methods
pub mod meters;
/// Miscellaneous Methods
pub mod misc;
/// Payment Methods
pub mod payments;
/// Payout Methods
pub mod payouts;
/// Product Methods
pub mod products;
/// Refund Methods
pub mod refunds;
/// Subscription Methods
pub mod subscriptions;
/// Usage Event Methods
pub mod usage_events;
/// Webhook endpoint Methods
pub mod webhooks;

/// Low level request dispatcher shared by all services
#[derive(Clone)]
pub struct DodoAPI {
    client: Client,
    base_url: Url,
    api_key: String,
    pub(crate) webhook_key: Option<String>,
}

impl fmt::Debug for DodoAPI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DodoAPI")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &REDACTED)
            .field("webhook_key", &self.webhook_key.as_ref().map(|_| REDACTED))
            .finish_non_exhaustive()
    }
}

impl DodoAPI {
    /// Creates a dispatcher from the client options
    pub fn new(options: &ClientOptions) -> Result<Self, Error> {
        if options.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        let mut builder = DodoAPI::build_client();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(DodoAPI {
            client: builder.build()?,
            base_url: options.resolved_base_url()?,
            api_key: options.api_key.clone(),
            webhook_key: options.webhook_key.clone(),
        })
    }

    fn build_client() -> ClientBuilder {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("dodopayments-rust/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Client::builder().default_headers(headers)
    }

    /// Appends percent-encoded path segments to the base URL
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidParams(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Starts an authorized request
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, Error> {
        let url = self.endpoint(segments)?;
        Ok(self.client.request(method, url).bearer_auth(&self.api_key))
    }

    /// Sends the request and decodes the JSON body
    pub(crate) async fn send<T: DeserializeOwned>(&self, rb: RequestBuilder) -> Result<T, Error> {
        let text = self.execute(rb).await?;
        match serde_json::from_str::<T>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                error!("{:?}", e);
                debug!("{}", text);
                Err(Error::Json(e))
            }
        }
    }

    /// Sends the request and discards the body
    pub(crate) async fn send_empty(&self, rb: RequestBuilder) -> Result<(), Error> {
        self.execute(rb).await.map(|_| ())
    }

    async fn execute(&self, rb: RequestBuilder) -> Result<String, Error> {
        let request = rb.build()?;
        debug!("{} {}", request.method(), request.url());
        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("{:?}", e);
                return Err(Error::Http(e));
            }
        };
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(text)
        } else {
            warn!("{} result: {}", status, text);
            Err(Error::from_response(status.as_u16(), &text))
        }
    }
}

#[cfg(test)]
pub(crate) fn test_api(uri: &str) -> DodoAPI {
    let options = ClientOptions::builder()
        .api_key("test_key")
        .base_url(uri)
        .webhook_key("whsec_c2VjcmV0LWtleS1mb3ItdGVzdHM=")
        .build();
    DodoAPI::new(&options).unwrap()
}
