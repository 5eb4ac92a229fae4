use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::webhook::{
    CreateWebhookParams, ListWebhooksParams, UpdateWebhookParams, WebhookDetails, WebhookList,
    WebhookSecret,
};
use crate::api::utils::{require_id, require_non_blank, MAX_PAGE_SIZE};
use crate::api::DodoAPI;

/// Webhook endpoints registered with the business
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    api: &'a DodoAPI,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Webhooks { api }
    }

    /// Registers an endpoint
    pub async fn create(&self, params: &CreateWebhookParams) -> Result<WebhookDetails, Error> {
        require_non_blank("url", &params.url)?;
        let rb = self.api.request(Method::POST, &["webhooks"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns an endpoint
    pub async fn retrieve(&self, webhook_id: &str) -> Result<WebhookDetails, Error> {
        let id = require_id("webhook_id", webhook_id)?;
        let rb = self.api.request(Method::GET, &["webhooks", id])?;
        self.api.send(rb).await
    }

    /// Updates an endpoint
    pub async fn update(
        &self,
        webhook_id: &str,
        params: &UpdateWebhookParams,
    ) -> Result<WebhookDetails, Error> {
        let id = require_id("webhook_id", webhook_id)?;
        let rb = self
            .api
            .request(Method::PATCH, &["webhooks", id])?
            .json(params);
        self.api.send(rb).await
    }

    /// Returns one cursor page of endpoints.
    ///
    /// Pass `iterator` from the previous page to continue.
    pub async fn list(&self, params: &ListWebhooksParams) -> Result<WebhookList, Error> {
        if let Some(limit) = params.limit {
            if !(1..=MAX_PAGE_SIZE).contains(&limit) {
                return Err(Error::InvalidParams(format!(
                    "limit must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE, limit
                )));
            }
        }
        let rb = self.api.request(Method::GET, &["webhooks"])?.query(params);
        self.api.send(rb).await
    }

    /// Removes an endpoint
    pub async fn delete(&self, webhook_id: &str) -> Result<(), Error> {
        let id = require_id("webhook_id", webhook_id)?;
        let rb = self.api.request(Method::DELETE, &["webhooks", id])?;
        self.api.send_empty(rb).await
    }

    /// Returns the signing secret of an endpoint
    pub async fn secret(&self, webhook_id: &str) -> Result<WebhookSecret, Error> {
        let id = require_id("webhook_id", webhook_id)?;
        let rb = self.api.request(Method::GET, &["webhooks", id, "secret"])?;
        self.api.send(rb).await
    }
}
