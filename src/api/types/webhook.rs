use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::api::types::common::Metadata;
use crate::api::types::webhook_event::WebhookEventType;

/// Registered webhook endpoint
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookDetails {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub disabled: Option<bool>,
    /// Empty means every event type is delivered
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub filter_types: Vec<WebhookEventType>,
    pub rate_limit: Option<i32>,
}

/// Parameters of `POST /webhooks`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateWebhookParams {
    /// Receiver URL
    #[builder(into)]
    pub url: String,
    /// Description
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Create the endpoint disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Event types to deliver, all when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_types: Option<Vec<WebhookEventType>>,
    /// Extra headers sent with each delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Deduplicates retried create calls
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Deliveries per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i32>,
}

/// Parameters of `PATCH /webhooks/{id}`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateWebhookParams {
    /// Description
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disable or re-enable delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Replaces the event type filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_types: Option<Vec<WebhookEventType>>,
    /// Replaces the metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Deliveries per second, `Some(None)` removes the limit
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub rate_limit: Option<Option<i32>>,
    /// Receiver URL
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Query of `GET /webhooks`
///
/// The iterator is handed back by the previous page, it is not walked automatically.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListWebhooksParams {
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Position returned by the previous page
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterator: Option<String>,
}

/// Response of `GET /webhooks`
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookList {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub data: Vec<WebhookDetails>,
    pub done: bool,
    pub iterator: Option<String>,
    pub prev_iterator: Option<String>,
}

/// Signing secret of an endpoint
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookSecret {
    pub secret: String,
}
