use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::ScalarValue;

/// Ingested usage event
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub event_id: String,
    pub business_id: String,
    pub customer_id: String,
    pub event_name: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: Option<HashMap<String, ScalarValue>>,
}

/// Event submitted to `POST /events/ingest`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct EventInput {
    /// Customer the usage belongs to
    #[builder(into)]
    pub customer_id: String,
    /// Event name meters match on
    #[builder(into)]
    pub event_name: String,
    /// Idempotency key, a random UUID when not given
    #[builder(into, default = uuid::Uuid::new_v4().to_string())]
    pub event_id: String,
    /// Values meters aggregate or filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, ScalarValue>>,
    /// Time of usage, server time when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Body of `POST /events/ingest`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestEventsParams {
    /// Events to record
    pub events: Vec<EventInput>,
}

/// Response of `POST /events/ingest`
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestEventsResponse {
    pub ingested_count: i64,
}

/// Query of `GET /events`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListEventsParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Filter by customer
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Events before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Filter by event name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// Only events counted by this meter
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_id: Option<String>,
    /// Events after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
}
