use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::CustomerLimitedDetails;

/// Lifecycle state of a dispute
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    DisputeOpened,
    DisputeExpired,
    DisputeAccepted,
    DisputeCancelled,
    DisputeChallenged,
    DisputeWon,
    DisputeLost,
    #[serde(untagged)]
    Unknown(String),
}

/// Escalation stage of a dispute
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStage {
    PreDispute,
    Dispute,
    PreArbitration,
    #[serde(untagged)]
    Unknown(String),
}

/// Dispute raised against a payment
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub dispute_id: String,
    /// Disputed amount as a decimal string
    pub amount: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub currency: String,
    pub dispute_stage: DisputeStage,
    pub dispute_status: DisputeStatus,
    pub payment_id: String,
    pub remarks: Option<String>,
}

/// Dispute with customer details, as returned by `GET /disputes/{id}`
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDispute {
    #[serde(flatten)]
    pub dispute: Dispute,
    pub customer: CustomerLimitedDetails,
    pub reason: Option<String>,
}

/// Dispute entry of `GET /disputes`
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeListItem {
    pub dispute_id: String,
    pub amount: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub currency: String,
    pub dispute_stage: DisputeStage,
    pub dispute_status: DisputeStatus,
    pub payment_id: String,
}

/// Query of `GET /disputes`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListDisputesParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Created at or after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    /// Created at or before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
    /// Filter by customer
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Filter by stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispute_stage: Option<DisputeStage>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispute_status: Option<DisputeStatus>,
}
