use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::dispute::Dispute;
use crate::api::types::license_key::LicenseKey;
use crate::api::types::payment::Payment;
use crate::api::types::refund::Refund;
use crate::api::types::subscription::Subscription;

/// Event types delivered to webhook endpoints
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "payment.succeeded")]
    PaymentSucceeded,
    #[serde(rename = "payment.failed")]
    PaymentFailed,
    #[serde(rename = "payment.processing")]
    PaymentProcessing,
    #[serde(rename = "payment.cancelled")]
    PaymentCancelled,
    #[serde(rename = "refund.succeeded")]
    RefundSucceeded,
    #[serde(rename = "refund.failed")]
    RefundFailed,
    #[serde(rename = "dispute.opened")]
    DisputeOpened,
    #[serde(rename = "dispute.expired")]
    DisputeExpired,
    #[serde(rename = "dispute.accepted")]
    DisputeAccepted,
    #[serde(rename = "dispute.cancelled")]
    DisputeCancelled,
    #[serde(rename = "dispute.challenged")]
    DisputeChallenged,
    #[serde(rename = "dispute.won")]
    DisputeWon,
    #[serde(rename = "dispute.lost")]
    DisputeLost,
    #[serde(rename = "subscription.active")]
    SubscriptionActive,
    #[serde(rename = "subscription.renewed")]
    SubscriptionRenewed,
    #[serde(rename = "subscription.on_hold")]
    SubscriptionOnHold,
    #[serde(rename = "subscription.cancelled")]
    SubscriptionCancelled,
    #[serde(rename = "subscription.failed")]
    SubscriptionFailed,
    #[serde(rename = "subscription.expired")]
    SubscriptionExpired,
    #[serde(rename = "subscription.plan_changed")]
    SubscriptionPlanChanged,
    #[serde(rename = "license_key.created")]
    LicenseKeyCreated,
    #[serde(untagged)]
    Unknown(String),
}

/// Resource carried by a webhook, tagged by `payload_type`
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "payload_type")]
pub enum WebhookData {
    Payment(Box<Payment>),
    Subscription(Box<Subscription>),
    Refund(Refund),
    Dispute(Dispute),
    LicenseKey(LicenseKey),
}

/// Parsed webhook body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Business the event belongs to
    pub business_id: String,
    /// Event type
    #[serde(rename = "type")]
    pub type_field: WebhookEventType,
    /// Time the event occurred
    pub timestamp: DateTime<Utc>,
    /// Resource snapshot
    pub data: WebhookData,
}
