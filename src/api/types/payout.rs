use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::Currency;

/// Payout state
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    NotInitiated,
    InProgress,
    OnHold,
    Failed,
    Success,
    #[serde(untagged)]
    Unknown(String),
}

/// Payout to the merchant
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub payout_id: String,
    pub amount: i64,
    pub business_id: String,
    pub chargebacks: i64,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub fee: i64,
    pub payment_method: String,
    pub refunds: i64,
    pub status: PayoutStatus,
    pub tax: i64,
    pub updated_at: DateTime<Utc>,
    pub name: Option<String>,
    pub payout_document_url: Option<String>,
    pub remarks: Option<String>,
}

/// Query of `GET /payouts`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListPayoutsParams {
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
}
