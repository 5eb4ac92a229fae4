use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// Kind of discount
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    #[serde(untagged)]
    Unknown(String),
}

/// Discount object
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub discount_id: String,
    pub business_id: String,
    /// Basis points for percentage discounts, 540 means 5.4%
    pub amount: i64,
    pub code: String,
    pub created_at: DateTime<Utc>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub restricted_to: Vec<String>,
    pub times_used: i64,
    #[serde(rename = "type")]
    pub type_field: DiscountType,
    pub expires_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub subscription_cycles: Option<i32>,
    pub usage_limit: Option<i32>,
}

/// Parameters of `POST /discounts`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateDiscountParams {
    /// Basis points for percentage discounts
    pub amount: i64,
    /// Kind of discount
    #[serde(rename = "type")]
    pub type_field: DiscountType,
    /// Code the customer enters, generated when absent
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Display name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Product ids the discount applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_to: Option<Vec<String>>,
    /// Billing cycles a subscription discount lasts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_cycles: Option<i32>,
    /// Maximum redemptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i32>,
}

/// Parameters of `PATCH /discounts/{id}`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateDiscountParams {
    /// Basis points for percentage discounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// New code
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Expiry, `Some(None)` removes it
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub expires_at: Option<Option<DateTime<Utc>>>,
    /// Display name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces the product restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_to: Option<Vec<String>>,
    /// Billing cycles a subscription discount lasts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_cycles: Option<i32>,
    /// Kind of discount
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_field: Option<DiscountType>,
    /// Maximum redemptions, `Some(None)` removes the limit
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub usage_limit: Option<Option<i32>>,
}

/// Query of `GET /discounts`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListDiscountsParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
}
