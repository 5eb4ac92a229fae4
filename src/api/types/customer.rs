use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::api::types::common::{Currency, Metadata};

/// Customer object
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub phone_number: Option<String>,
}

/// Parameters of `POST /customers`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateCustomerParams {
    /// Email address
    #[builder(into)]
    pub email: String,
    /// Display name
    #[builder(into)]
    pub name: String,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Phone number
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Parameters of `PATCH /customers/{id}`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateCustomerParams {
    /// Replaces the metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// New display name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number, `Some(None)` clears it
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub phone_number: Option<Option<String>>,
}

/// Query of `GET /customers`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListCustomersParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Exact email match
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Link to the hosted customer portal
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPortalSession {
    pub link: String,
}

/// Balance of a customer in one currency
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerWallet {
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub customer_id: String,
    pub updated_at: DateTime<Utc>,
}

/// Response of `GET /customers/{id}/wallets`
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerWallets {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub items: Vec<CustomerWallet>,
    pub total_balance_usd: i64,
}
