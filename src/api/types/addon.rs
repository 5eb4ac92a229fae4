use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::{Currency, TaxCategory};

/// Addon object
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub name: String,
    pub price: i64,
    pub tax_category: TaxCategory,
    pub updated_at: DateTime<Utc>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Parameters of `POST /addons`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateAddonParams {
    /// Currency
    pub currency: Currency,
    /// Display name
    #[builder(into)]
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    /// Tax category
    pub tax_category: TaxCategory,
    /// Description
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters of `PATCH /addons/{id}`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateAddonParams {
    /// Currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Description, `Some(None)` clears it
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    /// Image uploaded through the image endpoint
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Display name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Price in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Tax category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<TaxCategory>,
}

/// Query of `GET /addons`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListAddonsParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
}
