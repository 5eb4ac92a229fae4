use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::api::types::common::{Currency, Metadata, TaxCategory, TimeInterval};
use crate::api::types::license_key::LicenseKeyDuration;

/// Price of a product, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Price {
    /// Single payment
    OneTimePrice(OneTimePrice),
    /// Fixed recurring payment
    RecurringPrice(RecurringPrice),
    /// Recurring payment plus metered usage
    UsageBasedPrice(UsageBasedPrice),
}

impl Price {
    /// Currency of the price
    pub fn currency(&self) -> &Currency {
        match self {
            Price::OneTimePrice(p) => &p.currency,
            Price::RecurringPrice(p) => &p.currency,
            Price::UsageBasedPrice(p) => &p.currency,
        }
    }

    /// Whether the price renews
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Price::OneTimePrice(_))
    }
}

/// One time price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct OneTimePrice {
    /// Currency
    pub currency: Currency,
    /// Price in the smallest currency unit
    pub price: i64,
    /// Discount percentage, 0 to 100
    #[builder(default)]
    #[serde(default)]
    pub discount: f64,
    /// Adjust the price by purchasing power parity
    #[builder(default)]
    #[serde(default)]
    pub purchasing_power_parity: bool,
    /// Let the customer choose the amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_what_you_want: Option<bool>,
    /// Suggested amount for pay what you want
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<i64>,
    /// Whether `price` includes tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
}

/// Recurring price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct RecurringPrice {
    /// Currency
    pub currency: Currency,
    /// Price per billing period in the smallest currency unit
    pub price: i64,
    /// Number of intervals between charges
    pub payment_frequency_count: i32,
    /// Interval between charges
    pub payment_frequency_interval: TimeInterval,
    /// Number of intervals the subscription lasts
    pub subscription_period_count: i32,
    /// Subscription length unit
    pub subscription_period_interval: TimeInterval,
    /// Discount percentage, 0 to 100
    #[builder(default)]
    #[serde(default)]
    pub discount: f64,
    /// Adjust the price by purchasing power parity
    #[builder(default)]
    #[serde(default)]
    pub purchasing_power_parity: bool,
    /// Whether `price` includes tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
    /// Free trial length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<i32>,
}

/// Recurring base fee plus metered usage
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct UsageBasedPrice {
    /// Currency
    pub currency: Currency,
    /// Fixed fee per billing period
    pub fixed_price: i64,
    /// Number of intervals between charges
    pub payment_frequency_count: i32,
    /// Interval between charges
    pub payment_frequency_interval: TimeInterval,
    /// Number of intervals the subscription lasts
    pub subscription_period_count: i32,
    /// Subscription length unit
    pub subscription_period_interval: TimeInterval,
    /// Meters billed with this price
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub meters: Vec<MeterPrice>,
    /// Discount percentage, 0 to 100
    #[builder(default)]
    #[serde(default)]
    pub discount: f64,
    /// Adjust the price by purchasing power parity
    #[builder(default)]
    #[serde(default)]
    pub purchasing_power_parity: bool,
    /// Whether `fixed_price` includes tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
}

/// Per unit pricing of a meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct MeterPrice {
    /// Meter id
    #[builder(into)]
    pub meter_id: String,
    /// Price per unit as a decimal string
    #[builder(into)]
    pub price_per_unit: String,
    /// Units included before charging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_threshold: Option<i64>,
    /// Description shown on invoices
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit label
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<String>,
    /// Display name
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// File delivered after purchase
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalProductFile {
    pub file_id: String,
    pub file_name: String,
    pub url: String,
}

/// What the customer receives after paying
#[serde_as]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct DigitalProductDelivery {
    /// Link the customer is sent to
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Delivery instructions
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Uploaded files, read only
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default, skip_serializing)]
    pub files: Vec<DigitalProductFile>,
}

/// Product object
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub business_id: String,
    pub brand_id: String,
    pub created_at: DateTime<Utc>,
    pub is_recurring: bool,
    pub license_key_enabled: bool,
    #[serde(default)]
    pub metadata: Metadata,
    pub price: Price,
    pub tax_category: TaxCategory,
    pub updated_at: DateTime<Utc>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub addons: Vec<String>,
    pub description: Option<String>,
    pub digital_product_delivery: Option<DigitalProductDelivery>,
    pub image: Option<String>,
    pub license_key_activation_message: Option<String>,
    pub license_key_activations_limit: Option<i32>,
    pub license_key_duration: Option<LicenseKeyDuration>,
    pub name: Option<String>,
}

/// Product entry of `GET /products`
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListItem {
    pub product_id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub is_recurring: bool,
    #[serde(default)]
    pub metadata: Metadata,
    pub tax_category: TaxCategory,
    pub updated_at: DateTime<Utc>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub price_detail: Option<Price>,
    pub tax_inclusive: Option<bool>,
}

/// Parameters of `POST /products`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateProductParams {
    /// Display name
    #[builder(into)]
    pub name: String,
    /// Pricing
    pub price: Price,
    /// Tax category
    pub tax_category: TaxCategory,
    /// Addon ids offered with the product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<String>>,
    /// Brand, defaults to the primary brand
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    /// Description
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Delivery after purchase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_product_delivery: Option<DigitalProductDelivery>,
    /// Message shown on license activation
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_activation_message: Option<String>,
    /// Maximum activations per key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_activations_limit: Option<i32>,
    /// Validity of issued keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_duration: Option<LicenseKeyDuration>,
    /// Issue a license key per purchase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_enabled: Option<bool>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Parameters of `PATCH /products/{id}`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateProductParams {
    /// Replaces the addon list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<String>>,
    /// Moves the product to another brand
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    /// Description, `Some(None)` clears it
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    /// Delivery after purchase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_product_delivery: Option<DigitalProductDelivery>,
    /// Image uploaded through the image endpoint
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Message shown on license activation
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_activation_message: Option<String>,
    /// Activations per key, `Some(None)` removes the limit
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub license_key_activations_limit: Option<Option<i32>>,
    /// Validity of issued keys, `Some(None)` makes them perpetual
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub license_key_duration: Option<Option<LicenseKeyDuration>>,
    /// Issue a license key per purchase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_enabled: Option<bool>,
    /// Replaces the metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Display name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pricing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Tax category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<TaxCategory>,
}

/// Query of `GET /products`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListProductsParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// List archived products instead of active ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Filter by brand
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    /// Only recurring or only one time products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
}
