use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::{
    BillingAddress, Currency, CustomerRequest, IntentStatus, Metadata, PaymentMethodType,
};
use crate::api::types::subscription::{AttachAddon, OnDemandSubscription};

/// Product line of a checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct CheckoutProductItem {
    /// Product id
    #[builder(into)]
    pub product_id: String,
    /// Quantity
    pub quantity: i32,
    /// Addons for subscription products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<AttachAddon>>,
    /// Amount for pay what you want products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Look and feel of the hosted checkout
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct CheckoutCustomization {
    /// Show the order details panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_order_details: Option<bool>,
    /// Show the on demand tag next to the price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_on_demand_tag: Option<bool>,
    /// Light or dark theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<CheckoutTheme>,
}

/// Checkout theme
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutTheme {
    Dark,
    Light,
    System,
}

/// Optional checkout behaviours
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct CheckoutFeatureFlags {
    /// Let the customer pick the billing currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_currency_selection: Option<bool>,
    /// Let the customer enter a discount code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_discount_code: Option<bool>,
    /// Let the customer edit the phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_phone_number_collection: Option<bool>,
    /// Let the customer enter a tax id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_tax_id: Option<bool>,
    /// Always create a new customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_create_new_customer: Option<bool>,
}

/// Subscription settings applied when the cart holds a subscription
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct CheckoutSubscriptionData {
    /// On demand billing settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand: Option<OnDemandSubscription>,
    /// Overrides the product's trial period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<i32>,
}

/// Parameters of `POST /checkouts`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateCheckoutSessionParams {
    /// Products in the cart
    pub product_cart: Vec<CheckoutProductItem>,
    /// Restrict the payment methods shown at checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_payment_method_types: Option<Vec<PaymentMethodType>>,
    /// Prefilled billing address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,
    /// Charge in this currency instead of the product currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_currency: Option<Currency>,
    /// Skip the review step when everything is prefilled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    /// Prefilled customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRequest>,
    /// Look and feel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<CheckoutCustomization>,
    /// Discount code to apply
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    /// Optional behaviours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_flags: Option<CheckoutFeatureFlags>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Where to redirect after checkout
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Offer the customer's saved payment methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_saved_payment_methods: Option<bool>,
    /// Subscription settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_data: Option<CheckoutSubscriptionData>,
}

/// Response of `POST /checkouts`
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub checkout_url: String,
}

/// Response of `GET /checkouts/{id}`
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionStatus {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub payment_id: Option<String>,
    pub payment_status: Option<IntentStatus>,
}
