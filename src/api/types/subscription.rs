use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::api::types::common::{
    BillingAddress, Currency, CustomerLimitedDetails, CustomerRequest, Metadata,
    PaymentMethodType, TimeInterval,
};

/// Subscription state
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Pending,
    Active,
    OnHold,
    Cancelled,
    Failed,
    Expired,
    #[serde(untagged)]
    Unknown(String),
}

/// How a plan change is billed
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBillingMode {
    ProratedImmediately,
    FullImmediately,
    DifferenceImmediately,
}

/// Addon line of a subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct AttachAddon {
    /// Addon id
    #[builder(into)]
    pub addon_id: String,
    /// Quantity
    pub quantity: i32,
}

/// Meter attached to a usage based subscription
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionMeter {
    pub meter_id: String,
    pub name: String,
    pub measurement_unit: String,
    pub currency: Currency,
    pub free_threshold: i64,
    /// Price per unit as a decimal string
    pub price_per_unit: String,
    pub description: Option<String>,
}

/// Subscription object
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub subscription_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub addons: Vec<AttachAddon>,
    pub billing: BillingAddress,
    pub cancel_at_next_billing_date: bool,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub customer: CustomerLimitedDetails,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub meters: Vec<SubscriptionMeter>,
    pub next_billing_date: DateTime<Utc>,
    pub on_demand: bool,
    pub payment_frequency_count: i32,
    pub payment_frequency_interval: TimeInterval,
    pub previous_billing_date: DateTime<Utc>,
    pub product_id: String,
    pub quantity: i32,
    pub recurring_pre_tax_amount: i64,
    pub status: SubscriptionStatus,
    pub subscription_period_count: i32,
    pub subscription_period_interval: TimeInterval,
    pub tax_inclusive: bool,
    pub trial_period_days: i32,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub discount_cycles_remaining: Option<i32>,
    pub discount_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub tax_id: Option<String>,
}

/// Mandate settings of an on demand subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct OnDemandSubscription {
    /// Only authorize a mandate, do not charge now
    pub mandate_only: bool,
    /// Charge customer fees for adaptive currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_currency_fees_inclusive: Option<bool>,
    /// Currency of `product_price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_currency: Option<Currency>,
    /// Description of the initial charge
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    /// Initial charge in the smallest currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price: Option<i64>,
}

/// Parameters of `POST /subscriptions`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateSubscriptionParams {
    /// Billing address
    pub billing: BillingAddress,
    /// Customer to subscribe
    pub customer: CustomerRequest,
    /// Subscription product
    #[builder(into)]
    pub product_id: String,
    /// Quantity
    pub quantity: i32,
    /// Addons bought with the subscription
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<AttachAddon>>,
    /// Restrict the payment methods shown at checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_payment_method_types: Option<Vec<PaymentMethodType>>,
    /// Charge in this currency instead of the product currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_currency: Option<Currency>,
    /// Discount code to apply
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// On demand billing settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand: Option<OnDemandSubscription>,
    /// Whether to generate a hosted payment link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<bool>,
    /// Where to redirect after payment
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Offer the customer's saved payment methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_saved_payment_methods: Option<bool>,
    /// Tax id of the customer
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Overrides the product's trial period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<i32>,
}

/// Response of `POST /subscriptions`
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionResponse {
    pub subscription_id: String,
    pub payment_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub addons: Vec<AttachAddon>,
    pub customer: CustomerLimitedDetails,
    #[serde(default)]
    pub metadata: Metadata,
    pub recurring_pre_tax_amount: i64,
    pub client_secret: Option<String>,
    pub discount_id: Option<String>,
    pub expires_on: Option<DateTime<Utc>>,
    pub payment_link: Option<String>,
}

/// Parameters of `PATCH /subscriptions/{id}`
///
/// Double options distinguish "leave unchanged" (`None`) from "clear" (`Some(None)`).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateSubscriptionParams {
    /// New billing address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,
    /// Cancel when the current period ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_at_next_billing_date: Option<bool>,
    /// Stop on demand charges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_on_demand: Option<DisableOnDemand>,
    /// Replaces the metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Move the next billing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<DateTime<Utc>>,
    /// Force a status, e.g. cancel immediately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Tax id, `Some(None)` clears it
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub tax_id: Option<Option<String>>,
}

/// Date after which on demand charges stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisableOnDemand {
    /// Cutoff timestamp
    pub next_billing_date: DateTime<Utc>,
}

/// Parameters of `POST /subscriptions/{id}/change-plan`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ChangePlanParams {
    /// Target product
    #[builder(into)]
    pub product_id: String,
    /// Billing behaviour of the change
    pub proration_billing_mode: ProrationBillingMode,
    /// Quantity of the new plan
    pub quantity: i32,
    /// Addons of the new plan, replaces existing ones when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<AttachAddon>>,
}

/// Parameters of `POST /subscriptions/{id}/charge`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ChargeSubscriptionParams {
    /// Amount in the smallest currency unit
    pub product_price: i64,
    /// Charge customer fees for adaptive currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptive_currency_fees_inclusive: Option<bool>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Currency of `product_price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_currency: Option<Currency>,
    /// Description of the charge
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
}

/// Response of `POST /subscriptions/{id}/charge`
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeSubscriptionResponse {
    pub payment_id: String,
}

/// Query of `GET /subscriptions`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListSubscriptionsParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Filter by brand
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
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
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
}

/// Query of `GET /subscriptions/{id}/usage-history`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UsageHistoryParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Billing periods ending at or before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Only this meter
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_id: Option<String>,
    /// Billing periods starting at or after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

/// Usage of one billing period
#[allow(missing_docs)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageHistoryEntry {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub meters: Vec<MeterUsage>,
}

/// Usage of one meter inside a billing period
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterUsage {
    pub id: String,
    pub name: String,
    pub currency: Currency,
    pub chargeable_units: String,
    pub consumed_units: String,
    pub free_threshold: i64,
    pub price_per_unit: String,
    pub total_price: i64,
}
