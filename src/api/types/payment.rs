use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::api::types::common::{
    BillingAddress, Currency, CustomerLimitedDetails, CustomerRequest, IntentStatus, Metadata,
    PaymentMethodType,
};
use crate::api::types::dispute::Dispute;
use crate::api::types::refund::RefundListItem;

/// Product line of a one time payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct OneTimeProductCartItem {
    /// Product id
    #[builder(into)]
    pub product_id: String,
    /// Quantity
    pub quantity: i32,
    /// Amount in the smallest currency unit, for pay what you want products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Parameters of `POST /payments`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreatePaymentParams {
    /// Billing address
    pub billing: BillingAddress,
    /// Customer to charge
    pub customer: CustomerRequest,
    /// Purchased products
    pub product_cart: Vec<OneTimeProductCartItem>,
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
}

/// Response of `POST /payments`
#[allow(missing_docs)]
#[serde_as]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    pub payment_id: String,
    pub client_secret: String,
    pub customer: CustomerLimitedDetails,
    #[serde(default)]
    pub metadata: Metadata,
    pub total_amount: i64,
    pub discount_id: Option<String>,
    pub expires_on: Option<DateTime<Utc>>,
    pub payment_link: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub product_cart: Vec<OneTimeProductCartItem>,
}

/// Product line of a stored payment
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCartItem {
    pub product_id: String,
    pub quantity: i32,
}

/// Full payment object
#[allow(missing_docs)]
#[serde_as]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub business_id: String,
    pub brand_id: Option<String>,
    pub billing: BillingAddress,
    pub created_at: DateTime<Utc>,
    pub currency: Option<Currency>,
    pub customer: CustomerLimitedDetails,
    #[serde(default)]
    pub digital_products_delivered: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub disputes: Vec<Dispute>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub refunds: Vec<RefundListItem>,
    pub settlement_amount: i64,
    pub settlement_currency: Option<Currency>,
    pub total_amount: i64,
    pub card_issuing_country: Option<String>,
    pub card_last_four: Option<String>,
    pub card_network: Option<String>,
    pub card_type: Option<String>,
    pub checkout_session_id: Option<String>,
    pub discount_id: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub invoice_id: Option<String>,
    pub payment_link: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_type: Option<String>,
    pub product_cart: Option<Vec<ProductCartItem>>,
    pub settlement_tax: Option<i64>,
    pub status: Option<IntentStatus>,
    pub subscription_id: Option<String>,
    pub tax: Option<i64>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payment as returned by `GET /payments`
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListItem {
    pub payment_id: String,
    pub brand_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub currency: Option<Currency>,
    pub customer: CustomerLimitedDetails,
    #[serde(default)]
    pub digital_products_delivered: bool,
    #[serde(default)]
    pub metadata: Metadata,
    pub total_amount: i64,
    pub invoice_id: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_type: Option<String>,
    pub status: Option<IntentStatus>,
    pub subscription_id: Option<String>,
}

/// Query of `GET /payments`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListPaymentsParams {
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
    pub status: Option<IntentStatus>,
    /// Filter by subscription
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

/// Line items of a payment
#[allow(missing_docs)]
#[serde_as]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLineItems {
    pub currency: Option<Currency>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub items: Vec<PaymentLineItem>,
}

/// Single line of a payment
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLineItem {
    pub amount: i64,
    pub items_id: String,
    pub refundable_amount: i64,
    pub tax: i64,
    pub description: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::common::CustomerRequest;
    use serde_json::json;

    #[test]
    fn create_params_only_write_set_fields() {
        let params = CreatePaymentParams::builder()
            .billing(BillingAddress::builder().country("IN").build())
            .customer(CustomerRequest::existing("cus_1"))
            .product_cart(vec![OneTimeProductCartItem::builder()
                .product_id("pdt_1")
                .quantity(2)
                .build()])
            .payment_link(true)
            .build();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "billing": {"country": "IN"},
                "customer": {"customer_id": "cus_1"},
                "product_cart": [{"product_id": "pdt_1", "quantity": 2}],
                "payment_link": true
            })
        );
    }

    #[test]
    fn payment_parses_with_nulls() {
        let payment: Payment = serde_json::from_value(json!({
            "payment_id": "pay_1",
            "business_id": "bus_1",
            "brand_id": null,
            "billing": {"country": "US", "city": "SF", "state": "CA", "street": "1 Main", "zipcode": "94107"},
            "created_at": "2025-01-01T10:00:00Z",
            "currency": "USD",
            "customer": {"customer_id": "cus_1", "email": "a@b.c", "name": "Ann"},
            "digital_products_delivered": false,
            "disputes": null,
            "metadata": {"order": "42"},
            "refunds": [],
            "settlement_amount": 1000,
            "settlement_currency": "USD",
            "total_amount": 1100,
            "status": "succeeded",
            "tax": 100,
            "some_new_field": 1
        }))
        .unwrap();
        assert_eq!(payment.status, Some(IntentStatus::Succeeded));
        assert!(payment.disputes.is_empty());
        assert_eq!(payment.metadata.get("order").map(String::as_str), Some("42"));
        assert_eq!(payment.billing.city.as_deref(), Some("SF"));
        assert_eq!(payment.tax, Some(100));
        assert!(payment.product_cart.is_none());
    }

    #[test]
    fn payment_missing_required_field_fails() {
        let result = serde_json::from_value::<Payment>(json!({"payment_id": "pay_1"}));
        assert!(result.is_err());
    }

    #[test]
    fn list_params_query_shape() {
        let params = ListPaymentsParams::builder()
            .page_size(10)
            .status(IntentStatus::Failed)
            .build();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"page_size": 10, "status": "failed"})
        );
    }
}
