#![deny(missing_docs)]

//! # DodoPayments API
//!
//! An asynchronous interface to the DodoPayments REST API
//!
//! ## Current functionality
//!  - Checkout sessions
//!  - Payments, refunds and disputes
//!  - Subscriptions, plan changes and on demand charges
//!  - License keys and activations
//!  - Customers, portal sessions and wallets
//!  - Products, addons, brands and discounts
//!  - Usage meters and event ingestion
//!  - Payouts
//!  - Webhook endpoints and signature verification
//!
//! ```no_run
//! # async fn run() -> Result<(), dodopayments::api::error::Error> {
//! use dodopayments::DodoPayments;
//! use dodopayments::api::config::{ClientOptions, Environment};
//! use dodopayments::api::types::payment::ListPaymentsParams;
//!
//! let client = DodoPayments::new(
//!     ClientOptions::builder()
//!         .api_key("sk_test_...")
//!         .environment(Environment::TestMode)
//!         .build(),
//! )?;
//! let page = client
//!     .payments()
//!     .list(&ListPaymentsParams::builder().page_size(10).build())
//!     .await?;
//! println!("{} payments", page.items.len());
//! # Ok(())
//! # }
//! ```

use log::debug;
use reqwest::header::HeaderMap;

use crate::api::addons::Addons;
use crate::api::brands::Brands;
use crate::api::checkout_sessions::CheckoutSessions;
use crate::api::config::ClientOptions;
use crate::api::customers::Customers;
use crate::api::discounts::Discounts;
use crate::api::disputes::Disputes;
use crate::api::error::{Error, WebhookError};
use crate::api::license_key_instances::LicenseKeyInstances;
use crate::api::license_keys::LicenseKeys;
use crate::api::licenses::Licenses;
use crate::api::meters::Meters;
use crate::api::misc::Misc;
use crate::api::payments::Payments;
use crate::api::payouts::Payouts;
use crate::api::products::Products;
use crate::api::refunds::Refunds;
use crate::api::subscriptions::Subscriptions;
use crate::api::types::webhook_event::WebhookPayload;
use crate::api::usage_events::UsageEvents;
use crate::api::webhook::Webhook;
use crate::api::webhooks::Webhooks;
use crate::api::DodoAPI;

/// Module for authenticated API communication
pub mod api;

/// Client for the DodoPayments API
#[derive(Debug, Clone)]
pub struct DodoPayments {
    api: DodoAPI,
}

impl DodoPayments {
    /// Creates a client from explicit options
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        Ok(DodoPayments {
            api: DodoAPI::new(&options)?,
        })
    }

    /// Creates a client configured through `DODO_PAYMENTS_*` environment variables
    pub fn from_env() -> Result<Self, Error> {
        DodoPayments::new(ClientOptions::from_env()?)
    }

    /// Checkout sessions
    pub fn checkout_sessions(&self) -> CheckoutSessions<'_> {
        CheckoutSessions::new(&self.api)
    }

    /// Payments
    pub fn payments(&self) -> Payments<'_> {
        Payments::new(&self.api)
    }

    /// Subscriptions
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(&self.api)
    }

    /// License activation
    pub fn licenses(&self) -> Licenses<'_> {
        Licenses::new(&self.api)
    }

    /// License keys
    pub fn license_keys(&self) -> LicenseKeys<'_> {
        LicenseKeys::new(&self.api)
    }

    /// License key instances
    pub fn license_key_instances(&self) -> LicenseKeyInstances<'_> {
        LicenseKeyInstances::new(&self.api)
    }

    /// Customers
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(&self.api)
    }

    /// Refunds
    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(&self.api)
    }

    /// Disputes
    pub fn disputes(&self) -> Disputes<'_> {
        Disputes::new(&self.api)
    }

    /// Payouts
    pub fn payouts(&self) -> Payouts<'_> {
        Payouts::new(&self.api)
    }

    /// Products
    pub fn products(&self) -> Products<'_> {
        Products::new(&self.api)
    }

    /// Discounts
    pub fn discounts(&self) -> Discounts<'_> {
        Discounts::new(&self.api)
    }

    /// Addons
    pub fn addons(&self) -> Addons<'_> {
        Addons::new(&self.api)
    }

    /// Brands
    pub fn brands(&self) -> Brands<'_> {
        Brands::new(&self.api)
    }

    /// Usage meters
    pub fn meters(&self) -> Meters<'_> {
        Meters::new(&self.api)
    }

    /// Usage events
    pub fn usage_events(&self) -> UsageEvents<'_> {
        UsageEvents::new(&self.api)
    }

    /// Webhook endpoints
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(&self.api)
    }

    /// Miscellaneous endpoints
    pub fn misc(&self) -> Misc<'_> {
        Misc::new(&self.api)
    }

    /// Verifies a webhook delivery with the configured key and parses it
    pub fn unwrap_webhook(&self, headers: &HeaderMap, body: &str) -> Result<WebhookPayload, Error> {
        let key = self
            .api
            .webhook_key
            .as_deref()
            .ok_or(WebhookError::MissingKey)?;
        Webhook::new(key)?.verify(headers, body)?;
        self.unsafe_unwrap_webhook(body)
    }

    /// Parses a webhook body without checking its signature
    pub fn unsafe_unwrap_webhook(&self, body: &str) -> Result<WebhookPayload, Error> {
        let payload: WebhookPayload = serde_json::from_str(body)?;
        debug!("Webhook {:?} for {}", payload.type_field, payload.business_id);
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::DodoPayments;
    use crate::api::config::ClientOptions;
    use crate::api::error::{Error, WebhookError};
    use crate::api::types::common::IntentStatus;
    use crate::api::types::dispute::{DisputeStage, DisputeStatus};
    use crate::api::types::license_key::LicenseKeyStatus;
    use crate::api::types::subscription::SubscriptionStatus;
    use crate::api::types::webhook_event::{WebhookData, WebhookEventType};
    use crate::api::webhook::{Webhook, WEBHOOK_ID, WEBHOOK_SIGNATURE, WEBHOOK_TIMESTAMP};
    use chrono::Utc;
    use reqwest::header::{HeaderMap, HeaderValue};
    use serde_json::json;

    const SECRET: &str = "whsec_c2VjcmV0LWtleS1mb3ItdGVzdHM=";

    fn client(webhook_key: Option<&str>) -> DodoPayments {
        let options = ClientOptions::builder()
            .api_key("test_key")
            .base_url("http://127.0.0.1:9")
            .maybe_webhook_key(webhook_key)
            .build();
        DodoPayments::new(options).unwrap()
    }

    fn refund_body() -> String {
        json!({
            "business_id": "bus_1",
            "type": "refund.succeeded",
            "timestamp": "2025-01-01T00:00:00Z",
            "data": {
                "payload_type": "Refund",
                "refund_id": "ref_1",
                "business_id": "bus_1",
                "created_at": "2025-01-01T00:00:00Z",
                "is_partial": false,
                "payment_id": "pay_1",
                "status": "succeeded"
            }
        })
        .to_string()
    }

    fn signed_headers(body: &str) -> HeaderMap {
        let now = Utc::now().timestamp();
        let signature = Webhook::new(SECRET).unwrap().sign("msg_1", now, body);
        let mut headers = HeaderMap::new();
        headers.insert(WEBHOOK_ID, HeaderValue::from_static("msg_1"));
        headers.insert(
            WEBHOOK_TIMESTAMP,
            HeaderValue::from_str(&now.to_string()).unwrap(),
        );
        headers.insert(WEBHOOK_SIGNATURE, HeaderValue::from_str(&signature).unwrap());
        headers
    }

    #[test]
    fn unwrap_verified_refund() {
        let body = refund_body();
        let payload = client(Some(SECRET))
            .unwrap_webhook(&signed_headers(&body), &body)
            .unwrap();
        assert_eq!(payload.type_field, WebhookEventType::RefundSucceeded);
        match payload.data {
            WebhookData::Refund(refund) => assert_eq!(refund.refund_id, "ref_1"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unwrap_rejects_forged_body() {
        let body = refund_body();
        let headers = signed_headers(&body);
        let forged = body.replace("ref_1", "ref_2");
        let err = client(Some(SECRET))
            .unwrap_webhook(&headers, &forged)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Webhook(WebhookError::SignatureMismatch)
        ));
    }

    #[test]
    fn unwrap_without_key() {
        let body = refund_body();
        let err = client(None)
            .unwrap_webhook(&signed_headers(&body), &body)
            .unwrap_err();
        assert!(matches!(err, Error::Webhook(WebhookError::MissingKey)));
    }

    #[test]
    fn unsafe_unwrap_keeps_unknown_event_type() {
        let body = refund_body().replace("refund.succeeded", "refund.reversed");
        let payload = client(None).unsafe_unwrap_webhook(&body).unwrap();
        assert_eq!(
            payload.type_field,
            WebhookEventType::Unknown("refund.reversed".to_string())
        );
    }

    fn event_body(type_field: &str, data: serde_json::Value) -> String {
        json!({
            "business_id": "bus_1",
            "type": type_field,
            "timestamp": "2025-01-01T00:00:00Z",
            "data": data
        })
        .to_string()
    }

    #[test]
    fn unsafe_unwrap_payment() {
        let body = event_body(
            "payment.succeeded",
            json!({
                "payload_type": "Payment",
                "payment_id": "pay_1",
                "business_id": "bus_1",
                "billing": {"country": "US"},
                "created_at": "2025-01-01T00:00:00Z",
                "customer": {"customer_id": "cus_1", "email": "a@b.c", "name": "Ann"},
                "disputes": null,
                "refunds": null,
                "settlement_amount": 1000,
                "total_amount": 1000,
                "status": "succeeded"
            }),
        );
        let payload = client(None).unsafe_unwrap_webhook(&body).unwrap();
        assert_eq!(payload.type_field, WebhookEventType::PaymentSucceeded);
        match payload.data {
            WebhookData::Payment(payment) => {
                assert_eq!(payment.payment_id, "pay_1");
                assert_eq!(payment.status, Some(IntentStatus::Succeeded));
                assert!(payment.refunds.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unsafe_unwrap_subscription() {
        let body = event_body(
            "subscription.active",
            json!({
                "payload_type": "Subscription",
                "subscription_id": "sub_1",
                "billing": {"country": "US"},
                "cancel_at_next_billing_date": false,
                "created_at": "2025-01-01T00:00:00Z",
                "currency": "USD",
                "customer": {"customer_id": "cus_1", "email": "a@b.c", "name": "Ann"},
                "next_billing_date": "2025-02-01T00:00:00Z",
                "on_demand": false,
                "payment_frequency_count": 1,
                "payment_frequency_interval": "Month",
                "previous_billing_date": "2025-01-01T00:00:00Z",
                "product_id": "pdt_1",
                "quantity": 1,
                "recurring_pre_tax_amount": 999,
                "status": "active",
                "subscription_period_count": 1,
                "subscription_period_interval": "Year",
                "tax_inclusive": false,
                "trial_period_days": 0
            }),
        );
        let payload = client(None).unsafe_unwrap_webhook(&body).unwrap();
        assert_eq!(payload.type_field, WebhookEventType::SubscriptionActive);
        match payload.data {
            WebhookData::Subscription(sub) => {
                assert_eq!(sub.subscription_id, "sub_1");
                assert_eq!(sub.status, SubscriptionStatus::Active);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unsafe_unwrap_dispute() {
        let body = event_body(
            "dispute.opened",
            json!({
                "payload_type": "Dispute",
                "dispute_id": "dsp_1",
                "amount": "10.00",
                "business_id": "bus_1",
                "created_at": "2025-01-01T00:00:00Z",
                "currency": "USD",
                "dispute_stage": "pre_dispute",
                "dispute_status": "dispute_opened",
                "payment_id": "pay_1"
            }),
        );
        let payload = client(None).unsafe_unwrap_webhook(&body).unwrap();
        assert_eq!(payload.type_field, WebhookEventType::DisputeOpened);
        match payload.data {
            WebhookData::Dispute(dispute) => {
                assert_eq!(dispute.dispute_stage, DisputeStage::PreDispute);
                assert_eq!(dispute.dispute_status, DisputeStatus::DisputeOpened);
                assert_eq!(dispute.remarks, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unsafe_unwrap_license_key() {
        let body = event_body(
            "license_key.created",
            json!({
                "payload_type": "LicenseKey",
                "id": "lic_1",
                "business_id": "bus_1",
                "created_at": "2025-01-01T00:00:00Z",
                "customer_id": "cus_1",
                "instances_count": 0,
                "key": "KEY-1",
                "payment_id": "pay_1",
                "product_id": "pdt_1",
                "status": "active",
                "activations_limit": 3
            }),
        );
        let payload = client(None).unsafe_unwrap_webhook(&body).unwrap();
        assert_eq!(payload.type_field, WebhookEventType::LicenseKeyCreated);
        match payload.data {
            WebhookData::LicenseKey(key) => {
                assert_eq!(key.key, "KEY-1");
                assert_eq!(key.status, LicenseKeyStatus::Active);
                assert_eq!(key.activations_limit, Some(3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
