/// Types shared by several resources
pub mod common;

/// Addon structures
pub mod addon;

/// Brand structures
pub mod brand;

/// Checkout Session structures
pub mod checkout_session;

/// Customer structures
pub mod customer;

/// Discount structures
pub mod discount;

/// Dispute structures
pub mod dispute;

/// License Key structures
pub mod license_key;

/// Meter structures
pub mod meter;

/// Payment structures
pub mod payment;

/// Payout structures
pub mod payout;

/// Product structures
pub mod product;

/// Refund structures
pub mod refund;

/// Subscription structures
pub mod subscription;

/// Usage Event structures
pub mod usage_event;

/// Webhook endpoint structures
pub mod webhook;

/// Webhook delivery payloads
pub mod webhook_event;
