use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::TimeInterval;

/// License key state
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseKeyStatus {
    Active,
    Expired,
    Disabled,
    #[serde(untagged)]
    Unknown(String),
}

/// License key object
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseKey {
    pub id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: String,
    pub instances_count: i32,
    pub key: String,
    pub payment_id: String,
    pub product_id: String,
    pub status: LicenseKeyStatus,
    pub activations_limit: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub subscription_id: Option<String>,
}

/// Validity of a license key after issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseKeyDuration {
    /// Number of intervals
    pub count: i32,
    /// Interval unit
    pub interval: TimeInterval,
}

/// Activated instance of a license key
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseKeyInstance {
    pub id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub license_key_id: String,
    pub name: String,
}

/// Parameters of `PATCH /license_keys/{id}`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateLicenseKeyParams {
    /// Activation limit, `Some(None)` removes the limit
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub activations_limit: Option<Option<i32>>,
    /// Disable or re-enable the key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Expiry, `Some(None)` makes the key perpetual
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

/// Query of `GET /license_keys`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListLicenseKeysParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Filter by customer
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Filter by product
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LicenseKeyStatus>,
}

/// Parameters of `PATCH /license_key_instances/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateLicenseKeyInstanceParams {
    /// New instance name
    #[builder(into)]
    pub name: String,
}

/// Query of `GET /license_key_instances`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListLicenseKeyInstancesParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Filter by license key
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_id: Option<String>,
}

/// Parameters of `POST /licenses/activate`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ActivateLicenseParams {
    /// License key to activate
    #[builder(into)]
    pub license_key: String,
    /// Name of the new instance, e.g. a device name
    #[builder(into)]
    pub name: String,
}

/// Parameters of `POST /licenses/deactivate`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct DeactivateLicenseParams {
    /// License key
    #[builder(into)]
    pub license_key: String,
    /// Instance to release
    #[builder(into)]
    pub license_key_instance_id: String,
}

/// Parameters of `POST /licenses/validate`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ValidateLicenseParams {
    /// License key
    #[builder(into)]
    pub license_key: String,
    /// Also check this instance is active
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key_instance_id: Option<String>,
}

/// Response of `POST /licenses/validate`
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateLicenseResponse {
    pub valid: bool,
}
