use bon::Builder;
use serde::{Deserialize, Serialize};

/// Review state of a brand
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BrandVerificationStatus {
    Success,
    Fail,
    Review,
    Hold,
    #[serde(untagged)]
    Unknown(String),
}

/// Brand object
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: String,
    pub business_id: String,
    pub enabled: bool,
    pub statement_descriptor: String,
    pub verification_enabled: bool,
    pub verification_status: BrandVerificationStatus,
    pub description: Option<String>,
    pub image: Option<String>,
    pub name: Option<String>,
    pub reason_for_hold: Option<String>,
    pub support_email: Option<String>,
    pub url: Option<String>,
}

/// Parameters of `POST /brands`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateBrandParams {
    /// Description
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Text on the customer's card statement
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Support contact
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// Website
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Parameters of `PATCH /brands/{id}`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct UpdateBrandParams {
    /// Image uploaded through the image endpoint
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Display name
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Text on the customer's card statement
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Support contact
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
}
