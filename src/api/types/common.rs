use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// Free form key/value pairs attached to most resources
pub type Metadata = HashMap<String, String>;

/// ISO 3166-1 alpha-2 country code
pub type CountryCode = String;

/// Generic list envelope returned by the list endpoints
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Page contents
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        ListResponse { items: Vec::new() }
    }
}

/// ISO 4217 currency code
///
/// Codes not listed here are kept verbatim in [`Currency::Unknown`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aed,
    Ars,
    Aud,
    Bdt,
    Brl,
    Cad,
    Chf,
    Clp,
    Cny,
    Cop,
    Czk,
    Dkk,
    Egp,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Idr,
    Ils,
    Inr,
    Jpy,
    Kes,
    Krw,
    Mxn,
    Myr,
    Ngn,
    Nok,
    Nzd,
    Pen,
    Php,
    Pkr,
    Pln,
    Qar,
    Ron,
    Sar,
    Sek,
    Sgd,
    Thb,
    Try,
    Twd,
    Uah,
    Usd,
    Vnd,
    Zar,
    #[serde(untagged)]
    Unknown(String),
}

/// Billing address of a customer
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct BillingAddress {
    /// Two letter country code
    #[builder(into)]
    pub country: CountryCode,
    /// City name
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Street address including house number
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Postal code
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

/// Billing and subscription period unit
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInterval {
    Day,
    Week,
    Month,
    Year,
}

/// Tax category of a product or addon
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    DigitalProducts,
    Saas,
    EBook,
    Edtech,
    #[serde(untagged)]
    Unknown(String),
}

/// Payment intent status
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    Succeeded,
    Failed,
    Cancelled,
    Processing,
    RequiresCustomerAction,
    RequiresMerchantAction,
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresCapture,
    PartiallyCaptured,
    PartiallyCapturedAndCapturable,
    #[serde(untagged)]
    Unknown(String),
}

/// Payment methods a checkout may offer
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    Credit,
    Debit,
    UpiCollect,
    UpiIntent,
    ApplePay,
    Cashapp,
    GooglePay,
    Multibanco,
    BancontactCard,
    Eps,
    Ideal,
    Przelewy24,
    Affirm,
    Klarna,
    Sepa,
    Ach,
    AmazonPay,
    AfterpayClearpay,
    #[serde(untagged)]
    Unknown(String),
}

/// Reference an existing customer by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachExistingCustomer {
    /// Customer id
    pub customer_id: String,
}

/// Create a customer inline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct NewCustomer {
    /// Email address
    #[builder(into)]
    pub email: String,
    /// Display name
    #[builder(into)]
    pub name: String,
    /// Phone number
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Force creating a new customer even if the email is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_new_customer: Option<bool>,
}

/// Customer reference used by payments, subscriptions and checkouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRequest {
    /// Existing customer
    Attach(AttachExistingCustomer),
    /// New customer
    New(NewCustomer),
}

impl CustomerRequest {
    /// Attaches an existing customer
    pub fn existing(customer_id: impl Into<String>) -> Self {
        CustomerRequest::Attach(AttachExistingCustomer {
            customer_id: customer_id.into(),
        })
    }

    /// Creates a customer with the given email and name
    pub fn new_customer(email: impl Into<String>, name: impl Into<String>) -> Self {
        CustomerRequest::New(NewCustomer::builder().email(email).name(name).build())
    }
}

/// Customer details embedded in other resources
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerLimitedDetails {
    pub customer_id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// String, number or boolean scalar, used by event metadata and meter filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Boolean
    Bool(bool),
    /// Number
    Number(f64),
    /// String
    Text(String),
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Number(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(value as f64)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

/// Image upload target returned by the image endpoints
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUpload {
    /// Presigned URL the image should be PUT to
    pub url: String,
    /// Id of the image once uploaded
    #[serde(default)]
    pub image_id: Option<String>,
}
