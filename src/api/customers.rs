use reqwest::Method;
use serde::Serialize;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::customer::{
    CreateCustomerParams, Customer, CustomerPortalSession, CustomerWallets, ListCustomersParams,
    UpdateCustomerParams,
};
use crate::api::utils::{check_page, require_id, require_non_blank};
use crate::api::DodoAPI;

#[derive(Serialize)]
struct PortalQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    send_email: Option<bool>,
}

/// Customers of the business
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    api: &'a DodoAPI,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Customers { api }
    }

    /// Creates a customer
    pub async fn create(&self, params: &CreateCustomerParams) -> Result<Customer, Error> {
        require_non_blank("email", &params.email)?;
        let rb = self.api.request(Method::POST, &["customers"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a customer
    pub async fn retrieve(&self, customer_id: &str) -> Result<Customer, Error> {
        let id = require_id("customer_id", customer_id)?;
        let rb = self.api.request(Method::GET, &["customers", id])?;
        self.api.send(rb).await
    }

    /// Updates name, phone number or metadata
    pub async fn update(
        &self,
        customer_id: &str,
        params: &UpdateCustomerParams,
    ) -> Result<Customer, Error> {
        let id = require_id("customer_id", customer_id)?;
        let rb = self
            .api
            .request(Method::PATCH, &["customers", id])?
            .json(params);
        self.api.send(rb).await
    }

    /// Returns one page of customers, optionally filtered by email
    pub async fn list(
        &self,
        params: &ListCustomersParams,
    ) -> Result<ListResponse<Customer>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["customers"])?.query(params);
        self.api.send(rb).await
    }

    /// Opens a customer portal session.
    ///
    /// With `send_email` set the portal link is also mailed to the customer.
    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        send_email: Option<bool>,
    ) -> Result<CustomerPortalSession, Error> {
        let id = require_id("customer_id", customer_id)?;
        let rb = self
            .api
            .request(
                Method::POST,
                &["customers", id, "customer-portal", "session"],
            )?
            .query(&PortalQuery { send_email });
        self.api.send(rb).await
    }

    /// Returns the credit wallets of a customer
    pub async fn wallets(&self, customer_id: &str) -> Result<CustomerWallets, Error> {
        let id = require_id("customer_id", customer_id)?;
        let rb = self
            .api
            .request(Method::GET, &["customers", id, "wallets"])?;
        self.api.send(rb).await
    }
}

#[cfg(test)]
mod tests {
    use super::Customers;
    use crate::api::error::Error;
    use crate::api::test_api;
    use crate::api::types::common::Currency;
    use crate::api::types::customer::{
        CreateCustomerParams, ListCustomersParams, UpdateCustomerParams,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn customer_json() -> serde_json::Value {
        json!({
            "customer_id": "cus_1",
            "business_id": "bus_1",
            "created_at": "2025-01-01T00:00:00Z",
            "email": "ann@example.com",
            "name": "Ann",
            "phone_number": null
        })
    }

    #[tokio::test]
    async fn create_customer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers"))
            .and(body_json(json!({"email": "ann@example.com", "name": "Ann"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = CreateCustomerParams::builder()
            .email("ann@example.com")
            .name("Ann")
            .build();
        let customer = Customers::new(&api).create(&params).await.unwrap();
        assert_eq!(customer.customer_id, "cus_1");
        assert!(customer.metadata.is_empty());
    }

    #[tokio::test]
    async fn update_clears_phone_number() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/customers/cus_1"))
            .and(body_json(json!({"phone_number": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = UpdateCustomerParams::builder().phone_number(None).build();
        let customer = Customers::new(&api).update("cus_1", &params).await.unwrap();
        assert_eq!(customer.phone_number, None);
    }

    #[tokio::test]
    async fn list_filters_by_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers"))
            .and(query_param("email", "ann@example.com"))
            .and(query_param("page_size", "10"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": [customer_json()]})),
            )
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = ListCustomersParams::builder()
            .email("ann@example.com")
            .page_size(10)
            .build();
        let page = Customers::new(&api).list(&params).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn portal_session_sends_email_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers/cus_1/customer-portal/session"))
            .and(query_param("send_email", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "link": "https://customer.dodopayments.com/portal/abc"
            })))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let session = Customers::new(&api)
            .create_portal_session("cus_1", Some(true))
            .await
            .unwrap();
        assert!(session.link.ends_with("/abc"));
    }

    #[tokio::test]
    async fn wallets_with_null_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/cus_1/wallets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "balance": 500,
                    "created_at": "2025-01-01T00:00:00Z",
                    "currency": "USD",
                    "customer_id": "cus_1",
                    "updated_at": "2025-01-02T00:00:00Z"
                }],
                "total_balance_usd": 500
            })))
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let wallets = Customers::new(&api).wallets("cus_1").await.unwrap();
        assert_eq!(wallets.items[0].currency, Currency::Usd);
        assert_eq!(wallets.total_balance_usd, 500);
    }

    #[tokio::test]
    async fn blank_customer_id_is_rejected() {
        let api = test_api("http://127.0.0.1:9");
        let err = Customers::new(&api).retrieve("").await.unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }
}
