use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::license_key::{LicenseKey, ListLicenseKeysParams, UpdateLicenseKeyParams};
use crate::api::utils::{check_page, require_id};
use crate::api::DodoAPI;

/// Issued license keys
#[derive(Debug, Clone, Copy)]
pub struct LicenseKeys<'a> {
    api: &'a DodoAPI,
}

impl<'a> LicenseKeys<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        LicenseKeys { api }
    }

    /// Returns a license key
    pub async fn retrieve(&self, id: &str) -> Result<LicenseKey, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::GET, &["license_keys", id])?;
        self.api.send(rb).await
    }

    /// Updates limits, expiry or the disabled flag
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateLicenseKeyParams,
    ) -> Result<LicenseKey, Error> {
        let id = require_id("id", id)?;
        if let Some(Some(limit)) = params.activations_limit {
            if limit < 0 {
                return Err(Error::InvalidParams(
                    "activations_limit must not be negative".to_string(),
                ));
            }
        }
        let rb = self
            .api
            .request(Method::PATCH, &["license_keys", id])?
            .json(params);
        self.api.send(rb).await
    }

    /// Returns one page of license keys
    pub async fn list(
        &self,
        params: &ListLicenseKeysParams,
    ) -> Result<ListResponse<LicenseKey>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["license_keys"])?.query(params);
        self.api.send(rb).await
    }
}

#[cfg(test)]
mod tests {
    use super::LicenseKeys;
    use crate::api::test_api;
    use crate::api::types::license_key::{
        LicenseKeyStatus, ListLicenseKeysParams, UpdateLicenseKeyParams,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn key_json(status: &str) -> serde_json::Value {
        json!({
            "id": "lic_1",
            "business_id": "bus_1",
            "created_at": "2025-01-01T00:00:00Z",
            "customer_id": "cus_1",
            "instances_count": 0,
            "key": "KEY-1",
            "payment_id": "pay_1",
            "product_id": "pdt_1",
            "status": status
        })
    }

    #[tokio::test]
    async fn update_disables_key() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/license_keys/lic_1"))
            .and(body_json(json!({"disabled": true, "activations_limit": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(key_json("disabled")))
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = UpdateLicenseKeyParams::builder()
            .disabled(true)
            .activations_limit(None)
            .build();
        let key = LicenseKeys::new(&api).update("lic_1", &params).await.unwrap();
        assert_eq!(key.status, LicenseKeyStatus::Disabled);
    }

    #[tokio::test]
    async fn list_by_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/license_keys"))
            .and(query_param("status", "active"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": [key_json("active")]})),
            )
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = ListLicenseKeysParams::builder()
            .status(LicenseKeyStatus::Active)
            .build();
        let page = LicenseKeys::new(&api).list(&params).await.unwrap();
        assert_eq!(page.items[0].key, "KEY-1");
    }
}
