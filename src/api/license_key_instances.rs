use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::license_key::{
    LicenseKeyInstance, ListLicenseKeyInstancesParams, UpdateLicenseKeyInstanceParams,
};
use crate::api::utils::{check_page, require_id, require_non_blank};
use crate::api::DodoAPI;

/// Activated license key instances
#[derive(Debug, Clone, Copy)]
pub struct LicenseKeyInstances<'a> {
    api: &'a DodoAPI,
}

impl<'a> LicenseKeyInstances<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        LicenseKeyInstances { api }
    }

    /// Returns an instance
    pub async fn retrieve(&self, id: &str) -> Result<LicenseKeyInstance, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::GET, &["license_key_instances", id])?;
        self.api.send(rb).await
    }

    /// Renames an instance
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateLicenseKeyInstanceParams,
    ) -> Result<LicenseKeyInstance, Error> {
        let id = require_id("id", id)?;
        require_non_blank("name", &params.name)?;
        let rb = self
            .api
            .request(Method::PATCH, &["license_key_instances", id])?
            .json(params);
        self.api.send(rb).await
    }

    /// Returns one page of instances
    pub async fn list(
        &self,
        params: &ListLicenseKeyInstancesParams,
    ) -> Result<ListResponse<LicenseKeyInstance>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self
            .api
            .request(Method::GET, &["license_key_instances"])?
            .query(params);
        self.api.send(rb).await
    }
}

#[cfg(test)]
mod tests {
    use super::LicenseKeyInstances;
    use crate::api::test_api;
    use crate::api::types::license_key::{
        ListLicenseKeyInstancesParams, UpdateLicenseKeyInstanceParams,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn instance_json(name: &str) -> serde_json::Value {
        json!({
            "id": "lki_1",
            "business_id": "bus_1",
            "created_at": "2025-01-01T00:00:00Z",
            "license_key_id": "lic_1",
            "name": name
        })
    }

    #[tokio::test]
    async fn rename_instance() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/license_key_instances/lki_1"))
            .and(body_json(json!({"name": "work laptop"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("work laptop")))
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = UpdateLicenseKeyInstanceParams::builder()
            .name("work laptop")
            .build();
        let instance = LicenseKeyInstances::new(&api)
            .update("lki_1", &params)
            .await
            .unwrap();
        assert_eq!(instance.name, "work laptop");
    }

    #[tokio::test]
    async fn list_for_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/license_key_instances"))
            .and(query_param("license_key_id", "lic_1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": [instance_json("laptop")]})),
            )
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = ListLicenseKeyInstancesParams::builder()
            .license_key_id("lic_1")
            .build();
        let page = LicenseKeyInstances::new(&api).list(&params).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }
}
