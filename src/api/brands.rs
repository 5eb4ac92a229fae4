use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::brand::{Brand, CreateBrandParams, UpdateBrandParams};
use crate::api::types::common::{ImageUpload, ListResponse};
use crate::api::utils::require_id;
use crate::api::DodoAPI;

/// Brands a business sells under
#[derive(Debug, Clone, Copy)]
pub struct Brands<'a> {
    api: &'a DodoAPI,
}

impl<'a> Brands<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Brands { api }
    }

    /// Creates a brand
    pub async fn create(&self, params: &CreateBrandParams) -> Result<Brand, Error> {
        let rb = self.api.request(Method::POST, &["brands"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a brand
    pub async fn retrieve(&self, id: &str) -> Result<Brand, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::GET, &["brands", id])?;
        self.api.send(rb).await
    }

    /// Updates a brand
    pub async fn update(&self, id: &str, params: &UpdateBrandParams) -> Result<Brand, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::PATCH, &["brands", id])?.json(params);
        self.api.send(rb).await
    }

    /// Returns every brand of the business
    pub async fn list(&self) -> Result<ListResponse<Brand>, Error> {
        let rb = self.api.request(Method::GET, &["brands"])?;
        self.api.send(rb).await
    }

    /// Requests a presigned upload URL for the brand image
    pub async fn update_image(&self, id: &str) -> Result<ImageUpload, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::PUT, &["brands", id, "images"])?;
        self.api.send(rb).await
    }
}

#[cfg(test)]
mod tests {
    use super::Brands;
    use crate::api::test_api;
    use crate::api::types::brand::{BrandVerificationStatus, CreateBrandParams, UpdateBrandParams};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn brand_json(name: &str) -> serde_json::Value {
        json!({
            "brand_id": "brd_1",
            "business_id": "bus_1",
            "enabled": true,
            "statement_descriptor": "ACME",
            "verification_enabled": true,
            "verification_status": "Success",
            "name": name
        })
    }

    #[tokio::test]
    async fn update_brand() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/brands/brd_1"))
            .and(body_json(json!({"name": "Acme Tools"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(brand_json("Acme Tools")))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = UpdateBrandParams::builder().name("Acme Tools").build();
        let brand = Brands::new(&api).update("brd_1", &params).await.unwrap();
        assert_eq!(brand.verification_status, BrandVerificationStatus::Success);
        assert_eq!(brand.name.as_deref(), Some("Acme Tools"));
    }

    #[tokio::test]
    async fn list_brands() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/brands"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": [brand_json("Acme")]})),
            )
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let brands = Brands::new(&api).list().await.unwrap();
        assert_eq!(brands.items.len(), 1);
    }

    #[tokio::test]
    async fn create_brand() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/brands"))
            .and(body_json(json!({
                "name": "Acme",
                "statement_descriptor": "ACME",
                "support_email": "help@acme.test"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(brand_json("Acme")))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = CreateBrandParams::builder()
            .name("Acme")
            .statement_descriptor("ACME")
            .support_email("help@acme.test")
            .build();
        let brand = Brands::new(&api).create(&params).await.unwrap();
        assert_eq!(brand.brand_id, "brd_1");
        assert!(brand.verification_enabled);
    }

    #[tokio::test]
    async fn update_image_returns_upload_url() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/brands/brd_1/images"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "url": "https://uploads.example.com/brand",
                "image_id": "img_9"
            })))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let upload = Brands::new(&api).update_image("brd_1").await.unwrap();
        assert_eq!(upload.url, "https://uploads.example.com/brand");
        assert_eq!(upload.image_id.as_deref(), Some("img_9"));
    }
}
