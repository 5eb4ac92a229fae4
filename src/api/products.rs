use log::info;
use reqwest::Method;
use serde::Serialize;

use crate::api::error::Error;
use crate::api::types::common::{ImageUpload, ListResponse};
use crate::api::types::product::{
    CreateProductParams, ListProductsParams, Price, Product, ProductListItem, UpdateProductParams,
};
use crate::api::utils::{check_page, require_id};
use crate::api::DodoAPI;

#[derive(Serialize)]
struct ImageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    force_update: Option<bool>,
}

/// Zero is a valid price, free products are sold at 0
fn check_price(price: &Price) -> Result<(), Error> {
    let amount = match price {
        Price::OneTimePrice(p) => p.price,
        Price::RecurringPrice(p) => p.price,
        Price::UsageBasedPrice(p) => p.fixed_price,
    };
    if amount < 0 {
        return Err(Error::InvalidParams("price must not be negative".to_string()));
    }
    Ok(())
}

/// Product catalogue
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    api: &'a DodoAPI,
}

impl<'a> Products<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Products { api }
    }

    /// Creates a product
    pub async fn create(&self, params: &CreateProductParams) -> Result<Product, Error> {
        check_price(&params.price)?;
        let rb = self.api.request(Method::POST, &["products"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a product
    pub async fn retrieve(&self, product_id: &str) -> Result<Product, Error> {
        let id = require_id("product_id", product_id)?;
        let rb = self.api.request(Method::GET, &["products", id])?;
        self.api.send(rb).await
    }

    /// Updates a product. The API answers with an empty body.
    pub async fn update(&self, product_id: &str, params: &UpdateProductParams) -> Result<(), Error> {
        let id = require_id("product_id", product_id)?;
        if let Some(price) = &params.price {
            check_price(price)?;
        }
        let rb = self
            .api
            .request(Method::PATCH, &["products", id])?
            .json(params);
        self.api.send_empty(rb).await
    }

    /// Returns one page of products
    pub async fn list(
        &self,
        params: &ListProductsParams,
    ) -> Result<ListResponse<ProductListItem>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["products"])?.query(params);
        self.api.send(rb).await
    }

    /// Archives a product so it can no longer be bought
    pub async fn archive(&self, product_id: &str) -> Result<(), Error> {
        let id = require_id("product_id", product_id)?;
        let rb = self.api.request(Method::DELETE, &["products", id])?;
        self.api.send_empty(rb).await?;
        info!("Archived product {}", id);
        Ok(())
    }

    /// Restores an archived product
    pub async fn unarchive(&self, product_id: &str) -> Result<(), Error> {
        let id = require_id("product_id", product_id)?;
        let rb = self
            .api
            .request(Method::POST, &["products", id, "unarchive"])?;
        self.api.send_empty(rb).await
    }

    /// Requests a presigned upload URL for the product image.
    ///
    /// Upload the file to the returned `url` with a plain PUT.
    pub async fn update_image(
        &self,
        product_id: &str,
        force_update: Option<bool>,
    ) -> Result<ImageUpload, Error> {
        let id = require_id("product_id", product_id)?;
        let rb = self
            .api
            .request(Method::PUT, &["products", id, "images"])?
            .query(&ImageQuery { force_update });
        self.api.send(rb).await
    }
}

#[cfg(test)]
mod tests {
    use super::Products;
    use crate::api::error::Error;
    use crate::api::test_api;
    use crate::api::types::common::{Currency, TaxCategory, TimeInterval};
    use crate::api::types::product::{
        CreateProductParams, ListProductsParams, OneTimePrice, Price, RecurringPrice,
        UpdateProductParams,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_recurring_product() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/products"))
            .and(body_json(json!({
                "name": "Pro",
                "price": {
                    "type": "recurring_price",
                    "currency": "USD",
                    "price": 1999,
                    "payment_frequency_count": 1,
                    "payment_frequency_interval": "Month",
                    "subscription_period_count": 1,
                    "subscription_period_interval": "Year",
                    "discount": 0.0,
                    "purchasing_power_parity": false
                },
                "tax_category": "saas"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "product_id": "pdt_1",
                "business_id": "bus_1",
                "brand_id": "brd_1",
                "created_at": "2025-01-01T00:00:00Z",
                "is_recurring": true,
                "license_key_enabled": false,
                "metadata": {},
                "price": {
                    "type": "recurring_price",
                    "currency": "USD",
                    "price": 1999,
                    "payment_frequency_count": 1,
                    "payment_frequency_interval": "Month",
                    "subscription_period_count": 1,
                    "subscription_period_interval": "Year",
                    "discount": 0,
                    "purchasing_power_parity": false
                },
                "tax_category": "saas",
                "updated_at": "2025-01-01T00:00:00Z",
                "addons": null,
                "name": "Pro"
            })))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let price = RecurringPrice::builder()
            .currency(Currency::Usd)
            .price(1999)
            .payment_frequency_count(1)
            .payment_frequency_interval(TimeInterval::Month)
            .subscription_period_count(1)
            .subscription_period_interval(TimeInterval::Year)
            .build();
        let params = CreateProductParams::builder()
            .name("Pro")
            .price(Price::RecurringPrice(price))
            .tax_category(TaxCategory::Saas)
            .build();
        let product = Products::new(&api).create(&params).await.unwrap();
        assert!(product.price.is_recurring());
        assert!(product.addons.is_empty());
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let api = test_api("http://127.0.0.1:9");
        let price = OneTimePrice::builder()
            .currency(Currency::Eur)
            .price(-1)
            .build();
        let params = UpdateProductParams::builder()
            .price(Price::OneTimePrice(price))
            .build();
        let err = Products::new(&api).update("pdt_1", &params).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[tokio::test]
    async fn update_clears_description() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/products/pdt_1"))
            .and(body_json(json!({"description": null, "name": "Pro 2"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = UpdateProductParams::builder()
            .description(None)
            .name("Pro 2")
            .build();
        Products::new(&api).update("pdt_1", &params).await.unwrap();
    }

    #[tokio::test]
    async fn archive_and_unarchive() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/products/pdt_1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/products/pdt_1/unarchive"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let products = Products::new(&api);
        products.archive("pdt_1").await.unwrap();
        products.unarchive("pdt_1").await.unwrap();
    }

    #[tokio::test]
    async fn update_image_forces() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/products/pdt_1/images"))
            .and(query_param("force_update", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "url": "https://uploads.example.com/put",
                "image_id": "img_1"
            })))
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let upload = Products::new(&api)
            .update_image("pdt_1", Some(true))
            .await
            .unwrap();
        assert_eq!(upload.image_id.as_deref(), Some("img_1"));
    }

    #[tokio::test]
    async fn list_archived() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(query_param("archived", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": null})))
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = ListProductsParams::builder().archived(true).build();
        let page = Products::new(&api).list(&params).await.unwrap();
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn zero_price_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/products/pdt_1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let price = OneTimePrice::builder()
            .currency(Currency::Eur)
            .price(0)
            .build();
        let params = UpdateProductParams::builder()
            .price(Price::OneTimePrice(price))
            .build();
        Products::new(&api).update("pdt_1", &params).await.unwrap();
    }
}
