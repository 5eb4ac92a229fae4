use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::addon::{Addon, CreateAddonParams, ListAddonsParams, UpdateAddonParams};
use crate::api::types::common::{ImageUpload, ListResponse};
use crate::api::utils::{check_page, require_id};
use crate::api::DodoAPI;

/// Subscription add-ons
#[derive(Debug, Clone, Copy)]
pub struct Addons<'a> {
    api: &'a DodoAPI,
}

impl<'a> Addons<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Addons { api }
    }

    /// Creates an addon
    pub async fn create(&self, params: &CreateAddonParams) -> Result<Addon, Error> {
        if params.price < 0 {
            return Err(Error::InvalidParams("price must not be negative".to_string()));
        }
        let rb = self.api.request(Method::POST, &["addons"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns an addon
    pub async fn retrieve(&self, id: &str) -> Result<Addon, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::GET, &["addons", id])?;
        self.api.send(rb).await
    }

    /// Updates an addon
    pub async fn update(&self, id: &str, params: &UpdateAddonParams) -> Result<Addon, Error> {
        let id = require_id("id", id)?;
        if matches!(params.price, Some(price) if price < 0) {
            return Err(Error::InvalidParams("price must not be negative".to_string()));
        }
        let rb = self.api.request(Method::PATCH, &["addons", id])?.json(params);
        self.api.send(rb).await
    }

    /// Returns one page of addons
    pub async fn list(&self, params: &ListAddonsParams) -> Result<ListResponse<Addon>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["addons"])?.query(params);
        self.api.send(rb).await
    }

    /// Requests a presigned upload URL for the addon image
    pub async fn update_image(&self, id: &str) -> Result<ImageUpload, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::PUT, &["addons", id, "images"])?;
        self.api.send(rb).await
    }
}
