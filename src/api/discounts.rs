use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::discount::{
    CreateDiscountParams, Discount, DiscountType, ListDiscountsParams, UpdateDiscountParams,
};
use crate::api::utils::{check_page, require_id};
use crate::api::DodoAPI;

/// Percentage discounts are expressed in basis points
const MAX_BASIS_POINTS: i64 = 10_000;

fn check_amount(amount: i64, kind: Option<&DiscountType>) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidParams("discount amount must be positive".to_string()));
    }
    if matches!(kind, Some(DiscountType::Percentage)) && amount > MAX_BASIS_POINTS {
        return Err(Error::InvalidParams(format!(
            "percentage discount must not exceed {} basis points",
            MAX_BASIS_POINTS
        )));
    }
    Ok(())
}

/// Discount codes
#[derive(Debug, Clone, Copy)]
pub struct Discounts<'a> {
    api: &'a DodoAPI,
}

impl<'a> Discounts<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Discounts { api }
    }

    /// Creates a discount, the API picks a code when none is given
    pub async fn create(&self, params: &CreateDiscountParams) -> Result<Discount, Error> {
        check_amount(params.amount, Some(&params.type_field))?;
        let rb = self.api.request(Method::POST, &["discounts"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a discount
    pub async fn retrieve(&self, discount_id: &str) -> Result<Discount, Error> {
        let id = require_id("discount_id", discount_id)?;
        let rb = self.api.request(Method::GET, &["discounts", id])?;
        self.api.send(rb).await
    }

    /// Updates a discount
    pub async fn update(
        &self,
        discount_id: &str,
        params: &UpdateDiscountParams,
    ) -> Result<Discount, Error> {
        let id = require_id("discount_id", discount_id)?;
        if let Some(amount) = params.amount {
            check_amount(amount, params.type_field.as_ref())?;
        }
        let rb = self
            .api
            .request(Method::PATCH, &["discounts", id])?
            .json(params);
        self.api.send(rb).await
    }

    /// Returns one page of discounts
    pub async fn list(
        &self,
        params: &ListDiscountsParams,
    ) -> Result<ListResponse<Discount>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["discounts"])?.query(params);
        self.api.send(rb).await
    }

    /// Deletes a discount
    pub async fn delete(&self, discount_id: &str) -> Result<(), Error> {
        let id = require_id("discount_id", discount_id)?;
        let rb = self.api.request(Method::DELETE, &["discounts", id])?;
        self.api.send_empty(rb).await
    }
}
