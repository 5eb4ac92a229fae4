use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::payment::{
    CreatePaymentParams, CreatePaymentResponse, ListPaymentsParams, Payment, PaymentLineItems,
    PaymentListItem,
};
use crate::api::utils::{check_page, require_id, require_non_empty};
use crate::api::DodoAPI;

/// One time payments
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    api: &'a DodoAPI,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Payments { api }
    }

    /// Creates a payment and returns the client secret and optional payment link
    pub async fn create(&self, params: &CreatePaymentParams) -> Result<CreatePaymentResponse, Error> {
        require_non_empty("product_cart", &params.product_cart)?;
        let rb = self.api.request(Method::POST, &["payments"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a payment
    pub async fn retrieve(&self, payment_id: &str) -> Result<Payment, Error> {
        let id = require_id("payment_id", payment_id)?;
        let rb = self.api.request(Method::GET, &["payments", id])?;
        self.api.send(rb).await
    }

    /// Returns one page of payments
    pub async fn list(
        &self,
        params: &ListPaymentsParams,
    ) -> Result<ListResponse<PaymentListItem>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["payments"])?.query(params);
        self.api.send(rb).await
    }

    /// Returns the refundable line items of a payment
    pub async fn line_items(&self, payment_id: &str) -> Result<PaymentLineItems, Error> {
        let id = require_id("payment_id", payment_id)?;
        let rb = self
            .api
            .request(Method::GET, &["payments", id, "line-items"])?;
        self.api.send(rb).await
    }
}
