use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::refund::{CreateRefundParams, ListRefundsParams, Refund, RefundListItem};
use crate::api::utils::{check_page, require_id, require_non_blank};
use crate::api::DodoAPI;

/// Full and partial refunds
#[derive(Debug, Clone, Copy)]
pub struct Refunds<'a> {
    api: &'a DodoAPI,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Refunds { api }
    }

    /// Refunds a payment, fully when `items` is omitted
    pub async fn create(&self, params: &CreateRefundParams) -> Result<Refund, Error> {
        require_non_blank("payment_id", &params.payment_id)?;
        if let Some(items) = &params.items {
            if items.iter().any(|item| matches!(item.amount, Some(amount) if amount <= 0)) {
                return Err(Error::InvalidParams(
                    "refund item amounts must be positive".to_string(),
                ));
            }
        }
        let rb = self.api.request(Method::POST, &["refunds"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a refund
    pub async fn retrieve(&self, refund_id: &str) -> Result<Refund, Error> {
        let id = require_id("refund_id", refund_id)?;
        let rb = self.api.request(Method::GET, &["refunds", id])?;
        self.api.send(rb).await
    }

    /// Returns one page of refunds
    pub async fn list(
        &self,
        params: &ListRefundsParams,
    ) -> Result<ListResponse<RefundListItem>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["refunds"])?.query(params);
        self.api.send(rb).await
    }
}
