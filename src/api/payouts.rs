use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::payout::{ListPayoutsParams, Payout};
use crate::api::utils::check_page;
use crate::api::DodoAPI;

/// Payouts to the business bank account
#[derive(Debug, Clone, Copy)]
pub struct Payouts<'a> {
    api: &'a DodoAPI,
}

impl<'a> Payouts<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Payouts { api }
    }

    /// Returns one page of payouts
    pub async fn list(&self, params: &ListPayoutsParams) -> Result<ListResponse<Payout>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["payouts"])?.query(params);
        self.api.send(rb).await
    }
}
