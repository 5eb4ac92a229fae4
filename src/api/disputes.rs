use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::dispute::{DisputeListItem, GetDispute, ListDisputesParams};
use crate::api::utils::{check_page, require_id};
use crate::api::DodoAPI;

/// Disputes raised against payments
#[derive(Debug, Clone, Copy)]
pub struct Disputes<'a> {
    api: &'a DodoAPI,
}

impl<'a> Disputes<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Disputes { api }
    }

    /// Returns a dispute with customer details
    pub async fn retrieve(&self, dispute_id: &str) -> Result<GetDispute, Error> {
        let id = require_id("dispute_id", dispute_id)?;
        let rb = self.api.request(Method::GET, &["disputes", id])?;
        self.api.send(rb).await
    }

    /// Returns one page of disputes
    pub async fn list(
        &self,
        params: &ListDisputesParams,
    ) -> Result<ListResponse<DisputeListItem>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["disputes"])?.query(params);
        self.api.send(rb).await
    }
}
