use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::checkout_session::{
    CheckoutSession, CheckoutSessionStatus, CreateCheckoutSessionParams,
};
use crate::api::utils::{require_id, require_non_empty};
use crate::api::DodoAPI;

/// Hosted checkout sessions
#[derive(Debug, Clone, Copy)]
pub struct CheckoutSessions<'a> {
    api: &'a DodoAPI,
}

impl<'a> CheckoutSessions<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        CheckoutSessions { api }
    }

    /// Creates a checkout session and returns its URL
    pub async fn create(
        &self,
        params: &CreateCheckoutSessionParams,
    ) -> Result<CheckoutSession, Error> {
        require_non_empty("product_cart", &params.product_cart)?;
        if params.product_cart.iter().any(|item| item.quantity < 1) {
            return Err(Error::InvalidParams(
                "product_cart quantities must be at least 1".to_string(),
            ));
        }
        let rb = self.api.request(Method::POST, &["checkouts"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns the state of a checkout session
    pub async fn retrieve(&self, session_id: &str) -> Result<CheckoutSessionStatus, Error> {
        let id = require_id("session_id", session_id)?;
        let rb = self.api.request(Method::GET, &["checkouts", id])?;
        self.api.send(rb).await
    }
}
