use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::subscription::{
    ChangePlanParams, ChargeSubscriptionParams, ChargeSubscriptionResponse,
    CreateSubscriptionParams, CreateSubscriptionResponse, ListSubscriptionsParams, Subscription,
    UpdateSubscriptionParams, UsageHistoryEntry, UsageHistoryParams,
};
use crate::api::utils::{check_page, require_id};
use crate::api::DodoAPI;

/// Recurring subscriptions
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    api: &'a DodoAPI,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Subscriptions { api }
    }

    /// Creates a subscription
    pub async fn create(
        &self,
        params: &CreateSubscriptionParams,
    ) -> Result<CreateSubscriptionResponse, Error> {
        if params.quantity < 1 {
            return Err(Error::InvalidParams("quantity must be at least 1".to_string()));
        }
        let rb = self.api.request(Method::POST, &["subscriptions"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a subscription
    pub async fn retrieve(&self, subscription_id: &str) -> Result<Subscription, Error> {
        let id = require_id("subscription_id", subscription_id)?;
        let rb = self.api.request(Method::GET, &["subscriptions", id])?;
        self.api.send(rb).await
    }

    /// Updates a subscription
    pub async fn update(
        &self,
        subscription_id: &str,
        params: &UpdateSubscriptionParams,
    ) -> Result<Subscription, Error> {
        let id = require_id("subscription_id", subscription_id)?;
        let rb = self
            .api
            .request(Method::PATCH, &["subscriptions", id])?
            .json(params);
        self.api.send(rb).await
    }

    /// Returns one page of subscriptions
    pub async fn list(
        &self,
        params: &ListSubscriptionsParams,
    ) -> Result<ListResponse<Subscription>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["subscriptions"])?.query(params);
        self.api.send(rb).await
    }

    /// Moves a subscription to another product
    pub async fn change_plan(
        &self,
        subscription_id: &str,
        params: &ChangePlanParams,
    ) -> Result<(), Error> {
        let id = require_id("subscription_id", subscription_id)?;
        let rb = self
            .api
            .request(Method::POST, &["subscriptions", id, "change-plan"])?
            .json(params);
        self.api.send_empty(rb).await
    }

    /// Charges an on demand subscription
    pub async fn charge(
        &self,
        subscription_id: &str,
        params: &ChargeSubscriptionParams,
    ) -> Result<ChargeSubscriptionResponse, Error> {
        let id = require_id("subscription_id", subscription_id)?;
        if params.product_price <= 0 {
            return Err(Error::InvalidParams("product_price must be positive".to_string()));
        }
        let rb = self
            .api
            .request(Method::POST, &["subscriptions", id, "charge"])?
            .json(params);
        self.api.send(rb).await
    }

    /// Returns metered usage per billing period
    pub async fn usage_history(
        &self,
        subscription_id: &str,
        params: &UsageHistoryParams,
    ) -> Result<ListResponse<UsageHistoryEntry>, Error> {
        let id = require_id("subscription_id", subscription_id)?;
        check_page(params.page_size, params.page_number)?;
        let rb = self
            .api
            .request(Method::GET, &["subscriptions", id, "usage-history"])?
            .query(params);
        self.api.send(rb).await
    }
}
