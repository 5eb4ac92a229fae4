use log::info;
use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::usage_event::{
    IngestEventsParams, IngestEventsResponse, ListEventsParams, UsageEvent,
};
use crate::api::utils::{check_page, require_id, require_non_blank, require_non_empty};
use crate::api::DodoAPI;

/// Largest batch a single ingest call accepts
pub const MAX_INGEST_BATCH: usize = 1000;

/// Metered usage events
#[derive(Debug, Clone, Copy)]
pub struct UsageEvents<'a> {
    api: &'a DodoAPI,
}

impl<'a> UsageEvents<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        UsageEvents { api }
    }

    /// Sends a batch of events. Events sharing an `event_id` are deduplicated server side.
    pub async fn ingest(&self, params: &IngestEventsParams) -> Result<IngestEventsResponse, Error> {
        require_non_empty("events", &params.events)?;
        if params.events.len() > MAX_INGEST_BATCH {
            return Err(Error::InvalidParams(format!(
                "at most {} events per batch, got {}",
                MAX_INGEST_BATCH,
                params.events.len()
            )));
        }
        for event in &params.events {
            require_non_blank("customer_id", &event.customer_id)?;
            require_non_blank("event_name", &event.event_name)?;
        }
        let rb = self
            .api
            .request(Method::POST, &["events", "ingest"])?
            .json(params);
        let response: IngestEventsResponse = self.api.send(rb).await?;
        info!("Ingested {} usage events", response.ingested_count);
        Ok(response)
    }

    /// Returns an event
    pub async fn retrieve(&self, event_id: &str) -> Result<UsageEvent, Error> {
        let id = require_id("event_id", event_id)?;
        let rb = self.api.request(Method::GET, &["events", id])?;
        self.api.send(rb).await
    }

    /// Returns one page of events
    pub async fn list(&self, params: &ListEventsParams) -> Result<ListResponse<UsageEvent>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["events"])?.query(params);
        self.api.send(rb).await
    }
}
