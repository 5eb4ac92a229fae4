use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::ListResponse;
use crate::api::types::meter::{AggregationType, CreateMeterParams, ListMetersParams, Meter};
use crate::api::utils::{check_page, require_id, require_non_blank};
use crate::api::DodoAPI;

/// Deepest filter nesting the API accepts
pub const MAX_FILTER_DEPTH: usize = 3;

fn check_meter(params: &CreateMeterParams) -> Result<(), Error> {
    require_non_blank("event_name", &params.event_name)?;
    let aggregation = &params.aggregation;
    if aggregation.type_field != AggregationType::Count && aggregation.key.is_none() {
        return Err(Error::InvalidParams(format!(
            "{:?} aggregation needs a metadata key",
            aggregation.type_field
        )));
    }
    if let Some(filter) = &params.filter {
        if filter.depth() > MAX_FILTER_DEPTH {
            return Err(Error::InvalidParams(format!(
                "meter filter nests deeper than {} levels",
                MAX_FILTER_DEPTH
            )));
        }
    }
    Ok(())
}

/// Usage meters
#[derive(Debug, Clone, Copy)]
pub struct Meters<'a> {
    api: &'a DodoAPI,
}

impl<'a> Meters<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Meters { api }
    }

    /// Creates a meter aggregating events of one name
    pub async fn create(&self, params: &CreateMeterParams) -> Result<Meter, Error> {
        check_meter(params)?;
        let rb = self.api.request(Method::POST, &["meters"])?.json(params);
        self.api.send(rb).await
    }

    /// Returns a meter
    pub async fn retrieve(&self, id: &str) -> Result<Meter, Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::GET, &["meters", id])?;
        self.api.send(rb).await
    }

    /// Returns one page of meters
    pub async fn list(&self, params: &ListMetersParams) -> Result<ListResponse<Meter>, Error> {
        check_page(params.page_size, params.page_number)?;
        let rb = self.api.request(Method::GET, &["meters"])?.query(params);
        self.api.send(rb).await
    }

    /// Archives a meter
    pub async fn archive(&self, id: &str) -> Result<(), Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::DELETE, &["meters", id])?;
        self.api.send_empty(rb).await
    }

    /// Restores an archived meter
    pub async fn unarchive(&self, id: &str) -> Result<(), Error> {
        let id = require_id("id", id)?;
        let rb = self.api.request(Method::POST, &["meters", id, "unarchive"])?;
        self.api.send_empty(rb).await
    }
}

#[cfg(test)]
mod tests {
    use super::Meters;
    use crate::api::error::Error;
    use crate::api::test_api;
    use crate::api::types::meter::{
        AggregationType, Conjunction, CreateMeterParams, FilterCondition, FilterOperator,
        ListMetersParams, MeterAggregation, MeterFilter,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_sum_meter() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/meters"))
            .and(body_json(json!({
                "aggregation": {"type": "sum", "key": "tokens"},
                "event_name": "llm.call",
                "measurement_unit": "tokens",
                "name": "Tokens",
                "filter": {
                    "clauses": [{"key": "model", "operator": "equals", "value": "large"}],
                    "conjunction": "and"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "mtr_1",
                "aggregation": {"type": "sum", "key": "tokens"},
                "business_id": "bus_1",
                "created_at": "2025-01-01T00:00:00Z",
                "event_name": "llm.call",
                "measurement_unit": "tokens",
                "name": "Tokens",
                "updated_at": "2025-01-01T00:00:00Z",
                "filter": {
                    "clauses": [{"key": "model", "operator": "equals", "value": "large"}],
                    "conjunction": "and"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = CreateMeterParams::builder()
            .aggregation(MeterAggregation::over(AggregationType::Sum, "tokens"))
            .event_name("llm.call")
            .measurement_unit("tokens")
            .name("Tokens")
            .filter(MeterFilter::all(vec![FilterCondition::new(
                "model",
                FilterOperator::Equals,
                "large",
            )]))
            .build();
        let meter = Meters::new(&api).create(&params).await.unwrap();
        assert_eq!(meter.filter.map(|f| f.depth()), Some(1));
    }

    #[tokio::test]
    async fn sum_without_key_is_rejected() {
        let api = test_api("http://127.0.0.1:9");
        let params = CreateMeterParams::builder()
            .aggregation(MeterAggregation {
                type_field: AggregationType::Sum,
                key: None,
            })
            .event_name("llm.call")
            .measurement_unit("tokens")
            .name("Tokens")
            .build();
        let err = Meters::new(&api).create(&params).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[tokio::test]
    async fn too_deep_filter_is_rejected() {
        let api = test_api("http://127.0.0.1:9");
        let leaf = MeterFilter::any(vec![FilterCondition::new("a", FilterOperator::Equals, 1i64)]);
        let mut filter = leaf;
        for _ in 0..3 {
            filter = MeterFilter::nested(vec![filter], Conjunction::And);
        }
        assert_eq!(filter.depth(), 4);
        let params = CreateMeterParams::builder()
            .aggregation(MeterAggregation::count())
            .event_name("api.call")
            .measurement_unit("calls")
            .name("Calls")
            .filter(filter)
            .build();
        let err = Meters::new(&api).create(&params).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[tokio::test]
    async fn archive_and_unarchive() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/meters/mtr_1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/meters/mtr_1/unarchive"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let meters = Meters::new(&api);
        meters.archive("mtr_1").await.unwrap();
        meters.unarchive("mtr_1").await.unwrap();
    }

    fn count_meter_json() -> serde_json::Value {
        json!({
            "id": "mtr_2",
            "aggregation": {"type": "count"},
            "business_id": "bus_1",
            "created_at": "2025-01-01T00:00:00Z",
            "event_name": "api.call",
            "measurement_unit": "calls",
            "name": "Calls",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn retrieve_count_meter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meters/mtr_2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(count_meter_json()))
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let meter = Meters::new(&api).retrieve("mtr_2").await.unwrap();
        assert_eq!(meter.aggregation, MeterAggregation::count());
        assert!(meter.filter.is_none());
    }

    #[tokio::test]
    async fn list_archived_meters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meters"))
            .and(query_param("archived", "true"))
            .and(query_param("page_size", "50"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": [count_meter_json()]})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let params = ListMetersParams::builder()
            .archived(true)
            .page_size(50)
            .build();
        let page = Meters::new(&api).list(&params).await.unwrap();
        assert_eq!(page.items[0].id, "mtr_2");
    }

    #[tokio::test]
    async fn blank_event_name_is_rejected() {
        let api = test_api("http://127.0.0.1:9");
        let params = CreateMeterParams::builder()
            .aggregation(MeterAggregation::count())
            .event_name("")
            .measurement_unit("calls")
            .name("Calls")
            .build();
        let err = Meters::new(&api).create(&params).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }
}
