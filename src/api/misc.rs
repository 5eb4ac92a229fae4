use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::common::CountryCode;
use crate::api::DodoAPI;

/// Endpoints that belong to no resource
#[derive(Debug, Clone, Copy)]
pub struct Misc<'a> {
    api: &'a DodoAPI,
}

impl<'a> Misc<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Misc { api }
    }

    /// ISO 3166 alpha-2 codes of the countries checkout is available in
    pub async fn supported_countries(&self) -> Result<Vec<CountryCode>, Error> {
        let rb = self
            .api
            .request(Method::GET, &["checkout", "supported_countries"])?;
        self.api.send(rb).await
    }
}

#[cfg(test)]
mod tests {
    use super::Misc;
    use crate::api::test_api;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn supported_countries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/checkout/supported_countries"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["US", "IN", "DE"])))
            .mount(&server)
            .await;
        let api = test_api(&server.uri());
        let countries = Misc::new(&api).supported_countries().await.unwrap();
        assert_eq!(countries, vec!["US", "IN", "DE"]);
    }
}
