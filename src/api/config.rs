use std::env;
use std::fmt;
use std::time::Duration;

use bon::Builder;
use url::Url;

use crate::api::error::Error;

const LIVE_MODE_URL: &str = "https://live.dodopayments.com";
const TEST_MODE_URL: &str = "https://test.dodopayments.com";

/// Printed in place of secrets by `Debug` impls
pub(crate) const REDACTED: &str = "<redacted>";

/// Environment the client talks to
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production
    #[default]
    LiveMode,
    /// Sandbox
    TestMode,
}

impl Environment {
    /// Base URL of the environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::LiveMode => LIVE_MODE_URL,
            Environment::TestMode => TEST_MODE_URL,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "live_mode" | "live" => Some(Environment::LiveMode),
            "test_mode" | "test" => Some(Environment::TestMode),
            _ => None,
        }
    }
}

/// Client configuration
#[derive(Clone, Builder)]
pub struct ClientOptions {
    /// Bearer API key
    #[builder(into)]
    pub api_key: String,
    /// Target environment, ignored when `base_url` is set
    #[builder(default)]
    pub environment: Environment,
    /// Overrides the environment URL
    #[builder(into)]
    pub base_url: Option<String>,
    /// Per request timeout
    pub timeout: Option<Duration>,
    /// Secret used to verify incoming webhooks
    #[builder(into)]
    pub webhook_key: Option<String>,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &REDACTED)
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("webhook_key", &self.webhook_key.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl ClientOptions {
    /// Reads the options from `DODO_PAYMENTS_*` environment variables
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var("DODO_PAYMENTS_API_KEY").map_err(|_| Error::MissingApiKey)?;
        let environment = match env::var("DODO_PAYMENTS_ENVIRONMENT") {
            Ok(value) => Environment::parse(&value).ok_or_else(|| {
                Error::InvalidParams(format!("unknown environment {}", value))
            })?,
            Err(_) => Environment::default(),
        };
        Ok(ClientOptions {
            api_key,
            environment,
            base_url: env::var("DODO_PAYMENTS_BASE_URL").ok(),
            timeout: None,
            webhook_key: env::var("DODO_PAYMENTS_WEBHOOK_KEY").ok(),
        })
    }

    /// Resolves the URL requests are sent to
    pub fn resolved_base_url(&self) -> Result<Url, Error> {
        let raw = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url());
        Ok(Url::parse(raw)?)
    }
}
