use base64::{prelude::BASE64_STANDARD, Engine};
use chrono::Utc;
use log::{debug, warn};
use reqwest::header::HeaderMap;
use ring::hmac;

use crate::api::error::WebhookError;

/// Header carrying the unique message id
pub const WEBHOOK_ID: &str = "webhook-id";
/// Header carrying the unix send time
pub const WEBHOOK_TIMESTAMP: &str = "webhook-timestamp";
/// Header carrying the space separated `v1,<base64>` signatures
pub const WEBHOOK_SIGNATURE: &str = "webhook-signature";

const SECRET_PREFIX: &str = "whsec_";
const SIGNATURE_VERSION: &str = "v1";
/// Allowed clock skew between sender and receiver, in seconds
const TOLERANCE_SECS: u64 = 5 * 60;

/// Verifies signed webhook deliveries
#[derive(Debug, Clone)]
pub struct Webhook {
    key: hmac::Key,
}

impl Webhook {
    /// Creates a verifier from a base64 secret, with or without the `whsec_` prefix
    pub fn new(secret: &str) -> Result<Self, WebhookError> {
        let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
        let raw = BASE64_STANDARD
            .decode(encoded)
            .map_err(|_| WebhookError::InvalidSecret)?;
        Ok(Webhook {
            key: hmac::Key::new(hmac::HMAC_SHA256, &raw),
        })
    }

    /// Signs a message the way the sender does
    pub fn sign(&self, msg_id: &str, timestamp: i64, payload: &str) -> String {
        let content = format!("{}.{}.{}", msg_id, timestamp, payload);
        let tag = hmac::sign(&self.key, content.as_bytes());
        format!("{},{}", SIGNATURE_VERSION, BASE64_STANDARD.encode(tag.as_ref()))
    }

    /// Checks headers and raw body of a delivery
    pub fn verify(&self, headers: &HeaderMap, payload: &str) -> Result<(), WebhookError> {
        self.verify_at(headers, payload, Utc::now().timestamp())
    }

    fn verify_at(&self, headers: &HeaderMap, payload: &str, now: i64) -> Result<(), WebhookError> {
        let msg_id = header_str(headers, WEBHOOK_ID)?;
        let timestamp = header_str(headers, WEBHOOK_TIMESTAMP)?
            .trim()
            .parse::<i64>()
            .map_err(|_| WebhookError::InvalidTimestamp)?;
        let signatures = header_str(headers, WEBHOOK_SIGNATURE)?;

        if now.abs_diff(timestamp) > TOLERANCE_SECS {
            warn!(
                "Webhook {} timestamp {} is too far from {}",
                msg_id, timestamp, now
            );
            return Err(WebhookError::TimestampOutOfTolerance);
        }

        let content = format!("{}.{}.{}", msg_id, timestamp, payload);
        for candidate in signatures.split_whitespace() {
            let Some((version, encoded)) = candidate.split_once(',') else {
                continue;
            };
            if version != SIGNATURE_VERSION {
                debug!("Skipping {} signature", version);
                continue;
            }
            let Ok(tag) = BASE64_STANDARD.decode(encoded) else {
                continue;
            };
            if hmac::verify(&self.key, content.as_bytes(), &tag).is_ok() {
                return Ok(());
            }
        }
        warn!("No matching signature for webhook {}", msg_id);
        Err(WebhookError::SignatureMismatch)
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &'static str) -> Result<&'h str, WebhookError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(WebhookError::MissingHeader(name))
}
