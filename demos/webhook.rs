use std::io::{self, Read};

use dodopayments::api::types::webhook_event::WebhookData;
use dodopayments::api::webhook::{WEBHOOK_ID, WEBHOOK_SIGNATURE, WEBHOOK_TIMESTAMP};
use dodopayments::DodoPayments;
use reqwest::header::{HeaderMap, HeaderValue};

/// Reads a delivery body from stdin and the headers from the command line:
/// `webhook <webhook-id> <webhook-timestamp> <webhook-signature> < body.json`
#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        eprintln!("usage: webhook <id> <timestamp> <signature> < body.json");
        return;
    }
    let mut headers = HeaderMap::new();
    headers.insert(WEBHOOK_ID, HeaderValue::from_str(&args[0]).unwrap());
    headers.insert(WEBHOOK_TIMESTAMP, HeaderValue::from_str(&args[1]).unwrap());
    headers.insert(WEBHOOK_SIGNATURE, HeaderValue::from_str(&args[2]).unwrap());

    let mut body = String::new();
    io::stdin().read_to_string(&mut body).unwrap();

    let client = DodoPayments::from_env().unwrap();
    match client.unwrap_webhook(&headers, &body) {
        Ok(payload) => match payload.data {
            WebhookData::Payment(payment) => println!("payment {}", payment.payment_id),
            WebhookData::Subscription(sub) => println!("subscription {}", sub.subscription_id),
            WebhookData::Refund(refund) => println!("refund {}", refund.refund_id),
            WebhookData::Dispute(dispute) => println!("dispute {}", dispute.dispute_id),
            WebhookData::LicenseKey(key) => println!("license key {}", key.id),
        },
        Err(e) => eprintln!("rejected: {}", e),
    }
}
