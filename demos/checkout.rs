use std::env;

use dodopayments::api::types::checkout_session::{CheckoutProductItem, CreateCheckoutSessionParams};
use dodopayments::api::types::common::{BillingAddress, CustomerRequest};
use dodopayments::DodoPayments;

#[tokio::main]
async fn main() {
    env_logger::init();
    let product_id = env::args()
        .nth(1)
        .expect("usage: checkout <product_id> [email]");
    let email = env::args().nth(2).unwrap_or_else(|| "buyer@example.com".to_string());

    let client = DodoPayments::from_env().unwrap();

    let countries = client.misc().supported_countries().await.unwrap();
    println!("Checkout is available in {} countries", countries.len());

    let params = CreateCheckoutSessionParams::builder()
        .product_cart(vec![CheckoutProductItem::builder()
            .product_id(product_id)
            .quantity(1)
            .build()])
        .customer(CustomerRequest::new_customer(email, "Demo Buyer"))
        .billing_address(BillingAddress::builder().country("US").build())
        .return_url("https://example.com/thanks")
        .build();
    let session = client.checkout_sessions().create(&params).await.unwrap();
    println!("Open {} to pay", session.checkout_url);

    let status = client
        .checkout_sessions()
        .retrieve(&session.session_id)
        .await
        .unwrap();
    println!("Payment status: {:?}", status.payment_status);
}
