use dodopayments::api::types::subscription::{
    ListSubscriptionsParams, SubscriptionStatus, UpdateSubscriptionParams,
};
use dodopayments::DodoPayments;

#[tokio::main]
async fn main() {
    env_logger::init();
    let client = DodoPayments::from_env().unwrap();

    let params = ListSubscriptionsParams::builder()
        .status(SubscriptionStatus::OnHold)
        .page_size(50)
        .build();
    let page = client.subscriptions().list(&params).await.unwrap();
    for subscription in &page.items {
        println!(
            "{} {} next billing {}",
            subscription.subscription_id, subscription.customer.email, subscription.next_billing_date
        );
    }

    // Cancel at period end instead of immediately
    if let Some(first) = page.items.first() {
        let update = UpdateSubscriptionParams::builder()
            .cancel_at_next_billing_date(true)
            .build();
        match client
            .subscriptions()
            .update(&first.subscription_id, &update)
            .await
        {
            Ok(updated) => println!("{} now {:?}", updated.subscription_id, updated.status),
            Err(e) => eprintln!("{}", e),
        }
    }
}
