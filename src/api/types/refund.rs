use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::{Currency, CustomerLimitedDetails};

/// Refund state
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Succeeded,
    Failed,
    Pending,
    Review,
    #[serde(untagged)]
    Unknown(String),
}

/// Refund object
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub refund_id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub is_partial: bool,
    pub payment_id: String,
    pub status: RefundStatus,
    pub customer: Option<CustomerLimitedDetails>,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub reason: Option<String>,
}

/// Refund summary embedded in payments and list responses
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundListItem {
    pub refund_id: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub is_partial: bool,
    pub payment_id: String,
    pub status: RefundStatus,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub reason: Option<String>,
}

/// Partial refund of a single line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct RefundItem {
    /// Line item id from the payment
    #[builder(into)]
    pub item_id: String,
    /// Amount to refund, defaults to the full line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Whether `amount` includes tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
}

/// Parameters of `POST /refunds`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateRefundParams {
    /// Payment to refund
    #[builder(into)]
    pub payment_id: String,
    /// Items to refund, the whole payment when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RefundItem>>,
    /// Reason shown to the customer
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Query of `GET /refunds`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListRefundsParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// Created at or after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    /// Created at or before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
    /// Filter by customer
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RefundStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_refund_body() {
        let params = CreateRefundParams::builder()
            .payment_id("pay_1")
            .items(vec![RefundItem::builder().item_id("itm_1").amount(500).build()])
            .reason("damaged")
            .build();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "payment_id": "pay_1",
                "items": [{"item_id": "itm_1", "amount": 500}],
                "reason": "damaged"
            })
        );
    }
}
