use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::common::ScalarValue;

/// How event values are combined over a billing period
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationType {
    Count,
    Sum,
    Max,
    Last,
}

/// Aggregation of a meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterAggregation {
    /// Aggregation function
    #[serde(rename = "type")]
    pub type_field: AggregationType,
    /// Metadata key aggregated, unused for `count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl MeterAggregation {
    /// Counts matching events
    pub fn count() -> Self {
        MeterAggregation {
            type_field: AggregationType::Count,
            key: None,
        }
    }

    /// Aggregates the metadata value under `key`
    pub fn over(type_field: AggregationType, key: impl Into<String>) -> Self {
        MeterAggregation {
            type_field,
            key: Some(key.into()),
        }
    }
}

/// Comparison of a filter condition
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEquals,
    LessThan,
    LessThanOrEquals,
    Contains,
    DoesNotContain,
}

/// How clauses of a filter combine
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conjunction {
    And,
    Or,
}

/// Single comparison against event metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Metadata key
    pub key: String,
    /// Comparison
    pub operator: FilterOperator,
    /// Right hand side
    pub value: ScalarValue,
}

impl FilterCondition {
    /// Builds a condition
    pub fn new(key: impl Into<String>, operator: FilterOperator, value: impl Into<ScalarValue>) -> Self {
        FilterCondition {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Either plain conditions or nested filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterClauses {
    /// Leaf conditions
    Conditions(Vec<FilterCondition>),
    /// Nested filter groups
    Nested(Vec<MeterFilter>),
}

/// Event filter of a meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterFilter {
    /// Clauses
    pub clauses: FilterClauses,
    /// Combination of the clauses
    pub conjunction: Conjunction,
}

impl MeterFilter {
    /// Matches events satisfying every condition
    pub fn all(conditions: Vec<FilterCondition>) -> Self {
        MeterFilter {
            clauses: FilterClauses::Conditions(conditions),
            conjunction: Conjunction::And,
        }
    }

    /// Matches events satisfying any condition
    pub fn any(conditions: Vec<FilterCondition>) -> Self {
        MeterFilter {
            clauses: FilterClauses::Conditions(conditions),
            conjunction: Conjunction::Or,
        }
    }

    /// Combines nested filters
    pub fn nested(filters: Vec<MeterFilter>, conjunction: Conjunction) -> Self {
        MeterFilter {
            clauses: FilterClauses::Nested(filters),
            conjunction,
        }
    }

    /// Nesting depth, 1 for a filter of plain conditions
    pub fn depth(&self) -> usize {
        match &self.clauses {
            FilterClauses::Conditions(_) => 1,
            FilterClauses::Nested(filters) => {
                1 + filters.iter().map(MeterFilter::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Meter object
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    pub id: String,
    pub aggregation: MeterAggregation,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub event_name: String,
    pub measurement_unit: String,
    pub name: String,
    pub updated_at: DateTime<Utc>,
    pub description: Option<String>,
    pub filter: Option<MeterFilter>,
}

/// Parameters of `POST /meters`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct CreateMeterParams {
    /// Aggregation
    pub aggregation: MeterAggregation,
    /// Events with this name are metered
    #[builder(into)]
    pub event_name: String,
    /// Unit label
    #[builder(into)]
    pub measurement_unit: String,
    /// Display name
    #[builder(into)]
    pub name: String,
    /// Description
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Restricts which events count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<MeterFilter>,
}

/// Query of `GET /meters`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ListMetersParams {
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Zero based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    /// List archived meters instead of active ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}
