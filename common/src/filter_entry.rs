//! Filter entries held by the filter stores.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::filter_condition::FilterCondition;


/// A `{value, condition}` pair as written into a grid column's filter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterItem {
    pub value: String,
    pub condition: FilterCondition,
}

impl FilterItem {
    pub fn new(value: impl Into<String>, condition: FilterCondition) -> Self {
        Self { value: value.into(), condition }
    }

    pub fn matches(&self, value: &str, condition: FilterCondition) -> bool {
        self.value == value && self.condition == condition
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(pub String);

impl Display for FilterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FilterId {
    fn from(value: &str) -> Self {
        FilterId(value.to_string())
    }
}

/// A query builder chip. Two chips may share field, value and condition;
/// they are told apart by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub id: FilterId,
    pub field: String,
    pub value: String,
    pub condition: FilterCondition,
}
