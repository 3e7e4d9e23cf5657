//! Filter conditions and the parse errors shared by the filter models.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum FilterCondition {
    #[default]
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "is not")]
    IsNot,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "does not contain")]
    DoesNotContain,
}

/// Every condition a table column filter can use, in menu order.
pub const ALL_CONDITIONS: [FilterCondition; 4] = [
    FilterCondition::Is,
    FilterCondition::IsNot,
    FilterCondition::Contains,
    FilterCondition::DoesNotContain,
];

/// The query builder only offers exact matches.
pub const QUERY_BUILDER_CONDITIONS: [FilterCondition; 2] = [
    FilterCondition::Is,
    FilterCondition::IsNot,
];

impl FilterCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::Contains => "contains",
            Self::DoesNotContain => "does not contain",
        }
    }

    /// Position of this condition inside a fixed four-slot record.
    pub(crate) fn slot(&self) -> usize {
        match self {
            Self::Is => 0,
            Self::IsNot => 1,
            Self::Contains => 2,
            Self::DoesNotContain => 3,
        }
    }
}

impl Display for FilterCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterCondition {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CONDITIONS
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| FilterParseError::UnknownCondition(s.to_string()))
    }
}

#[derive(Debug)]
pub enum FilterParseError {
    UnknownCondition(String),
    DuplicateField(String),
    EmptyField(String),
    Json(serde_json::Error),
}

impl std::fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCondition(s) => write!(f, "Unknown filter condition: {:?}", s),
            Self::DuplicateField(field) => write!(f, "Field configured more than once: {}", field),
            Self::EmptyField(field) => write!(f, "Field has no filter entries: {}", field),
            Self::Json(err) => write!(f, "Failed to parse filter configuration: {}", err),
        }
    }
}

impl std::error::Error for FilterParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FilterParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_condition_labels() {
        assert_eq!("is".parse::<FilterCondition>().unwrap(), FilterCondition::Is);
        assert_eq!("does not contain".parse::<FilterCondition>().unwrap(), FilterCondition::DoesNotContain);
        assert!(matches!("IS".parse::<FilterCondition>(), Err(FilterParseError::UnknownCondition(_))));
    }

    #[test]
    fn serializes_with_display_labels() {
        let json = serde_json::to_string(&FilterCondition::IsNot).unwrap();
        assert_eq!(json, "\"is not\"");
        let back: FilterCondition = serde_json::from_str("\"contains\"").unwrap();
        assert_eq!(back, FilterCondition::Contains);
        assert_eq!(FilterCondition::DoesNotContain.to_string(), "does not contain");
    }
}
