//! Row predicate for multi-condition column filters.
//!
//! Entries sharing a condition are combined as an allow-list (`is`,
//! `contains`) or an exclusion list (`is not`, `does not contain`); the four
//! condition groups are then and-ed together.

use crate::{filter_condition::FilterCondition, filter_entry::FilterItem};


/// Lowercased filter values partitioned by condition, one slot per condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionGroups {
    groups: [Vec<String>; 4],
}

impl ConditionGroups {
    pub fn partition<'a>(items: impl IntoIterator<Item = &'a FilterItem>) -> Self {
        let mut result = Self::default();
        for item in items {
            result.groups[item.condition.slot()].push(item.value.to_lowercase());
        }
        result
    }

    pub fn values(&self, condition: FilterCondition) -> &[String] {
        &self.groups[condition.slot()]
    }

    /// `row_value` must already be lowercased.
    pub fn passes_is(&self, row_value: &str) -> bool {
        let values = self.values(FilterCondition::Is);
        values.is_empty() || values.iter().any(|v| v == row_value)
    }

    pub fn passes_is_not(&self, row_value: &str) -> bool {
        !self.values(FilterCondition::IsNot).iter().any(|v| v == row_value)
    }

    pub fn passes_contains(&self, row_value: &str) -> bool {
        let values = self.values(FilterCondition::Contains);
        values.is_empty() || values.iter().any(|v| row_value.contains(v.as_str()))
    }

    pub fn passes_does_not_contain(&self, row_value: &str) -> bool {
        !self.values(FilterCondition::DoesNotContain).iter().any(|v| row_value.contains(v.as_str()))
    }

    /// Evaluates a raw cell value. Absent cells compare as the empty string.
    pub fn passes(&self, row_value: Option<&str>) -> bool {
        let row_value = normalize_row_value(row_value);
        self.passes_is(&row_value)
            && self.passes_is_not(&row_value)
            && self.passes_contains(&row_value)
            && self.passes_does_not_contain(&row_value)
    }
}

pub fn normalize_row_value(row_value: Option<&str>) -> String {
    row_value.map(str::to_lowercase).unwrap_or_default()
}

/// Decides whether a row survives a column's filter value.
/// An absent or empty filter value lets every row through.
pub fn row_passes(filter_value: Option<&[FilterItem]>, row_value: Option<&str>) -> bool {
    let Some(items) = filter_value else { return true };
    if items.is_empty() {
        return true;
    }
    ConditionGroups::partition(items).passes(row_value)
}
