//! State store for the table toolbar's column filter.
//!
//! Entries are addressed by their `(column, value, condition)` triple and the
//! store keeps triples unique. After every mutation the grid-facing filter
//! value of each touched column is read back from the committed state and
//! returned as a [`ColumnFilterChange`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    active_filters::ActiveFilterSet,
    filter_condition::{ALL_CONDITIONS, FilterCondition},
    filter_config::{ColumnFilterDef, FilterOption, find_column_def},
    filter_entry::FilterItem,
};


/// The two operations a grid column exposes to the filter widgets.
pub trait FilterableColumn {
    fn filter_value(&self) -> Option<Vec<FilterItem>>;

    /// `None` marks the column unfiltered; an empty list is never written.
    fn set_filter_value(&mut self, value: Option<Vec<FilterItem>>);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilterChange {
    pub column_id: String,
    pub filter_value: Option<Vec<FilterItem>>,
}

impl ColumnFilterChange {
    pub fn apply_to(&self, column: &mut impl FilterableColumn) {
        column.set_filter_value(self.filter_value.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnFilterEvent {
    SetOpen(bool),
    SelectColumn(String),
    SetSearchTerm(String),
    /// Toggles the option under the current column and condition.
    SelectOption(String),
    Toggle { column_id: String, value: String, condition: FilterCondition },
    UpdateCondition { column_id: String, value: String, old: FilterCondition, new: FilterCondition },
    Remove { column_id: String, value: String, condition: FilterCondition },
    ClearColumn(String),
    ClearAll,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnSelectionState {
    pub open: bool,
    pub current_column: Option<String>,
    pub current_condition: FilterCondition,
    pub search_term: String,
}

/// A chip to render: the entry plus the option label it was picked from.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilterChip {
    pub column_id: String,
    pub label: String,
    pub item: FilterItem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnFilterState {
    defs: Vec<ColumnFilterDef>,
    filters: ActiveFilterSet<FilterItem>,
    selection: ColumnSelectionState,
}

impl ColumnFilterState {
    pub fn new(defs: Vec<ColumnFilterDef>) -> Self {
        Self {
            defs,
            filters: ActiveFilterSet::new(),
            selection: ColumnSelectionState::default(),
        }
    }

    pub fn defs(&self) -> &[ColumnFilterDef] {
        &self.defs
    }

    pub fn filters(&self) -> &ActiveFilterSet<FilterItem> {
        &self.filters
    }

    pub fn selection(&self) -> &ColumnSelectionState {
        &self.selection
    }

    pub fn conditions(&self) -> &'static [FilterCondition] {
        &ALL_CONDITIONS
    }

    pub fn current_def(&self) -> Option<&ColumnFilterDef> {
        let column_id = self.selection.current_column.as_deref()?;
        find_column_def(&self.defs, column_id)
    }

    /// Options of the column being edited that match the search text.
    pub fn filtered_options(&self) -> Vec<FilterOption> {
        match self.current_def() {
            Some(def) => def.options_matching(&self.selection.search_term),
            None => Vec::new(),
        }
    }

    /// Whether `value` is active under the current column and condition.
    pub fn is_selected(&self, value: &str) -> bool {
        let Some(column_id) = self.selection.current_column.as_deref() else { return false };
        self.contains(column_id, value, self.selection.current_condition)
    }

    pub fn contains(&self, column_id: &str, value: &str, condition: FilterCondition) -> bool {
        self.filters
            .get(column_id)
            .is_some_and(|items| items.iter().any(|i| i.matches(value, condition)))
    }

    /// Grid-facing filter value of a column.
    pub fn filter_value(&self, column_id: &str) -> Option<Vec<FilterItem>> {
        self.filters.snapshot(column_id)
    }

    /// Chips for every entry whose value is one of its column's options.
    pub fn chips(&self) -> Vec<ColumnFilterChip> {
        let mut chips = Vec::new();
        for (column_id, items) in self.filters.iter() {
            let Some(def) = find_column_def(&self.defs, column_id) else { continue };
            for item in items {
                if let Some(option) = def.option_for(&item.value) {
                    chips.push(ColumnFilterChip {
                        column_id: column_id.to_string(),
                        label: option.label.clone(),
                        item: item.clone(),
                    });
                }
            }
        }
        chips
    }

    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn apply_event(mut self, event: ColumnFilterEvent) -> (Self, Vec<ColumnFilterChange>) {
        let changes = self.apply(event);
        (self, changes)
    }

    pub fn apply(&mut self, event: ColumnFilterEvent) -> Vec<ColumnFilterChange> {
        match event {
            ColumnFilterEvent::SetOpen(open) => {
                self.selection.open = open;
                if !open {
                    self.selection.current_column = None;
                    self.selection.search_term.clear();
                }
                Vec::new()
            }
            ColumnFilterEvent::SelectColumn(column_id) => {
                if find_column_def(&self.defs, &column_id).is_some() {
                    self.selection.current_column = Some(column_id);
                    self.selection.current_condition = FilterCondition::Is;
                    self.selection.search_term.clear();
                } else {
                    trace!("ignoring unknown column {column_id}");
                }
                Vec::new()
            }
            ColumnFilterEvent::SetSearchTerm(term) => {
                self.selection.search_term = term;
                Vec::new()
            }
            ColumnFilterEvent::SelectOption(value) => {
                let Some(column_id) = self.selection.current_column.take() else { return Vec::new() };
                let condition = self.selection.current_condition;
                self.selection.open = false;
                self.selection.search_term.clear();
                self.toggle(&column_id, &value, condition).into_iter().collect()
            }
            ColumnFilterEvent::Toggle { column_id, value, condition } => {
                self.toggle(&column_id, &value, condition).into_iter().collect()
            }
            ColumnFilterEvent::UpdateCondition { column_id, value, old, new } => {
                self.update_condition(&column_id, &value, old, new).into_iter().collect()
            }
            ColumnFilterEvent::Remove { column_id, value, condition } => {
                self.remove(&column_id, &value, condition).into_iter().collect()
            }
            ColumnFilterEvent::ClearColumn(column_id) => self.clear_column(&column_id).into_iter().collect(),
            ColumnFilterEvent::ClearAll => self.clear_all(),
        }
    }

    /// Removes the triple if present, otherwise adds it.
    pub fn toggle(&mut self, column_id: &str, value: &str, condition: FilterCondition) -> Option<ColumnFilterChange> {
        if self.contains(column_id, value, condition) {
            return self.remove(column_id, value, condition);
        }
        if find_column_def(&self.defs, column_id).is_none() {
            trace!("ignoring toggle on unknown column {column_id}");
            return None;
        }
        self.filters.push(column_id, FilterItem::new(value, condition));
        debug!("added {column_id} {condition} {value}");
        Some(self.change_for(column_id))
    }

    pub fn update_condition(
        &mut self,
        column_id: &str,
        value: &str,
        old: FilterCondition,
        new: FilterCondition,
    ) -> Option<ColumnFilterChange> {
        if !self.contains(column_id, value, old) || old == new {
            return None;
        }
        if self.contains(column_id, value, new) {
            // the target triple already exists, so the edited entry merges into it
            self.filters.remove_first(column_id, |i| i.matches(value, old));
        } else {
            self.filters.update_first(column_id, |i| i.matches(value, old), |i| i.condition = new);
        }
        debug!("{column_id} {value}: {old} -> {new}");
        Some(self.change_for(column_id))
    }

    pub fn remove(&mut self, column_id: &str, value: &str, condition: FilterCondition) -> Option<ColumnFilterChange> {
        self.filters.remove_first(column_id, |i| i.matches(value, condition))?;
        debug!("removed {column_id} {condition} {value}");
        Some(self.change_for(column_id))
    }

    pub fn clear_column(&mut self, column_id: &str) -> Option<ColumnFilterChange> {
        self.filters.remove_field(column_id)?;
        debug!("cleared column {column_id}");
        Some(self.change_for(column_id))
    }

    pub fn clear_all(&mut self) -> Vec<ColumnFilterChange> {
        let columns: Vec<String> = self.filters.fields().map(str::to_string).collect();
        self.filters.clear();
        columns.into_iter().map(|column_id| ColumnFilterChange { column_id, filter_value: None }).collect()
    }

    fn change_for(&self, column_id: &str) -> ColumnFilterChange {
        ColumnFilterChange {
            column_id: column_id.to_string(),
            filter_value: self.filter_value(column_id),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_condition::FilterCondition::*;

    fn state() -> ColumnFilterState {
        let option = |v: &str| FilterOption { label: v.to_uppercase(), value: v.to_string() };
        ColumnFilterState::new(vec![
            ColumnFilterDef {
                column_id: "status".into(),
                title: "Status".into(),
                column_label: Some("Status".into()),
                options: vec![option("todo"), option("done")],
            },
            ColumnFilterDef {
                column_id: "priority".into(),
                title: "Priority".into(),
                column_label: None,
                options: vec![option("low"), option("high")],
            },
        ])
    }

    #[derive(Default)]
    struct Column(Option<Vec<FilterItem>>);

    impl FilterableColumn for Column {
        fn filter_value(&self) -> Option<Vec<FilterItem>> {
            self.0.clone()
        }

        fn set_filter_value(&mut self, value: Option<Vec<FilterItem>>) {
            self.0 = value;
        }
    }

    #[test]
    fn toggle_twice_restores_the_set() {
        let mut s = state();
        s.toggle("status", "todo", Is);
        let before = s.filters().clone();
        s.toggle("status", "done", IsNot);
        s.toggle("status", "done", IsNot);
        assert_eq!(s.filters(), &before);
    }

    #[test]
    fn emptied_column_reports_no_filter() {
        let mut s = state();
        let mut column = Column::default();
        s.toggle("status", "todo", Is).unwrap().apply_to(&mut column);
        assert_eq!(column.filter_value(), Some(vec![FilterItem::new("todo", Is)]));
        let change = s.toggle("status", "todo", Is).unwrap();
        assert_eq!(change.filter_value, None);
        change.apply_to(&mut column);
        assert_eq!(column.filter_value(), None);
        assert!(!s.filters().contains_field("status"));
    }

    #[test]
    fn select_option_uses_current_column_and_condition() {
        let mut s = state();
        s.apply(ColumnFilterEvent::SetOpen(true));
        s.apply(ColumnFilterEvent::SelectColumn("priority".into()));
        assert!(!s.is_selected("high"));
        let changes = s.apply(ColumnFilterEvent::SelectOption("high".into()));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].column_id, "priority");
        assert_eq!(changes[0].filter_value, Some(vec![FilterItem::new("high", Is)]));
        assert!(!s.selection().open);
        assert_eq!(s.selection().current_column, None);

        s.apply(ColumnFilterEvent::SelectColumn("priority".into()));
        assert!(s.is_selected("high"));
    }

    #[test]
    fn rapid_toggles_follow_committed_state() {
        let mut s = state();
        let mut column = Column::default();
        for _ in 0..3 {
            for change in s.apply(ColumnFilterEvent::Toggle { column_id: "status".into(), value: "todo".into(), condition: Is }) {
                change.apply_to(&mut column);
            }
        }
        assert_eq!(column.filter_value(), s.filter_value("status"));
        assert_eq!(column.filter_value(), Some(vec![FilterItem::new("todo", Is)]));
    }

    #[test]
    fn condition_update_keeps_value() {
        let mut s = state();
        s.toggle("status", "todo", Is);
        s.toggle("status", "done", Is);
        let change = s.update_condition("status", "todo", Is, Contains).unwrap();
        assert_eq!(
            change.filter_value,
            Some(vec![FilterItem::new("todo", Contains), FilterItem::new("done", Is)])
        );
        assert!(s.update_condition("status", "todo", Is, IsNot).is_none());
    }

    #[test]
    fn condition_update_onto_existing_triple_merges() {
        let mut s = state();
        s.toggle("status", "todo", Is);
        s.toggle("status", "todo", IsNot);
        let change = s.update_condition("status", "todo", Is, IsNot).unwrap();
        assert_eq!(change.filter_value, Some(vec![FilterItem::new("todo", IsNot)]));
    }

    #[test]
    fn clear_all_reports_every_column() {
        let mut s = state();
        s.toggle("status", "todo", Is);
        s.toggle("priority", "low", Is);
        let changes = s.apply(ColumnFilterEvent::ClearAll);
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.filter_value.is_none()));
        assert!(!s.is_filtered());
    }

    #[test]
    fn chips_skip_values_outside_options() {
        let mut s = state();
        s.toggle("status", "todo", Is);
        s.toggle("status", "stale", Is);
        let chips = s.chips();
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "TODO");
    }

    #[test]
    fn unknown_targets_are_no_ops() {
        let mut s = state();
        assert!(s.toggle("missing", "x", Is).is_none());
        assert!(s.remove("status", "todo", Is).is_none());
        assert!(s.clear_column("status").is_none());
        assert!(s.apply(ColumnFilterEvent::SelectOption("todo".into())).is_empty());
    }
}
