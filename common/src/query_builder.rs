//! State store for the generic query builder.
//!
//! The store owns the active chips plus the transient state of the
//! "Add filter" popover. Every change goes through [`QueryBuilderState::apply`];
//! a mutation of the chips yields the complete, flattened chip list that the
//! caller hands to its `on_filters_change` observer.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    active_filters::ActiveFilterSet,
    filter_condition::{FilterCondition, QUERY_BUILDER_CONDITIONS},
    filter_config::{FilterConfig, FilterInputType, find_config},
    filter_entry::{ActiveFilter, FilterId},
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryBuilderEvent {
    SetOpen(bool),
    SelectField(String),
    SetSearchTerm(String),
    /// Picks an option of the field currently being edited.
    SelectOption(String),
    /// Commits the search text as a value of the current text field.
    SubmitSearchTerm,
    AddFilter { field: String, value: String, condition: FilterCondition },
    UpdateCondition { id: FilterId, condition: FilterCondition },
    RemoveFilter { id: FilterId },
    ClearField { field: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub open: bool,
    pub current_field: Option<String>,
    pub search_term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryBuilderState {
    configs: Vec<FilterConfig>,
    filters: ActiveFilterSet<ActiveFilter>,
    selection: SelectionState,
    id_scope: String,
    next_seq: u64,
}

impl QueryBuilderState {
    /// `id_scope` prefixes every generated id, so ids of two builders on one
    /// page never collide.
    pub fn new(id_scope: impl Into<String>, configs: Vec<FilterConfig>) -> Self {
        Self {
            configs,
            filters: ActiveFilterSet::new(),
            selection: SelectionState::default(),
            id_scope: id_scope.into(),
            next_seq: 0,
        }
    }

    pub fn configs(&self) -> &[FilterConfig] {
        &self.configs
    }

    pub fn filters(&self) -> &ActiveFilterSet<ActiveFilter> {
        &self.filters
    }

    /// Chips grouped by field, fields in first-insertion order.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.filters.flatten()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn conditions(&self) -> &'static [FilterCondition] {
        &QUERY_BUILDER_CONDITIONS
    }

    pub fn current_config(&self) -> Option<&FilterConfig> {
        let field = self.selection.current_field.as_deref()?;
        find_config(&self.configs, field)
    }

    /// Options of the field being edited that match the search text.
    pub fn filtered_options(&self) -> Vec<String> {
        match self.current_config() {
            Some(config) => config.options_matching(&self.selection.search_term),
            None => Vec::new(),
        }
    }

    /// Pure transition: consumes the state, returns the next one and the
    /// chip list to report if the chips changed.
    pub fn apply_event(mut self, event: QueryBuilderEvent) -> (Self, Option<Vec<ActiveFilter>>) {
        let notification = self.apply(event);
        (self, notification)
    }

    pub fn apply(&mut self, event: QueryBuilderEvent) -> Option<Vec<ActiveFilter>> {
        match event {
            QueryBuilderEvent::SetOpen(open) => {
                self.selection.open = open;
                if !open {
                    self.reset_selection();
                }
                None
            }
            QueryBuilderEvent::SelectField(field) => {
                if find_config(&self.configs, &field).is_some() {
                    self.selection.current_field = Some(field);
                    self.selection.search_term.clear();
                } else {
                    trace!("ignoring unknown field {field}");
                }
                None
            }
            QueryBuilderEvent::SetSearchTerm(term) => {
                self.selection.search_term = term;
                None
            }
            QueryBuilderEvent::SelectOption(value) => {
                let field = self.selection.current_field.clone()?;
                let changed = self.add_filter(&field, &value, FilterCondition::Is);
                self.selection.open = false;
                self.reset_selection();
                changed
            }
            QueryBuilderEvent::SubmitSearchTerm => {
                let config = self.current_config()?;
                if config.input_type != FilterInputType::Text {
                    return None;
                }
                let field = config.field.clone();
                let value = self.selection.search_term.trim().to_string();
                let changed = self.add_filter(&field, &value, FilterCondition::Is);
                self.selection.open = false;
                self.reset_selection();
                changed
            }
            QueryBuilderEvent::AddFilter { field, value, condition } => self.add_filter(&field, &value, condition),
            QueryBuilderEvent::UpdateCondition { id, condition } => self.update_condition(&id, condition),
            QueryBuilderEvent::RemoveFilter { id } => self.remove_filter(&id),
            QueryBuilderEvent::ClearField { field } => self.clear_field(&field),
        }
    }

    pub fn add_filter(&mut self, field: &str, value: &str, condition: FilterCondition) -> Option<Vec<ActiveFilter>> {
        if !QUERY_BUILDER_CONDITIONS.contains(&condition) {
            warn!("condition {condition} is not available in the query builder");
            return None;
        }
        let Some(config) = find_config(&self.configs, field) else {
            warn!("no filter configured for field {field}");
            return None;
        };
        let value = match config.input_type {
            FilterInputType::Text => value.trim(),
            FilterInputType::Select => value,
        };
        if !config.accepts(value) {
            warn!("value {value:?} is not an option of field {field}");
            return None;
        }
        let filter = ActiveFilter {
            id: self.generate_id(field, value),
            field: field.to_string(),
            value: value.to_string(),
            condition,
        };
        debug!("adding filter {} ({field} {condition} {value})", filter.id);
        self.filters.push(field, filter);
        Some(self.active_filters())
    }

    pub fn update_condition(&mut self, id: &FilterId, condition: FilterCondition) -> Option<Vec<ActiveFilter>> {
        if !QUERY_BUILDER_CONDITIONS.contains(&condition) {
            warn!("condition {condition} is not available in the query builder");
            return None;
        }
        let field = self.field_of(id)?;
        self.filters.update_first(&field, |f| &f.id == id, |f| f.condition = condition);
        debug!("filter {id} condition is now {condition}");
        Some(self.active_filters())
    }

    pub fn remove_filter(&mut self, id: &FilterId) -> Option<Vec<ActiveFilter>> {
        let Some((field, _)) = self.filters.remove_first_anywhere(|f| &f.id == id) else {
            trace!("no filter with id {id}");
            return None;
        };
        debug!("removed filter {id}, {} left on {field}", self.filters.get(&field).map_or(0, <[_]>::len));
        Some(self.active_filters())
    }

    pub fn clear_field(&mut self, field: &str) -> Option<Vec<ActiveFilter>> {
        let removed = self.filters.remove_field(field)?;
        debug!("cleared {} filters on {field}", removed.len());
        Some(self.active_filters())
    }

    fn field_of(&self, id: &FilterId) -> Option<String> {
        self.filters.entries().find(|f| &f.id == id).map(|f| f.field.clone())
    }

    fn generate_id(&mut self, field: &str, value: &str) -> FilterId {
        let seq = self.next_seq;
        self.next_seq += 1;
        FilterId(format!("{}-{}-{}-{}", self.id_scope, field, value, seq))
    }

    fn reset_selection(&mut self) {
        self.selection.current_field = None;
        self.selection.search_term.clear();
    }
}
