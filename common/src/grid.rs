//! In-memory grid that the filter widgets drive through [`FilterableColumn`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    column_filter::{ColumnFilterChange, FilterableColumn},
    filter_entry::FilterItem,
    predicate::row_passes,
};


/// Cell values by column id; a missing key is an absent cell.
pub type GridRow = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridColumn {
    pub id: String,
    pub title: String,
    filter_value: Option<Vec<FilterItem>>,
    /// Plain text filter (case-insensitive substring); empty means unfiltered.
    text_filter: String,
}

impl GridColumn {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), ..Default::default() }
    }

    pub fn text_filter(&self) -> &str {
        &self.text_filter
    }

    pub fn set_text_filter(&mut self, text: impl Into<String>) {
        self.text_filter = text.into();
    }

    pub fn is_filtered(&self) -> bool {
        self.filter_value.is_some() || !self.text_filter.is_empty()
    }

    pub fn passes(&self, row: &GridRow) -> bool {
        let cell = row.get(&self.id).map(String::as_str);
        if !self.text_filter.is_empty() {
            let cell = cell.unwrap_or_default().to_lowercase();
            if !cell.contains(&self.text_filter.to_lowercase()) {
                return false;
            }
        }
        row_passes(self.filter_value.as_deref(), cell)
    }
}

impl FilterableColumn for GridColumn {
    fn filter_value(&self) -> Option<Vec<FilterItem>> {
        self.filter_value.clone()
    }

    fn set_filter_value(&mut self, value: Option<Vec<FilterItem>>) {
        self.filter_value = value.filter(|items| !items.is_empty());
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataGrid {
    columns: Vec<GridColumn>,
    rows: Vec<GridRow>,
}

impl DataGrid {
    pub fn new(columns: Vec<GridColumn>, rows: Vec<GridRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn column(&self, column_id: &str) -> Option<&GridColumn> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut GridColumn> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    pub fn apply_changes(&mut self, changes: &[ColumnFilterChange]) {
        for change in changes {
            match self.column_mut(&change.column_id) {
                Some(column) => change.apply_to(column),
                None => debug!("grid has no column {}", change.column_id),
            }
        }
    }

    pub fn set_text_filter(&mut self, column_id: &str, text: &str) {
        if let Some(column) = self.column_mut(column_id) {
            column.set_text_filter(text);
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.columns.iter().any(GridColumn::is_filtered)
    }

    pub fn reset_column_filters(&mut self) {
        for column in &mut self.columns {
            column.set_filter_value(None);
            column.set_text_filter("");
        }
    }

    pub fn visible_rows(&self) -> Vec<&GridRow> {
        self.rows
            .iter()
            .filter(|row| self.columns.iter().all(|c| c.passes(row)))
            .collect()
    }

    /// Count of each value of `column_id` over rows that pass every other
    /// column's filters; the column's own filter is ignored.
    pub fn faceted_unique_values(&self, column_id: &str) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            let passes_others = self.columns.iter().filter(|c| c.id != column_id).all(|c| c.passes(row));
            if !passes_others {
                continue;
            }
            if let Some(value) = row.get(column_id) {
                *counts.entry(value.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}
