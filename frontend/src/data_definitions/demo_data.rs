//! Embedded demo configuration and task rows.

use anyhow::Context;
use common::filter_config::{ColumnFilterDef, FilterConfig};
use common::grid::{DataGrid, GridColumn, GridRow};

const FILTER_CONFIGS_JSON: &str = include_str!("../../data/filter_configs.json");
const COLUMN_FILTERS_JSON: &str = include_str!("../../data/column_filters.json");
const TASKS_JSON: &str = include_str!("../../data/tasks.json");

/// Columns of the task table, in display order.
pub const TASK_COLUMNS: [(&str, &str); 4] = [
    ("id", "Task"),
    ("title", "Title"),
    ("status", "Status"),
    ("priority", "Priority"),
];

pub fn query_builder_configs() -> anyhow::Result<Vec<FilterConfig>> {
    FilterConfig::list_from_json(FILTER_CONFIGS_JSON).context("query builder configuration")
}

pub fn task_column_filters() -> anyhow::Result<Vec<ColumnFilterDef>> {
    ColumnFilterDef::list_from_json(COLUMN_FILTERS_JSON).context("column filter configuration")
}

pub fn task_grid() -> anyhow::Result<DataGrid> {
    let rows: Vec<GridRow> = serde_json::from_str(TASKS_JSON).context("task rows")?;
    let columns = TASK_COLUMNS
        .iter()
        .map(|(id, title)| GridColumn::new(*id, *title))
        .collect();
    Ok(DataGrid::new(columns, rows))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_parses() {
        assert_eq!(query_builder_configs().unwrap().len(), 2);
        let defs = task_column_filters().unwrap();
        let grid = task_grid().unwrap();
        assert!(!grid.rows().is_empty());
        for def in &defs {
            assert!(grid.column(&def.column_id).is_some(), "no column for {}", def.column_id);
        }
    }
}
