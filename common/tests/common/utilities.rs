use std::fs;
use std::path::PathBuf;

use common::filter_config::{ColumnFilterDef, FilterConfig};
use common::grid::{DataGrid, GridColumn, GridRow};

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(path).expect("fixture read")
}

#[allow(dead_code)]
pub fn load_filter_configs() -> Vec<FilterConfig> {
    FilterConfig::list_from_json(&fixture("filter_configs.json")).expect("fixture parse")
}

#[allow(dead_code)]
pub fn load_column_filters() -> Vec<ColumnFilterDef> {
    ColumnFilterDef::list_from_json(&fixture("column_filters.json")).expect("fixture parse")
}

#[allow(dead_code)]
pub fn load_task_grid() -> DataGrid {
    let rows: Vec<GridRow> = serde_json::from_str(&fixture("tasks.json")).expect("fixture parse");
    let columns = ["id", "title", "status", "priority"]
        .into_iter()
        .map(|id| GridColumn::new(id, id))
        .collect();
    DataGrid::new(columns, rows)
}

#[allow(dead_code)]
pub fn visible_ids(grid: &DataGrid) -> Vec<String> {
    grid.visible_rows().iter().map(|row| row["id"].clone()).collect()
}
