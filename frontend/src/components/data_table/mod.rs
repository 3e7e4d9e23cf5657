//! Task table with a toolbar that drives the grid's column filters.

use common::column_filter::{ColumnFilterEvent, ColumnFilterState};
use common::grid::DataGrid;
use dioxus::prelude::*;

pub mod data_table_filter;
pub mod data_table_toolbar;
pub mod task_table;

#[derive(Clone, Copy)]
pub(crate) struct TableFilterContext {
    pub state: Signal<ColumnFilterState>,
    pub grid: Signal<DataGrid>,
    pub dispatch: Callback<ColumnFilterEvent>,
}
