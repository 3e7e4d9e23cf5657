use common::filter_config::ColumnFilterDef;
use common::grid::DataGrid;
use dioxus::prelude::*;

use crate::components::data_table::data_table_toolbar::DataTableToolbar;
use crate::components::data_table::task_table::TaskTable;
use crate::components::error_boundary::{DataLoadError, TableErrorBoundary};
use crate::data_definitions::demo_data::{task_column_filters, task_grid};


#[component]
pub fn TasksPage() -> Element {
    let loaded = use_hook(|| {
        task_grid()
            .and_then(|grid| Ok((grid, task_column_filters()?)))
            .map_err(|e| format!("{:#}", e))
    });

    rsx! {
        Title { "Filters - Tasks" }
        div {
            id: "x-tasks-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            h1 { style: "font-size: 24px; font-weight: 600; margin: 0px;", "Tasks" }
            match loaded {
                Ok((grid, filters)) => rsx! {
                    TableErrorBoundary {
                        TaskBoard { initial_grid: grid, filters }
                    }
                },
                Err(error) => rsx! { DataLoadError { dataset: "the task table", error } },
            }
        }
    }
}

#[component]
fn TaskBoard(initial_grid: DataGrid, filters: Vec<ColumnFilterDef>) -> Element {
    let grid = use_signal(move || initial_grid);
    rsx! {
        DataTableToolbar { grid, filters }
        TaskTable { grid }
    }
}
