use common::column_filter::{ColumnFilterEvent, ColumnFilterState};
use common::filter_config::ColumnFilterDef;
use common::grid::DataGrid;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::data_table::TableFilterContext;
use crate::components::data_table::data_table_filter::DataTableFilter;

pub const TITLE_COLUMN: &str = "title";

#[component]
pub fn DataTableToolbar(mut grid: Signal<DataGrid>, filters: Vec<ColumnFilterDef>) -> Element {
    let mut state = use_signal(move || ColumnFilterState::new(filters));

    let dispatch = use_callback(move |event: ColumnFilterEvent| {
        let (next, changes) = (*state.peek()).clone().apply_event(event);
        state.set(next);
        // column filter values are read back from the committed state
        if !changes.is_empty() {
            debug!("pushing {} column filter change(s) to the grid", changes.len());
            grid.write().apply_changes(&changes);
        }
    });
    use_context_provider(|| TableFilterContext { state, grid, dispatch });

    let title_filter = grid
        .read()
        .column(TITLE_COLUMN)
        .map(|column| column.text_filter().to_string())
        .unwrap_or_default();
    let is_filtered = grid.read().is_filtered();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                width: 100%;
            ",
            input {
                r#type: "text",
                placeholder: "Filter tasks...",
                style: "
                    height: 32px;
                    width: 250px;
                    padding: 0px 10px;
                    border: 1px solid #E2E8F0;
                    border-radius: 6px;
                    font-size: 14px;
                    outline: none;
                ",
                value: "{title_filter}",
                oninput: move |event: Event<FormData>| {
                    grid.write().set_text_filter(TITLE_COLUMN, &event.value());
                },
            }
            DataTableFilter {}
            if is_filtered {
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        height: 32px;
                        padding: 0px 8px;
                        border: none;
                        background: none;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        dispatch.call(ColumnFilterEvent::ClearAll);
                        grid.write().reset_column_filters();
                    },
                    "Reset"
                    Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                }
            }
        }
    }
}
