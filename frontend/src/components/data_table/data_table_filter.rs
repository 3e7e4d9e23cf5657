use common::column_filter::{ColumnFilterChip, ColumnFilterEvent};
use common::filter_condition::FilterCondition;
use common::filter_config::FilterOption;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdFilterList, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::components::data_table::TableFilterContext;
use crate::components::filter_chips::filter_indicator::FilterIndicator;
use crate::components::filter_chips::popover::{EmptyHint, MenuItem, PopoverPanel};
use crate::components::filter_chips::search_box::SearchBox;

#[component]
pub fn DataTableFilter() -> Element {
    let context = use_context::<TableFilterContext>();
    let dispatch = context.dispatch;
    let state = context.state.read();
    let chips = state.chips();
    let conditions = state.conditions().to_vec();
    let open = state.selection().open;
    let editing_column = state.selection().current_column.is_some();
    drop(state);

    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; align-items: center; gap: 8px;",
            for chip in chips {
                ColumnChip {
                    key: "{chip.column_id}-{chip.item.value}-{chip.item.condition}",
                    chip: chip.clone(),
                    conditions: conditions.clone(),
                }
            }
        }
        div {
            style: "position: relative; flex-shrink: 0;",
            button {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    height: 28px;
                    padding: 0px 8px;
                    border: 1px solid #E2E8F0;
                    border-radius: 6px;
                    background-color: white;
                    font-size: 13px;
                    cursor: pointer;
                ",
                onclick: move |_| dispatch.call(ColumnFilterEvent::SetOpen(!open)),
                Icon { icon: MdFilterList, style: "width: 16px; height: 16px;" }
                "Add filter"
            }
            if open {
                PopoverPanel {
                    on_close: move |_: ()| dispatch.call(ColumnFilterEvent::SetOpen(false)),
                    if editing_column {
                        ColumnOptionList {}
                    } else {
                        ColumnList {}
                    }
                }
            }
        }
    }
}

#[component]
fn ColumnChip(chip: ColumnFilterChip, conditions: Vec<FilterCondition>) -> Element {
    let dispatch = use_context::<TableFilterContext>().dispatch;
    let column_id = chip.column_id.clone();
    let value = chip.item.value.clone();
    let old = chip.item.condition;
    let (clear_column_id, clear_value) = (column_id.clone(), value.clone());

    rsx! {
        FilterIndicator {
            field: chip.column_id.clone(),
            label: chip.label.clone(),
            condition: old,
            conditions,
            on_condition_change: move |new: FilterCondition| {
                dispatch.call(ColumnFilterEvent::UpdateCondition {
                    column_id: column_id.clone(),
                    value: value.clone(),
                    old,
                    new,
                });
            },
            on_clear: move |_: ()| {
                dispatch.call(ColumnFilterEvent::Remove {
                    column_id: clear_column_id.clone(),
                    value: clear_value.clone(),
                    condition: old,
                });
            },
        }
    }
}

#[component]
fn ColumnList() -> Element {
    let context = use_context::<TableFilterContext>();
    let dispatch = context.dispatch;
    let search_term = context.state.read().selection().search_term.clone();
    let needle = search_term.to_lowercase();
    let columns = context
        .state
        .read()
        .defs()
        .iter()
        .filter(|def| def.title.to_lowercase().contains(&needle))
        .map(|def| (def.column_id.clone(), def.title.clone()))
        .collect::<Vec<_>>();

    rsx! {
        SearchBox {
            placeholder: "Search filter...".to_string(),
            value: search_term,
            on_input: move |text: String| dispatch.call(ColumnFilterEvent::SetSearchTerm(text)),
        }
        if columns.is_empty() {
            EmptyHint { text: "No filter found.".to_string() }
        }
        for (column_id, title) in columns {
            ColumnItem { key: "{column_id}", column_id: column_id.clone(), title: title.clone() }
        }
    }
}

#[component]
fn ColumnItem(column_id: String, title: String) -> Element {
    let dispatch = use_context::<TableFilterContext>().dispatch;
    rsx! {
        MenuItem {
            on_select: move |_: ()| dispatch.call(ColumnFilterEvent::SelectColumn(column_id.clone())),
            "{title}"
        }
    }
}

#[component]
fn ColumnOptionList() -> Element {
    let context = use_context::<TableFilterContext>();
    let dispatch = context.dispatch;
    let state = context.state.read();
    let Some(def) = state.current_def() else {
        return rsx! {};
    };
    let column_id = def.column_id.clone();
    let label = def.label().to_string();
    let search_term = state.selection().search_term.clone();
    let options = state
        .filtered_options()
        .into_iter()
        .map(|option| {
            let selected = state.is_selected(&option.value);
            (option, selected)
        })
        .collect::<Vec<_>>();
    drop(state);
    let facets = context.grid.read().faceted_unique_values(&column_id);

    rsx! {
        SearchBox {
            placeholder: format!("Search {label}..."),
            value: search_term,
            on_input: move |text: String| dispatch.call(ColumnFilterEvent::SetSearchTerm(text)),
        }
        if options.is_empty() {
            EmptyHint { text: "No options found.".to_string() }
        }
        for (option, selected) in options {
            OptionItem {
                key: "{option.value}",
                count: facets.get(&option.value).copied(),
                option: option.clone(),
                selected,
            }
        }
    }
}

#[component]
fn OptionItem(option: FilterOption, selected: bool, count: Option<u64>) -> Element {
    let dispatch = use_context::<TableFilterContext>().dispatch;
    let value = option.value.clone();
    rsx! {
        MenuItem {
            on_select: move |_: ()| dispatch.call(ColumnFilterEvent::SelectOption(value.clone())),
            if selected {
                Icon { icon: MdCheckBox, style: "width: 16px; height: 16px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 16px; height: 16px; color: #94A3B8; flex-shrink: 0;" }
            }
            span { "{option.label}" }
            div { style: "flex: 1 1 auto;" }
            if let Some(count) = count {
                span { style: "font-family: monospace; font-size: 12px; color: rgba(28, 33, 45, 0.7);", "{count}" }
            }
        }
    }
}
