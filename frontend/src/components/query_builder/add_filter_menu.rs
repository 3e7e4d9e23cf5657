use common::filter_config::FilterInputType;
use common::query_builder::QueryBuilderEvent;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdFilterList};

use crate::components::filter_chips::popover::{EmptyHint, MenuItem, PopoverPanel};
use crate::components::filter_chips::search_box::SearchBox;
use crate::components::query_builder::QueryBuilderContext;

#[component]
pub fn AddFilterMenu() -> Element {
    let context = use_context::<QueryBuilderContext>();
    let state = context.state;
    let dispatch = context.dispatch;
    let open = state.read().selection().open;
    let editing_field = state.read().selection().current_field.is_some();

    rsx! {
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
                onclick: move |_| dispatch.call(QueryBuilderEvent::SetOpen(!open)),
                Icon { icon: MdFilterList, style: "width: 16px; height: 16px;" }
                "Add filter"
            }
            if open {
                PopoverPanel {
                    on_close: move |_: ()| dispatch.call(QueryBuilderEvent::SetOpen(false)),
                    if editing_field {
                        FieldOptionList {}
                    } else {
                        FieldList {}
                    }
                }
            }
        }
    }
}

#[component]
fn FieldList() -> Element {
    let context = use_context::<QueryBuilderContext>();
    let dispatch = context.dispatch;
    let search_term = context.state.read().selection().search_term.clone();
    let needle = search_term.to_lowercase();
    let fields = context
        .state
        .read()
        .configs()
        .iter()
        .map(|config| config.field.clone())
        .filter(|field| field.to_lowercase().contains(&needle))
        .collect::<Vec<_>>();

    rsx! {
        SearchBox {
            placeholder: "Search filter...".to_string(),
            value: search_term,
            on_input: move |text: String| dispatch.call(QueryBuilderEvent::SetSearchTerm(text)),
        }
        if fields.is_empty() {
            EmptyHint { text: "No filter found.".to_string() }
        }
        for field in fields {
            FieldItem { key: "{field}", field: field.clone() }
        }
    }
}

#[component]
fn FieldItem(field: String) -> Element {
    let dispatch = use_context::<QueryBuilderContext>().dispatch;
    let label = field.clone();
    rsx! {
        MenuItem {
            on_select: move |_: ()| dispatch.call(QueryBuilderEvent::SelectField(field.clone())),
            span { style: "text-transform: capitalize;", "{label}" }
        }
    }
}

#[component]
fn FieldOptionList() -> Element {
    let context = use_context::<QueryBuilderContext>();
    let dispatch = context.dispatch;
    let state = context.state.read();
    let Some(config) = state.current_config() else {
        return rsx! {};
    };
    let field = config.field.clone();
    let is_text = config.input_type == FilterInputType::Text;
    let search_term = state.selection().search_term.clone();
    let options = state.filtered_options();
    drop(state);

    let on_enter = is_text.then_some(Callback::new(move |_: ()| dispatch.call(QueryBuilderEvent::SubmitSearchTerm)));

    rsx! {
        SearchBox {
            placeholder: format!("Search {field}..."),
            value: search_term,
            on_input: move |text: String| dispatch.call(QueryBuilderEvent::SetSearchTerm(text)),
            on_enter,
        }
        if is_text {
            EmptyHint { text: "Press Enter to add the typed value.".to_string() }
        } else if options.is_empty() {
            EmptyHint { text: "No options found.".to_string() }
        }
        for option in options {
            OptionItem { key: "{option}", option: option.clone() }
        }
    }
}

#[component]
fn OptionItem(option: String) -> Element {
    let dispatch = use_context::<QueryBuilderContext>().dispatch;
    let label = option.clone();
    rsx! {
        MenuItem {
            on_select: move |_: ()| dispatch.call(QueryBuilderEvent::SelectOption(option.clone())),
            "{label}"
        }
    }
}
