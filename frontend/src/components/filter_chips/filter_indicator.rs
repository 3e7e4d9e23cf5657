use common::filter_condition::FilterCondition;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::filter_chips::condition_selector::ConditionSelector;

/// Chip showing `field | condition | value` with a clear button.
#[component]
pub fn FilterIndicator(
    field: String,
    label: String,
    condition: FilterCondition,
    conditions: Vec<FilterCondition>,
    on_condition_change: Callback<FilterCondition>,
    on_clear: Callback<()>,
) -> Element {
    rsx! {
        div {
            style: "
                display: inline-flex;
                flex-direction: row;
                align-items: center;
                height: 28px;
                border: 1px solid #E5E7EB;
                border-radius: 6px;
                background-color: white;
                box-shadow: 0 1px 2px rgba(0,0,0,0.05);
                font-size: 13px;
                flex-shrink: 0;
            ",
            span {
                style: "padding: 0px 8px; font-size: 12px; text-transform: capitalize;",
                "{field}"
            }
            ConditionSelector {
                current_condition: condition,
                conditions,
                on_condition_select: on_condition_change,
            }
            span {
                style: "padding: 0px 8px; font-size: 12px; color: #4B5563; text-transform: capitalize;",
                "{label}"
            }
            button {
                class: "x-chip-button",
                title: "Clear filter",
                style: "
                    display: flex;
                    align-items: center;
                    height: 28px;
                    padding: 0px 4px;
                    border: none;
                    border-left: 1px solid #E2E8F0;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| on_clear.call(()),
                Icon { icon: MdClose, style: "width: 12px; height: 12px; color: #4B5563;" }
            }
        }
    }
}
