use common::filter_condition::FilterCondition;
use dioxus::prelude::*;

use crate::components::filter_chips::popover::{MenuItem, PopoverPanel};

#[component]
pub fn ConditionSelector(
    current_condition: FilterCondition,
    conditions: Vec<FilterCondition>,
    on_condition_select: Callback<FilterCondition>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            style: "position: relative;",
            button {
                class: "x-chip-button",
                style: "
                    height: 28px;
                    padding: 0px 8px;
                    border: none;
                    border-left: 1px solid #E2E8F0;
                    border-right: 1px solid #E2E8F0;
                    background: none;
                    color: #64748B;
                    font-size: 13px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let was_open = *open.read();
                    open.set(!was_open);
                },
                "{current_condition}"
            }
            if open() {
                PopoverPanel {
                    width: 160,
                    on_close: move |_: ()| open.set(false),
                    for condition in conditions.iter().copied() {
                        MenuItem {
                            key: "{condition}",
                            on_select: move |_: ()| {
                                on_condition_select.call(condition);
                                open.set(false);
                            },
                            "{condition}"
                        }
                    }
                }
            }
        }
    }
}
