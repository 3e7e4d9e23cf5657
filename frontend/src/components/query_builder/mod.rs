//! Query builder: "Add filter" popover plus one chip per active filter.

use std::sync::atomic::{AtomicU64, Ordering};

use common::filter_condition::FilterCondition;
use common::filter_config::FilterConfig;
use common::filter_entry::ActiveFilter;
use common::query_builder::{QueryBuilderEvent, QueryBuilderState};
use dioxus::prelude::*;

use crate::components::query_builder::add_filter_menu::AddFilterMenu;
use crate::components::filter_chips::filter_indicator::FilterIndicator;

pub mod add_filter_menu;

static NEXT_BUILDER_SCOPE: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy)]
pub(crate) struct QueryBuilderContext {
    pub state: Signal<QueryBuilderState>,
    pub dispatch: Callback<QueryBuilderEvent>,
}

#[component]
pub fn QueryBuilder(filter_configs: Vec<FilterConfig>, on_filters_change: Option<Callback<Vec<ActiveFilter>>>) -> Element {
    let scope = use_hook(|| format!("query-builder-{}", NEXT_BUILDER_SCOPE.fetch_add(1, Ordering::Relaxed)));
    let mut state = use_signal(move || QueryBuilderState::new(scope, filter_configs));

    let dispatch = use_callback(move |event: QueryBuilderEvent| {
        let (next, notification) = (*state.peek()).clone().apply_event(event);
        state.set(next);
        // the observer sees the committed list, never an intermediate one
        if let (Some(filters), Some(on_filters_change)) = (notification, on_filters_change) {
            on_filters_change.call(filters);
        }
    });
    use_context_provider(|| QueryBuilderContext { state, dispatch });

    let filters = state.read().active_filters();
    let conditions = state.read().conditions().to_vec();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                width: 100%;
            ",
            AddFilterMenu {}
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; align-items: center; gap: 8px;",
                for filter in filters {
                    QueryBuilderChip {
                        key: "{filter.id}",
                        filter: filter.clone(),
                        conditions: conditions.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn QueryBuilderChip(filter: ActiveFilter, conditions: Vec<FilterCondition>) -> Element {
    let context = use_context::<QueryBuilderContext>();
    let dispatch = context.dispatch;
    let update_id = filter.id.clone();
    let remove_id = filter.id.clone();

    rsx! {
        FilterIndicator {
            field: filter.field.clone(),
            label: filter.value.clone(),
            condition: filter.condition,
            conditions,
            on_condition_change: move |condition: FilterCondition| {
                dispatch.call(QueryBuilderEvent::UpdateCondition { id: update_id.clone(), condition });
            },
            on_clear: move |_: ()| {
                dispatch.call(QueryBuilderEvent::RemoveFilter { id: remove_id.clone() });
            },
        }
    }
}
