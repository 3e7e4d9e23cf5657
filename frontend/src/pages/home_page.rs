use common::filter_entry::ActiveFilter;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::error_boundary::DataLoadError;
use crate::components::query_builder::QueryBuilder;
use crate::data_definitions::demo_data::query_builder_configs;


/// Query builder demo: the builder plus the last list it reported.
#[component]
pub fn HomePage() -> Element {
    let mut filters = use_signal(Vec::<ActiveFilter>::new);
    let handle_filters_change = use_callback(move |new_filters: Vec<ActiveFilter>| {
        info!("Current filters: {:?}", new_filters);
        filters.set(new_filters);
    });
    let filter_configs = match query_builder_configs() {
        Err(e) => return rsx! { DataLoadError { dataset: "the query builder fields", error: format!("{:#}", e) } },
        Ok(configs) => configs,
    };
    let filters_json = serde_json::to_string_pretty(&*filters.read()).unwrap_or_default();

    rsx! {
        Title { "Filters - Query builder" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 40px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            div {
                style: "flex: 1 1 auto; max-width: 600px;",
                QueryBuilder {
                    filter_configs,
                    on_filters_change: Some(handle_filters_change),
                }
            }
            div {
                style: "
                    width: 288px;
                    font-size: 12px;
                    background-color: #F3F4F6;
                    border: 1px solid #D1D5DB;
                    padding-left: 16px;
                ",
                pre { "{filters_json}" }
            }
        }
    }
}
