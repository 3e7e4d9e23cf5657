#[path = "common/utilities.rs"]
mod utilities;

use common::filter_condition::FilterCondition;
use common::filter_entry::ActiveFilter;
use common::query_builder::{QueryBuilderEvent, QueryBuilderState};

use utilities::load_filter_configs;

fn run(state: QueryBuilderState, events: Vec<QueryBuilderEvent>) -> (QueryBuilderState, Vec<Vec<ActiveFilter>>) {
    let mut notifications = Vec::new();
    let mut state = state;
    for event in events {
        let (next, notification) = state.apply_event(event);
        state = next;
        notifications.extend(notification);
    }
    (state, notifications)
}

#[test]
fn popover_flow_reports_full_list_after_each_mutation() {
    let state = QueryBuilderState::new("builder", load_filter_configs());
    let (state, notifications) = run(
        state,
        vec![
            QueryBuilderEvent::SetOpen(true),
            QueryBuilderEvent::SelectField("status".into()),
            QueryBuilderEvent::SelectOption("active".into()),
            QueryBuilderEvent::SetOpen(true),
            QueryBuilderEvent::SelectField("type".into()),
            QueryBuilderEvent::SetSearchTerm("tick".into()),
            QueryBuilderEvent::SelectOption("ticket".into()),
            QueryBuilderEvent::SetOpen(true),
            QueryBuilderEvent::SelectField("status".into()),
            QueryBuilderEvent::SelectOption("pending".into()),
        ],
    );

    let lengths: Vec<_> = notifications.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![1, 2, 3]);
    let last = notifications.last().unwrap();
    let values: Vec<_> = last.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(values, vec!["active", "pending", "ticket"]);
    assert!(!state.selection().open);
}

#[test]
fn notification_serializes_with_condition_labels() {
    let state = QueryBuilderState::new("builder", load_filter_configs());
    let (_, notifications) = run(
        state,
        vec![QueryBuilderEvent::AddFilter { field: "status".into(), value: "inactive".into(), condition: FilterCondition::IsNot }],
    );
    let json = serde_json::to_value(&notifications[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "id": "builder-status-inactive-0", "field": "status", "value": "inactive", "condition": "is not" }])
    );
}

#[test]
fn removing_and_updating_missing_ids_is_silent() {
    let state = QueryBuilderState::new("builder", load_filter_configs());
    let (state, notifications) = run(
        state,
        vec![
            QueryBuilderEvent::RemoveFilter { id: "builder-status-active-0".into() },
            QueryBuilderEvent::UpdateCondition { id: "nope".into(), condition: FilterCondition::IsNot },
            QueryBuilderEvent::ClearField { field: "type".into() },
        ],
    );
    assert!(notifications.is_empty());
    assert!(state.filters().is_empty());
}

#[test]
fn text_field_accepts_typed_values() {
    let state = QueryBuilderState::new("builder", load_filter_configs());
    let (state, notifications) = run(
        state,
        vec![
            QueryBuilderEvent::SetOpen(true),
            QueryBuilderEvent::SelectField("owner".into()),
            QueryBuilderEvent::SetSearchTerm("dana".into()),
            QueryBuilderEvent::SubmitSearchTerm,
        ],
    );
    assert_eq!(notifications.len(), 1);
    assert_eq!(state.filters().get("owner").map(|f| f[0].value.clone()), Some("dana".to_string()));
}
