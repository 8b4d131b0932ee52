#![allow(clippy::unwrap_used, clippy::expect_used)]

use lgrammar_core::errors::GrammarError;
use lgrammar_core::logging_facility::test_capture::init_test_capture;
use lgrammar_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_WORD_LEN,
};
use lgrammar_core::{log_op_end, log_op_error, log_op_start};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, generations = 3);

    let events = capture.events_for(op_name, EVENT_START);
    assert_eq!(events.len(), 1, "Should have exactly one start event");
    assert_eq!(events[0].field("generations"), Some("3"));
    assert_eq!(events[0].level, Level::INFO);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name, EVENT_END);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = GrammarError::no_rule_for_seed(&'Q');
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(events.len(), 1, "Should have exactly one error event");

    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.field(FIELD_ERR_CODE), Some("ERR_NO_RULE_FOR_SEED"));
    assert_eq!(event.field(FIELD_ERR_KIND), Some("NoRuleForSeed"));
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_4";

    log_op_start!(op_name, symbol = "A");
    log_op_end!(op_name, duration_ms = 1, word_len = 13);

    assert_eq!(
        capture.count_events(|e| e.op.as_deref() == Some(op_name)),
        2
    );
    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);

    let end = &capture.events_for(op_name, EVENT_END)[0];
    assert_eq!(end.field(FIELD_WORD_LEN), Some("13"));
}

#[test]
fn test_component_field_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_5";

    log_op_start!(op_name);

    let start = &capture.events_for(op_name, EVENT_START)[0];
    assert_eq!(start.component.as_deref(), Some("logging_facility_tests"));
}
