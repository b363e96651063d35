//! The submit/response cycle: notifications, the summary callback, and the
//! silent-load failure path.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use growthcast_api::{ForecastClient, ParameterSet, UpdateResponse, YearlySummary};
use serde_json::json;

use crate::app::App;
use crate::state::Severity;
use crate::worker::ApiResponse;

/// App wired to an address nothing listens on; every test below drives
/// `handle_response` directly, so no request is ever sent.
fn test_app() -> App {
    let client = ForecastClient::new("http://127.0.0.1:9", 1).unwrap();
    App::new(client)
}

fn success_response(summary: YearlySummary) -> UpdateResponse {
    UpdateResponse {
        status: "success".to_string(),
        message: None,
        yearly_summary: Some(summary),
    }
}

#[test]
fn submit_marks_the_request_in_flight_and_sends_it() {
    let mut app = test_app();
    app.submit();

    assert!(app.state.submitting);
    // The snapshot went to the worker; nothing listens on the address, so
    // a transport failure comes back.
    match app.worker.recv_timeout(Duration::from_secs(35)) {
        Some(ApiResponse::SubmitFinished(Err(_))) => {}
        other => panic!("unexpected worker response: {other:?}"),
    }
}

#[test]
fn submit_is_ignored_while_a_submission_is_in_flight() {
    let mut app = test_app();
    app.state.submitting = true;
    app.state.dirty = true;

    app.submit();

    assert!(app.state.submitting);
    assert!(app.state.dirty);
    assert!(!app.state.notification.open);
    // Nothing was sent, so the worker never produces a response.
    assert!(app.worker.recv_timeout(Duration::from_millis(300)).is_none());
}

#[test]
fn accepted_submission_notifies_and_invokes_the_callback_once() {
    let received: Rc<RefCell<Vec<YearlySummary>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let mut app = test_app().on_parameters_updated(Box::new(move |summary| {
        sink.borrow_mut().push(summary.clone());
    }));

    app.state.submitting = true;
    app.state.dirty = true;
    app.handle_response(ApiResponse::SubmitFinished(Ok(success_response(
        json!({"totalRevenue": 1000}),
    ))));

    assert_eq!(*received.borrow(), vec![json!({"totalRevenue": 1000})]);
    assert!(app.state.notification.open);
    assert_eq!(app.state.notification.severity, Severity::Success);
    assert_eq!(app.state.notification.message, "Parameters updated successfully!");
    assert!(!app.state.submitting);
    assert!(!app.state.dirty);
    assert_eq!(app.state.last_summary, Some(json!({"totalRevenue": 1000})));
}

#[test]
fn accepted_submission_without_a_summary_skips_the_callback() {
    let received: Rc<RefCell<Vec<YearlySummary>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let mut app = test_app().on_parameters_updated(Box::new(move |summary| {
        sink.borrow_mut().push(summary.clone());
    }));

    app.state.submitting = true;
    app.handle_response(ApiResponse::SubmitFinished(Ok(UpdateResponse {
        status: "success".to_string(),
        message: None,
        yearly_summary: None,
    })));

    assert!(received.borrow().is_empty());
    assert!(app.state.notification.open);
    assert!(app.state.last_summary.is_none());
}

#[test]
fn rejected_submission_shows_the_server_message() {
    let received: Rc<RefCell<Vec<YearlySummary>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let mut app = test_app().on_parameters_updated(Box::new(move |summary| {
        sink.borrow_mut().push(summary.clone());
    }));

    app.state.submitting = true;
    app.handle_response(ApiResponse::SubmitFinished(Ok(UpdateResponse {
        status: "error".to_string(),
        message: Some("Invalid rate".to_string()),
        yearly_summary: None,
    })));

    assert!(received.borrow().is_empty());
    assert_eq!(app.state.notification.message, "Invalid rate");
    assert_eq!(app.state.notification.severity, Severity::Error);
    assert!(!app.state.submitting);
}

#[test]
fn rejected_submission_without_a_message_uses_the_fallback() {
    let mut app = test_app();
    app.state.submitting = true;
    app.handle_response(ApiResponse::SubmitFinished(Ok(UpdateResponse {
        status: "error".to_string(),
        message: None,
        yearly_summary: None,
    })));

    assert_eq!(app.state.notification.message, "Failed to update parameters");
}

#[test]
fn transport_failure_shows_the_generic_message_and_keeps_the_parameters() {
    let mut app = test_app();
    app.state.submitting = true;
    app.handle_response(ApiResponse::SubmitFinished(Err(
        "connection refused".to_string(),
    )));

    assert_eq!(
        app.state.notification.message,
        "An error occurred while updating parameters"
    );
    assert_eq!(app.state.notification.severity, Severity::Error);
    assert!(!app.state.submitting);
    assert_eq!(app.state.params, ParameterSet::default());
}

#[test]
fn failed_startup_load_silently_keeps_every_default() {
    let mut app = test_app();
    app.handle_response(ApiResponse::ParametersLoaded(Err(
        "connection refused".to_string(),
    )));

    // No user-visible error for this path
    assert!(!app.state.notification.open);

    let p = &app.state.params;
    assert_eq!(p.initial_clients, 100);
    assert_eq!(p.initial_developers, 50);
    assert_eq!(p.initial_affiliates, 20);
    assert_eq!(p.client_growth_rates, vec![0.08, 0.10, 0.12, 0.15, 0.18]);
    assert_eq!(p.developer_growth_rates, vec![0.05, 0.07, 0.09, 0.11, 0.13]);
    assert_eq!(p.affiliate_growth_rates, vec![0.07, 0.09, 0.12, 0.14, 0.16]);
    assert_eq!(p.subscription_price, 20.0);
    assert_eq!(p.affiliate_commission, 5.0);
    assert_eq!(p.marketing_percentage, 0.15);
    assert_eq!(p.infrastructure_cost_per_user, 2.0);
    assert_eq!(p.other_expenses_percentage, 0.10);
    assert_eq!(p.base_salary, 7000.0);
    assert_eq!(p.salary_increase, 0.05);
}

#[test]
fn successful_startup_load_replaces_the_parameters_wholesale() {
    let mut app = test_app();
    let mut stored = ParameterSet::default();
    stored.initial_clients = 400;
    stored.subscription_price = 35.0;

    app.handle_response(ApiResponse::ParametersLoaded(Ok(Some(stored.clone()))));

    assert_eq!(app.state.params, stored);
    assert!(!app.state.notification.open);
}

#[test]
fn empty_startup_load_keeps_the_defaults() {
    let mut app = test_app();
    app.handle_response(ApiResponse::ParametersLoaded(Ok(None)));
    assert_eq!(app.state.params, ParameterSet::default());
}
