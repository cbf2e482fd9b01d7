//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for routing decisions that give
//! more meaningful error messages than standard assertions.

use domain_fnol::{MandatoryField, Route, RouteDecision, RoutingFlag};

/// Asserts that a decision recommends the expected route
///
/// # Panics
///
/// Panics with the decision's reasoning when the routes differ
pub fn assert_route(decision: &RouteDecision, expected: Route) {
    assert_eq!(
        decision.route, expected,
        "Expected route {}, got {} ({})",
        expected, decision.route, decision.reasoning
    );
}

/// Asserts that a decision is ready for automated processing
pub fn assert_decision_ready(decision: &RouteDecision) {
    assert!(
        decision.decision_ready,
        "Expected a decision-ready claim, got {} ({})",
        decision.route, decision.reasoning
    );
}

/// Asserts that a decision needs human attention before processing
pub fn assert_needs_attention(decision: &RouteDecision) {
    assert!(
        !decision.decision_ready,
        "Expected a claim needing attention, got decision-ready {} ({})",
        decision.route, decision.reasoning
    );
}

/// Asserts that a specific mandatory field was reported missing
pub fn assert_missing(decision: &RouteDecision, field: MandatoryField) {
    assert!(
        decision.missing_fields.contains(field),
        "Expected '{}' among missing fields, got {:?}",
        field.label(),
        decision.missing_fields.labels()
    );
}

/// Asserts that no mandatory fields were reported missing
pub fn assert_nothing_missing(decision: &RouteDecision) {
    assert!(
        decision.missing_fields.is_empty(),
        "Expected no missing mandatory fields, got {:?}",
        decision.missing_fields.labels()
    );
}

/// Asserts that the decision carries a specific flag
pub fn assert_flagged(decision: &RouteDecision, flag: RoutingFlag) {
    assert!(
        decision.flags.contains(&flag),
        "Expected flag '{}', got {:?}",
        flag.as_str(),
        decision.flags
    );
}

/// Asserts that the decision carries no flags
pub fn assert_unflagged(decision: &RouteDecision) {
    assert!(
        decision.flags.is_empty(),
        "Expected no flags, got {:?}",
        decision.flags
    );
}

/// Asserts that the reasoning mentions a fragment
pub fn assert_reasoning_mentions(decision: &RouteDecision, fragment: &str) {
    assert!(
        decision.reasoning.contains(fragment),
        "Reasoning \"{}\" does not mention \"{}\"",
        decision.reasoning,
        fragment
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
