//! FNOL routing rules
//!
//! Evaluates a claim document against the routing cascade and returns a
//! single recommended route with its justification. Rules are checked in
//! priority order and the first match wins:
//!
//! ```text
//! manual_review > investigation > specialist > fast_track > standard
//! ```
//!
//! Routing is stateless and total. Malformed or absent optional data can
//! change which rule fires but can never make evaluation fail.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::document::FnolDocument;
use crate::validation::{FnolValidator, MissingFields};

/// Description keywords that force investigation, scanned in order
pub const INVESTIGATION_KEYWORDS: [&str; 3] = ["fraud", "inconsistent", "staged"];

/// Damage estimates strictly below this amount are fast-track eligible
pub const FAST_TRACK_DAMAGE_THRESHOLD: Decimal = dec!(25000);

/// Routing queue for an FNOL claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Low-damage claim eligible for expedited settlement
    FastTrack,
    /// Blocked on missing mandatory data
    ManualReview,
    /// Fraud indicators present in the description
    Investigation,
    /// Injury claim handled by the specialist queue
    Specialist,
    /// Default processing queue
    Standard,
}

impl Route {
    /// Wire token for the route
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::FastTrack => "fast_track",
            Route::ManualReview => "manual_review",
            Route::Investigation => "investigation",
            Route::Specialist => "specialist",
            Route::Standard => "standard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flag recorded when a blocking or special-handling rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingFlag {
    MissingMandatoryFields,
    InvestigationKeywords,
    InjuryClaim,
}

impl RoutingFlag {
    /// Wire token for the flag
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingFlag::MissingMandatoryFields => "missing_mandatory_fields",
            RoutingFlag::InvestigationKeywords => "investigation_keywords",
            RoutingFlag::InjuryClaim => "injury_claim",
        }
    }
}

/// Result of routing evaluation
///
/// Immutable once produced; a fresh decision is constructed per
/// evaluation and decisions are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecision {
    /// Recommended routing queue
    pub route: Route,
    /// Human-readable justification for the route
    pub reasoning: String,
    /// Mandatory fields that forced manual review; empty for every other
    /// route
    pub missing_fields: MissingFields,
    /// Flag for the rule that fired, when rules 1-3 fire
    pub flags: Vec<RoutingFlag>,
    /// False when the claim needs human attention before processing
    pub decision_ready: bool,
}

/// Router for FNOL documents
///
/// # Examples
///
/// ```rust
/// use domain_fnol::document::FnolDocument;
/// use domain_fnol::routing::{FnolRouter, Route};
///
/// let decision = FnolRouter::evaluate(&FnolDocument::default());
/// assert_eq!(decision.route, Route::ManualReview);
/// assert!(!decision.decision_ready);
/// ```
pub struct FnolRouter;

impl FnolRouter {
    /// Validates the document and routes it in one pass.
    pub fn evaluate(doc: &FnolDocument) -> RouteDecision {
        let missing = FnolValidator::validate(doc);
        let decision = Self::route(doc, missing);
        debug!(
            route = %decision.route,
            missing = decision.missing_fields.len(),
            decision_ready = decision.decision_ready,
            "fnol routed"
        );
        decision
    }

    /// Routes a validated document given its missing mandatory fields.
    ///
    /// First match wins; exactly one rule produces the decision.
    pub fn route(doc: &FnolDocument, missing: MissingFields) -> RouteDecision {
        // 1) Missing mandatory data blocks auto-routing.
        if !missing.is_empty() {
            let reasoning = format!("Missing mandatory field(s): {}.", missing.joined_labels());
            return RouteDecision {
                route: Route::ManualReview,
                reasoning,
                missing_fields: missing,
                flags: vec![RoutingFlag::MissingMandatoryFields],
                decision_ready: false,
            };
        }

        // 2) Investigation indicators in the description.
        if let Some(keyword) = first_investigation_keyword(doc) {
            return RouteDecision {
                route: Route::Investigation,
                reasoning: format!("Description contains indicator: \"{keyword}\"."),
                missing_fields: missing,
                flags: vec![RoutingFlag::InvestigationKeywords],
                decision_ready: false,
            };
        }

        // 3) Injury claims go to the specialist queue.
        if is_injury_claim(doc) {
            return RouteDecision {
                route: Route::Specialist,
                reasoning: "Claim type is 'injury'; routed to specialist queue.".to_string(),
                missing_fields: missing,
                flags: vec![RoutingFlag::InjuryClaim],
                decision_ready: true,
            };
        }

        // 4) Low damage estimates are fast-track eligible. Absent,
        //    unparsable, or negative estimates skip this rule; the
        //    threshold itself is not below the threshold.
        if let Some(damage) = doc.estimated_damage() {
            if damage >= Decimal::ZERO && damage < FAST_TRACK_DAMAGE_THRESHOLD {
                return RouteDecision {
                    route: Route::FastTrack,
                    reasoning: format!(
                        "Estimated damage ({}) is below {}. Fast-track eligible.",
                        damage.normalize(),
                        FAST_TRACK_DAMAGE_THRESHOLD
                    ),
                    missing_fields: missing,
                    flags: Vec::new(),
                    decision_ready: true,
                };
            }
        }

        // 5) Nothing special applies.
        RouteDecision {
            route: Route::Standard,
            reasoning: "No fast-track, specialist, or investigation criteria met; \
                        standard processing."
                .to_string(),
            missing_fields: missing,
            flags: Vec::new(),
            decision_ready: true,
        }
    }
}

/// First keyword from `INVESTIGATION_KEYWORDS` found in the description,
/// scanning in list order regardless of position in the text.
fn first_investigation_keyword(doc: &FnolDocument) -> Option<&'static str> {
    let description = doc.incident_description()?.to_lowercase();
    INVESTIGATION_KEYWORDS
        .into_iter()
        .find(|keyword| description.contains(keyword))
}

/// Claim type equals "injury", case-insensitive. Equality, not substring:
/// "bodily injury" does not match.
fn is_injury_claim(doc: &FnolDocument) -> bool {
    doc.claim_type()
        .is_some_and(|claim_type| claim_type.eq_ignore_ascii_case("injury"))
}
