//! Standard output and decision export
//!
//! Builds the two downstream documents: the standard output consumed by
//! the claim-form presentation (camelCase keys) and the full decision
//! export offered for download (snake_case keys).

use serde::Serialize;
use tracing::{debug, instrument};

use domain_fnol::{
    missing_field_labels, FnolDocument, FnolRouter, Route, RouteDecision, RoutingFlag,
};

/// The standard output document
///
/// Serializes with exactly the four keys the downstream form expects:
/// `extractedFields`, `missingFields`, `recommendedRoute`, `reasoning`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardOutput {
    /// The full nested document
    pub extracted_fields: FnolDocument,
    /// Informational catalog scan: labels of every empty field
    pub missing_fields: Vec<&'static str>,
    /// Recommended routing queue token
    pub recommended_route: Route,
    /// Verbatim routing justification
    pub reasoning: String,
}

impl StandardOutput {
    /// Builds the standard output for a document and its decision.
    #[instrument(skip(doc, decision), fields(route = %decision.route))]
    pub fn build(doc: &FnolDocument, decision: &RouteDecision) -> Self {
        let output = Self {
            extracted_fields: doc.clone(),
            missing_fields: missing_field_labels(doc),
            recommended_route: decision.route,
            reasoning: decision.reasoning.clone(),
        };
        debug!(missing = output.missing_fields.len(), "standard output built");
        output
    }

    /// Evaluates the document and builds its standard output in one step.
    pub fn from_document(doc: &FnolDocument) -> Self {
        let decision = FnolRouter::evaluate(doc);
        Self::build(doc, &decision)
    }
}

/// The full decision export
///
/// Carries the complete decision alongside the extracted data, for
/// download or archival by downstream consumers.
#[derive(Debug, Serialize)]
pub struct DecisionExport {
    /// Recommended routing queue token
    pub recommended_route: Route,
    /// Verbatim routing justification
    pub reasoning: String,
    /// Flags for the rules that fired
    pub flags: Vec<RoutingFlag>,
    /// Whether the claim can proceed without human attention
    pub is_decision_ready: bool,
    /// The full nested document
    pub extracted_data: FnolDocument,
}

impl DecisionExport {
    /// Builds the decision export for a document and its decision.
    pub fn build(doc: &FnolDocument, decision: &RouteDecision) -> Self {
        Self {
            recommended_route: decision.route,
            reasoning: decision.reasoning.clone(),
            flags: decision.flags.clone(),
            is_decision_ready: decision.decision_ready,
            extracted_data: doc.clone(),
        }
    }

    /// Evaluates the document and builds its export in one step.
    pub fn from_document(doc: &FnolDocument) -> Self {
        let decision = FnolRouter::evaluate(doc);
        Self::build(doc, &decision)
    }
}
