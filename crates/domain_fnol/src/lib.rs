//! FNOL Intake Domain
//!
//! This crate implements the decision core for First Notice of Loss
//! intake: the document model, mandatory-field validation, and the
//! routing cascade.
//!
//! # Decision Flow
//!
//! ```text
//! FnolDocument -> Validator -> (document, missing fields) -> Router -> RouteDecision
//! ```
//!
//! Every operation is pure and total. Missing mandatory data routes the
//! claim to manual review instead of failing, and unparsable optional
//! data reads as absent, so no document is ever rejected by this crate.

pub mod document;
pub mod fields;
pub mod routing;
pub mod validation;

pub use document::{Asset, ContactDetails, FnolDocument, Incident, Parties, Party, Policy, Status};
pub use fields::{missing_field_labels, ClaimField, FieldSection};
pub use routing::{
    FnolRouter, Route, RouteDecision, RoutingFlag, FAST_TRACK_DAMAGE_THRESHOLD,
    INVESTIGATION_KEYWORDS,
};
pub use validation::{FnolValidator, MandatoryField, MissingFields};
