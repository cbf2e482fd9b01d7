//! Comprehensive tests for domain_fnol

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use domain_fnol::document::{
    Asset, ContactDetails, FnolDocument, Incident, Parties, Party, Policy, Status,
};
use domain_fnol::fields::{missing_field_labels, ClaimField};
use domain_fnol::routing::{FnolRouter, Route, RouteDecision, RoutingFlag};
use domain_fnol::validation::{FnolValidator, MandatoryField};

/// A routable auto claim: POL-1, Jane Doe, 2024-01-01 rear-end collision,
/// 18500 damage.
fn rear_end_collision_claim() -> FnolDocument {
    FnolDocument {
        policy: Some(Policy {
            number: Some("POL-1".to_string()),
            holder_name: Some("Jane Doe".to_string()),
            effective_date_start: NaiveDate::from_ymd_opt(2023, 6, 1),
            effective_date_end: NaiveDate::from_ymd_opt(2024, 6, 1),
        }),
        incident: Some(Incident {
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            time: Some("08:15".to_string()),
            location: Some("Main St & 5th Ave".to_string()),
            description: Some("rear-end collision".to_string()),
        }),
        parties: Some(Parties {
            claimant: Some(Party {
                name: Some("Jane Doe".to_string()),
                role: Some("claimant".to_string()),
                contact: Some(ContactDetails {
                    phone: Some("555-0100".to_string()),
                    email: Some("jane.doe@example.com".to_string()),
                    address: None,
                }),
            }),
            third_parties: Vec::new(),
            contact_details: None,
        }),
        asset: Some(Asset {
            asset_type: Some("vehicle".to_string()),
            id: Some("VIN-123".to_string()),
            estimated_damage: Some(dec!(18500)),
            currency: Some("USD".to_string()),
        }),
        status: Some(Status {
            claim_type: Some("auto".to_string()),
            attachments: vec!["police_report.pdf".to_string()],
            initial_estimate: None,
            initial_estimate_currency: Some("USD".to_string()),
        }),
    }
}

// ============================================================================
// Validation Scenarios
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_complete_claim_validates_clean() {
        let missing = FnolValidator::validate(&rear_end_collision_claim());
        assert!(missing.is_empty());
    }

    #[test]
    fn test_only_policy_number_missing() {
        let mut doc = rear_end_collision_claim();
        doc.policy.as_mut().unwrap().number = None;

        let missing = FnolValidator::validate(&doc);
        assert_eq!(missing.labels(), vec!["Policy Number"]);
    }

    #[test]
    fn test_missing_report_order_is_fixed() {
        let mut doc = rear_end_collision_claim();
        doc.incident.as_mut().unwrap().date = None;
        doc.policy.as_mut().unwrap().number = Some(String::new());

        // Gaps appear in canonical order, not in mutation order.
        let missing = FnolValidator::validate(&doc);
        assert_eq!(missing.labels(), vec!["Policy Number", "Incident Date"]);
    }

    #[test]
    fn test_name_check_passes_with_only_claimant() {
        let mut doc = rear_end_collision_claim();
        doc.policy.as_mut().unwrap().holder_name = None;

        let missing = FnolValidator::validate(&doc);
        assert!(!missing.contains(MandatoryField::PolicyholderOrClaimantName));
    }

    #[test]
    fn test_name_check_passes_with_only_holder() {
        let mut doc = rear_end_collision_claim();
        doc.parties = None;

        let missing = FnolValidator::validate(&doc);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_non_mandatory_gaps_never_reported() {
        let mut doc = rear_end_collision_claim();
        doc.asset = None;
        doc.status = None;
        doc.incident.as_mut().unwrap().description = None;

        let missing = FnolValidator::validate(&doc);
        assert!(missing.is_empty());
    }
}

// ============================================================================
// Routing Scenarios
// ============================================================================

mod routing_tests {
    use super::*;

    #[test]
    fn test_rear_end_collision_fast_tracks_with_exact_reasoning() {
        let decision = FnolRouter::evaluate(&rear_end_collision_claim());

        assert_eq!(decision.route, Route::FastTrack);
        assert_eq!(
            decision.reasoning,
            "Estimated damage (18500) is below 25000. Fast-track eligible."
        );
        assert!(decision.missing_fields.is_empty());
        assert!(decision.flags.is_empty());
        assert!(decision.decision_ready);
    }

    #[test]
    fn test_missing_policy_number_forces_manual_review() {
        let mut doc = rear_end_collision_claim();
        doc.policy.as_mut().unwrap().number = None;

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::ManualReview);
        assert_eq!(decision.reasoning, "Missing mandatory field(s): Policy Number.");
        assert_eq!(decision.missing_fields.labels(), vec!["Policy Number"]);
        assert_eq!(decision.flags, vec![RoutingFlag::MissingMandatoryFields]);
        assert!(!decision.decision_ready);
    }

    #[test]
    fn test_manual_review_dominates_every_other_rule() {
        let mut doc = rear_end_collision_claim();
        doc.policy = None;
        doc.parties = None;
        doc.incident.as_mut().unwrap().description = Some("staged fraud".to_string());
        doc.status.as_mut().unwrap().claim_type = Some("injury".to_string());
        doc.asset.as_mut().unwrap().estimated_damage = Some(dec!(100));

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::ManualReview);
        assert_eq!(
            decision.reasoning,
            "Missing mandatory field(s): Policy Number, Policyholder/Claimant Name."
        );
    }

    #[test]
    fn test_uppercase_fraud_triggers_investigation() {
        let mut doc = rear_end_collision_claim();
        doc.incident.as_mut().unwrap().description =
            Some("Claimant statement suggests FRAUD".to_string());

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::Investigation);
        assert_eq!(decision.reasoning, "Description contains indicator: \"fraud\".");
        assert!(!decision.decision_ready);
    }

    #[test]
    fn test_keyword_inside_larger_word_still_matches() {
        let mut doc = rear_end_collision_claim();
        doc.incident.as_mut().unwrap().description =
            Some("statements were inconsistently recorded".to_string());

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::Investigation);
        assert_eq!(
            decision.reasoning,
            "Description contains indicator: \"inconsistent\"."
        );
    }

    #[test]
    fn test_injury_beats_fast_track() {
        let mut doc = rear_end_collision_claim();
        doc.status.as_mut().unwrap().claim_type = Some("injury".to_string());

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::Specialist);
        assert_eq!(
            decision.reasoning,
            "Claim type is 'injury'; routed to specialist queue."
        );
        assert_eq!(decision.flags, vec![RoutingFlag::InjuryClaim]);
        assert!(decision.decision_ready);
    }

    #[test]
    fn test_damage_just_below_threshold_fast_tracks() {
        let mut doc = rear_end_collision_claim();
        doc.asset.as_mut().unwrap().estimated_damage = Some(dec!(24999.99));

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::FastTrack);
        assert_eq!(
            decision.reasoning,
            "Estimated damage (24999.99) is below 25000. Fast-track eligible."
        );
    }

    #[test]
    fn test_damage_at_threshold_goes_standard() {
        let mut doc = rear_end_collision_claim();
        doc.asset.as_mut().unwrap().estimated_damage = Some(dec!(25000));

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::Standard);
        assert_eq!(
            decision.reasoning,
            "No fast-track, specialist, or investigation criteria met; standard processing."
        );
        assert!(decision.decision_ready);
    }

    #[test]
    fn test_high_damage_goes_standard() {
        let mut doc = rear_end_collision_claim();
        doc.asset.as_mut().unwrap().estimated_damage = Some(dec!(80000));

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::Standard);
    }

    #[test]
    fn test_no_damage_estimate_goes_standard() {
        let mut doc = rear_end_collision_claim();
        doc.asset.as_mut().unwrap().estimated_damage = None;

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::Standard);
    }

    #[test]
    fn test_initial_estimate_fallback_reaches_router() {
        let mut doc = rear_end_collision_claim();
        doc.asset.as_mut().unwrap().estimated_damage = None;
        doc.status.as_mut().unwrap().initial_estimate = Some(dec!(7500.50));

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::FastTrack);
        assert_eq!(
            decision.reasoning,
            "Estimated damage (7500.5) is below 25000. Fast-track eligible."
        );
    }

    #[test]
    fn test_decisions_are_byte_identical_across_runs() {
        let doc = rear_end_collision_claim();

        let runs: Vec<String> = (0..3)
            .map(|_| serde_json::to_string(&FnolRouter::evaluate(&doc)).unwrap())
            .collect();

        assert_eq!(runs[0], runs[1]);
        assert_eq!(runs[1], runs[2]);
    }

    #[test]
    fn test_route_and_evaluate_agree() {
        let doc = rear_end_collision_claim();
        let missing = FnolValidator::validate(&doc);

        let via_route = FnolRouter::route(&doc, missing);
        let via_evaluate = FnolRouter::evaluate(&doc);

        assert_eq!(via_route, via_evaluate);
    }

    #[test]
    fn test_decision_round_trips_through_serde() {
        let decision = FnolRouter::evaluate(&rear_end_collision_claim());

        let json = serde_json::to_string(&decision).unwrap();
        let back: RouteDecision = serde_json::from_str(&json).unwrap();

        assert_eq!(decision, back);
    }
}

// ============================================================================
// Field Catalog Scenarios
// ============================================================================

mod field_catalog_tests {
    use super::*;

    #[test]
    fn test_complete_claim_missing_only_unpopulated_labels() {
        let missing = missing_field_labels(&rear_end_collision_claim());

        // Third parties, contact address, and the initial estimate were
        // never populated in the fixture.
        assert_eq!(
            missing,
            vec!["Third Parties", "Contact Address", "Initial Estimate"]
        );
    }

    #[test]
    fn test_informational_scan_does_not_affect_routing() {
        let doc = rear_end_collision_claim();

        let informational = missing_field_labels(&doc);
        assert!(!informational.is_empty());

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::FastTrack);
        assert!(decision.missing_fields.is_empty());
    }

    #[test]
    fn test_display_values_for_the_collision_claim() {
        let doc = rear_end_collision_claim();

        assert_eq!(
            ClaimField::PolicyNumber.display_value(&doc),
            Some("POL-1".to_string())
        );
        assert_eq!(
            ClaimField::IncidentDate.display_value(&doc),
            Some("2024-01-01".to_string())
        );
        assert_eq!(
            ClaimField::EstimatedDamage.display_value(&doc),
            Some("18500".to_string())
        );
        assert_eq!(
            ClaimField::Attachments.display_value(&doc),
            Some("police_report.pdf".to_string())
        );
        assert_eq!(ClaimField::ThirdParties.display_value(&doc), None);
    }
}

// ============================================================================
// Document Serde Scenarios
// ============================================================================

mod document_serde_tests {
    use super::*;

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = rear_end_collision_claim();

        let json = serde_json::to_string(&doc).unwrap();
        let back: FnolDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(doc, back);
    }

    #[test]
    fn test_round_trip_preserves_routing_outcome() {
        let doc = rear_end_collision_claim();
        let json = serde_json::to_string(&doc).unwrap();
        let back: FnolDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(FnolRouter::evaluate(&doc), FnolRouter::evaluate(&back));
    }

    #[test]
    fn test_asset_type_serializes_under_type_key() {
        let doc = rear_end_collision_claim();
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["asset"]["type"], serde_json::json!("vehicle"));
    }

    #[test]
    fn test_sparse_json_deserializes_and_routes() {
        let doc: FnolDocument =
            serde_json::from_str(r#"{"incident": {"description": "minor dent"}}"#).unwrap();

        let decision = FnolRouter::evaluate(&doc);
        assert_eq!(decision.route, Route::ManualReview);
    }

    #[test]
    fn test_human_format_dates_accepted_in_documents() {
        let doc: FnolDocument = serde_json::from_str(
            r#"{"incident": {"date": "15/01/2024"}, "policy": {"effective_date_start": "January 1, 2024"}}"#,
        )
        .unwrap();

        assert_eq!(doc.incident_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(
            doc.policy.unwrap().effective_date_start,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_string_amounts_accepted_in_documents() {
        let doc: FnolDocument = serde_json::from_str(
            r#"{"asset": {"estimated_damage": "$18,500"}}"#,
        )
        .unwrap();

        assert_eq!(doc.estimated_damage(), Some(dec!(18500)));
    }

    #[test]
    fn test_unparsable_scalars_degrade_to_absent() {
        let doc: FnolDocument = serde_json::from_str(
            r#"{"incident": {"date": "sometime in March"}, "asset": {"estimated_damage": "a lot"}}"#,
        )
        .unwrap();

        assert_eq!(doc.incident_date(), None);
        assert_eq!(doc.estimated_damage(), None);
    }
}
