//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random claim data that
//! maintains domain invariants.

use chrono::{Duration, NaiveDate};
use domain_fnol::{FnolDocument, INVESTIGATION_KEYWORDS};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::FnolDocumentBuilder;

/// Strategy for generating policy numbers
pub fn policy_number_strategy() -> impl Strategy<Value = String> {
    "POL-20[0-9]{2}-[0-9]{6}"
}

/// Strategy for generating full names
pub fn full_name_strategy() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{2,9}", "[A-Z][a-z]{2,9}").prop_map(|(first, last)| format!("{} {}", first, last))
}

/// Strategy for generating valid email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{5,10}", "[a-z]{3,8}").prop_map(|(local, domain)| format!("{}@{}.com", local, domain))
}

/// Strategy for generating valid phone numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    (100u32..999u32, 100u32..999u32, 1000u32..9999u32)
        .prop_map(|(area, prefix, line)| format!("+1-{}-{}-{}", area, prefix, line))
}

/// Strategy for generating incident dates within 2024
pub fn incident_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..365i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for generating damage estimates in [0, 1,000,000) with cent
/// precision
pub fn damage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating damage estimates strictly below the
/// fast-track threshold
pub fn damage_below_threshold_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..2_500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating damage estimates at or above the fast-track
/// threshold
pub fn damage_at_or_above_threshold_strategy() -> impl Strategy<Value = Decimal> {
    (2_500_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating claim types, injury included
pub fn claim_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("auto".to_string()),
        Just("property".to_string()),
        Just("theft".to_string()),
        Just("liability".to_string()),
        Just("injury".to_string()),
    ]
}

/// Strategy for generating claim types that never hit the specialist
/// queue
pub fn non_injury_claim_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("auto".to_string()),
        Just("property".to_string()),
        Just("theft".to_string()),
        Just("liability".to_string()),
    ]
}

/// Strategy for generating descriptions free of investigation keywords
pub fn clean_description_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,60}".prop_filter("description must not carry investigation keywords", |text| {
        INVESTIGATION_KEYWORDS
            .into_iter()
            .all(|keyword| !text.contains(keyword))
    })
}

/// Strategy for generating descriptions carrying at least one
/// investigation keyword
pub fn suspicious_description_strategy() -> impl Strategy<Value = String> {
    let keyword = prop_oneof![Just("fraud"), Just("inconsistent"), Just("staged")];
    (keyword, "[a-z ]{0,20}", "[a-z ]{0,20}")
        .prop_map(|(keyword, before, after)| format!("{} {} {}", before, keyword, after))
}

/// Strategy for generating complete claims that are always routable:
/// every mandatory field present, clean description, non-injury type
pub fn routable_document_strategy() -> impl Strategy<Value = FnolDocument> {
    (
        policy_number_strategy(),
        full_name_strategy(),
        incident_date_strategy(),
        damage_strategy(),
        non_injury_claim_type_strategy(),
        clean_description_strategy(),
    )
        .prop_map(|(number, name, date, damage, claim_type, description)| {
            FnolDocumentBuilder::new()
                .with_policy_number(number)
                .with_policyholder_name(name)
                .with_incident_date(date)
                .with_estimated_damage(damage)
                .with_claim_type(claim_type)
                .with_description(description)
                .build()
        })
}

/// Strategy for generating claims with arbitrary gaps in the mandatory
/// fields and any description or claim type
pub fn document_strategy() -> impl Strategy<Value = FnolDocument> {
    (
        proptest::option::of(policy_number_strategy()),
        proptest::option::of(full_name_strategy()),
        proptest::option::of(incident_date_strategy()),
        proptest::option::of(damage_strategy()),
        claim_type_strategy(),
        prop_oneof![clean_description_strategy(), suspicious_description_strategy()],
    )
        .prop_map(|(number, name, date, damage, claim_type, description)| {
            let mut builder = FnolDocumentBuilder::new()
                .with_claim_type(claim_type)
                .with_description(description);
            builder = match number {
                Some(number) => builder.with_policy_number(number),
                None => builder.without_policy_number(),
            };
            builder = match name {
                Some(name) => builder.with_policyholder_name(name),
                None => builder.without_policyholder_name().without_claimant_name(),
            };
            builder = match date {
                Some(date) => builder.with_incident_date(date),
                None => builder.without_incident_date(),
            };
            builder = match damage {
                Some(damage) => builder.with_estimated_damage(damage),
                None => builder.without_damage_estimate(),
            };
            builder.build()
        })
}
