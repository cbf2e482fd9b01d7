//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for claim documents across the intake
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::NaiveDate;
use domain_fnol::FnolDocument;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for damage amount test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// A damage estimate comfortably below the fast-track threshold
    pub fn low_damage() -> Decimal {
        dec!(18500.00)
    }

    /// A damage estimate well above the fast-track threshold
    pub fn high_damage() -> Decimal {
        dec!(85000.00)
    }

    /// The largest estimate that still fast-tracks
    pub fn just_below_threshold() -> Decimal {
        dec!(24999.99)
    }

    /// An estimate exactly at the fast-track threshold
    pub fn at_threshold() -> Decimal {
        dec!(25000)
    }

    /// A standard initial estimate from the status section
    pub fn initial_estimate() -> Decimal {
        dec!(7500.50)
    }

    /// A zero estimate: a real amount, not an absent one
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }

    /// A negative estimate for upstream-correction scenarios
    pub fn negative_damage() -> Decimal {
        dec!(-500.00)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy end date (Dec 31, 2024)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// Standard incident date within the policy term
    pub fn incident_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard policy number
    pub fn policy_number() -> &'static str {
        "POL-2024-000134"
    }

    /// Standard policyholder name
    pub fn policyholder_name() -> &'static str {
        "Jane Doe"
    }

    /// Standard claimant name
    pub fn claimant_name() -> &'static str {
        "Jane Doe"
    }

    /// Standard third-party name
    pub fn third_party_name() -> &'static str {
        "Alex Mason"
    }

    /// Incident time as reported on the claim form
    pub fn incident_time() -> &'static str {
        "14:30"
    }

    /// Standard incident location
    pub fn location() -> &'static str {
        "I-95 southbound, exit 23"
    }

    /// A description free of investigation keywords
    pub fn clean_description() -> &'static str {
        "Rear-end collision at a stop light"
    }

    /// A description carrying exactly one investigation keyword
    pub fn suspicious_description() -> &'static str {
        "Neighbors report the fire may have been staged"
    }

    /// Test phone number
    pub fn phone() -> &'static str {
        "+1-555-123-4567"
    }

    /// Test email address
    pub fn email() -> &'static str {
        "jane.doe@example.com"
    }

    /// Test postal address
    pub fn address() -> &'static str {
        "482 Maple Ave, Springfield, IL"
    }

    /// Standard asset identifier
    pub fn vehicle_id() -> &'static str {
        "VIN-1HGCM82633A"
    }

    /// Standard attachment name
    pub fn attachment() -> &'static str {
        "police_report.pdf"
    }
}

/// Fixture for raw claim payloads as they arrive from upstream extraction
pub struct JsonFixtures;

impl JsonFixtures {
    /// A complete claim with every extractable field populated; routes
    /// to fast_track with nothing missing
    pub fn complete_payload() -> &'static str {
        r#"{
            "policy": {
                "number": "POL-2024-000134",
                "holder_name": "Jane Doe",
                "effective_date_start": "2024-01-01",
                "effective_date_end": "2024-12-31"
            },
            "incident": {
                "date": "2024-03-15",
                "time": "14:30",
                "location": "I-95 southbound, exit 23",
                "description": "Rear-end collision at a stop light"
            },
            "parties": {
                "claimant": {"name": "Jane Doe", "role": "claimant"},
                "third_parties": [{"name": "Alex Mason", "role": "third_party"}],
                "contact_details": {
                    "phone": "+1-555-123-4567",
                    "email": "jane.doe@example.com",
                    "address": "482 Maple Ave, Springfield, IL"
                }
            },
            "asset": {
                "type": "vehicle",
                "id": "VIN-1HGCM82633A",
                "estimated_damage": 18500.00,
                "currency": "USD"
            },
            "status": {
                "claim_type": "auto",
                "attachments": ["police_report.pdf", "photos.zip"],
                "initial_estimate": 7500.50,
                "initial_estimate_currency": "USD"
            }
        }"#
    }

    /// A bare-bones claim missing every mandatory field; routes to
    /// manual_review
    pub fn sparse_payload() -> &'static str {
        r#"{"incident": {"description": "Water damage in basement"}}"#
    }

    /// A claim with a day-first date, a currency-formatted amount, and
    /// untrimmed names; exercises the lenient scalar parsers
    pub fn messy_payload() -> &'static str {
        r#"{
            "policy": {"number": "POL-88-1142", "holder_name": "  Carlos Ray  "},
            "incident": {"date": "15/03/2024", "description": "Hail damage to roof"},
            "asset": {"type": "property", "estimated_damage": "$18,500.00"},
            "status": {"claim_type": "property"}
        }"#
    }

    /// A claim wrapped in a markdown code fence, as language models
    /// tend to reply
    pub fn fenced_payload() -> &'static str {
        concat!(
            "```json\n",
            r#"{"policy": {"number": "POL-2024-000134", "holder_name": "Jane Doe"},"#,
            "\n",
            r#" "incident": {"date": "2024-03-15", "description": "Cracked windshield"},"#,
            "\n",
            r#" "asset": {"estimated_damage": 9800.75}}"#,
            "\n",
            "```",
        )
    }

    /// Parses a raw payload into a document, panicking on malformed JSON
    pub fn parse(payload: &str) -> FnolDocument {
        serde_json::from_str(payload).expect("fixture payload is valid JSON")
    }
}
