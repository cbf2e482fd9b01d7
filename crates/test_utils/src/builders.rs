//! Test Data Builders
//!
//! Provides a builder for constructing claim documents with sensible
//! defaults. Tests specify only the fields they care about; the default
//! document is a complete low-damage auto claim that routes to
//! fast_track with no missing fields.

use chrono::NaiveDate;
use domain_fnol::{
    Asset, ContactDetails, FnolDocument, Incident, Parties, Party, Policy, Status,
};
use rust_decimal::Decimal;

use crate::fixtures::{AmountFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing claim documents
pub struct FnolDocumentBuilder {
    policy_number: Option<String>,
    holder_name: Option<String>,
    effective_date_start: Option<NaiveDate>,
    effective_date_end: Option<NaiveDate>,
    incident_date: Option<NaiveDate>,
    incident_time: Option<String>,
    location: Option<String>,
    description: Option<String>,
    claimant_name: Option<String>,
    claimant_role: Option<String>,
    third_parties: Vec<Party>,
    contact_phone: Option<String>,
    contact_email: Option<String>,
    contact_address: Option<String>,
    asset_type: Option<String>,
    asset_id: Option<String>,
    estimated_damage: Option<Decimal>,
    currency: Option<String>,
    claim_type: Option<String>,
    attachments: Vec<String>,
    initial_estimate: Option<Decimal>,
}

impl Default for FnolDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FnolDocumentBuilder {
    /// Creates a builder for a complete low-damage auto claim
    pub fn new() -> Self {
        Self {
            policy_number: Some(StringFixtures::policy_number().to_string()),
            holder_name: Some(StringFixtures::policyholder_name().to_string()),
            effective_date_start: Some(TemporalFixtures::policy_start()),
            effective_date_end: Some(TemporalFixtures::policy_end()),
            incident_date: Some(TemporalFixtures::incident_date()),
            incident_time: Some(StringFixtures::incident_time().to_string()),
            location: Some(StringFixtures::location().to_string()),
            description: Some(StringFixtures::clean_description().to_string()),
            claimant_name: Some(StringFixtures::claimant_name().to_string()),
            claimant_role: Some("claimant".to_string()),
            third_parties: vec![Party {
                name: Some(StringFixtures::third_party_name().to_string()),
                role: Some("third_party".to_string()),
                contact: None,
            }],
            contact_phone: Some(StringFixtures::phone().to_string()),
            contact_email: Some(StringFixtures::email().to_string()),
            contact_address: Some(StringFixtures::address().to_string()),
            asset_type: Some("vehicle".to_string()),
            asset_id: Some(StringFixtures::vehicle_id().to_string()),
            estimated_damage: Some(AmountFixtures::low_damage()),
            currency: Some("USD".to_string()),
            claim_type: Some("auto".to_string()),
            attachments: vec![StringFixtures::attachment().to_string()],
            initial_estimate: Some(AmountFixtures::initial_estimate()),
        }
    }

    /// Builds an injury claim
    pub fn injury() -> Self {
        Self::new().with_claim_type("injury")
    }

    /// Builds a claim whose description carries an investigation keyword
    pub fn suspicious() -> Self {
        Self::new().with_description(StringFixtures::suspicious_description())
    }

    /// Builds a claim with damage above the fast-track threshold
    pub fn high_value() -> Self {
        Self::new()
            .with_estimated_damage(AmountFixtures::high_damage())
            .with_initial_estimate(AmountFixtures::high_damage())
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = Some(number.into());
        self
    }

    /// Clears the policy number
    pub fn without_policy_number(mut self) -> Self {
        self.policy_number = None;
        self
    }

    /// Sets the policyholder name
    pub fn with_policyholder_name(mut self, name: impl Into<String>) -> Self {
        self.holder_name = Some(name.into());
        self
    }

    /// Clears the policyholder name
    pub fn without_policyholder_name(mut self) -> Self {
        self.holder_name = None;
        self
    }

    /// Sets the claimant name
    pub fn with_claimant_name(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = Some(name.into());
        self
    }

    /// Clears the claimant name
    pub fn without_claimant_name(mut self) -> Self {
        self.claimant_name = None;
        self
    }

    /// Sets the incident date
    pub fn with_incident_date(mut self, date: NaiveDate) -> Self {
        self.incident_date = Some(date);
        self
    }

    /// Clears the incident date
    pub fn without_incident_date(mut self) -> Self {
        self.incident_date = None;
        self
    }

    /// Sets the incident description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = Some(claim_type.into());
        self
    }

    /// Sets the asset's estimated damage
    pub fn with_estimated_damage(mut self, damage: Decimal) -> Self {
        self.estimated_damage = Some(damage);
        self
    }

    /// Clears both the asset estimate and the status initial estimate
    pub fn without_damage_estimate(mut self) -> Self {
        self.estimated_damage = None;
        self.initial_estimate = None;
        self
    }

    /// Sets the status section's initial estimate
    pub fn with_initial_estimate(mut self, estimate: Decimal) -> Self {
        self.initial_estimate = Some(estimate);
        self
    }

    /// Sets the currency for both damage amounts
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Appends a named third party
    pub fn with_third_party(mut self, name: impl Into<String>) -> Self {
        self.third_parties.push(Party {
            name: Some(name.into()),
            role: Some("third_party".to_string()),
            contact: None,
        });
        self
    }

    /// Clears all third parties
    pub fn without_third_parties(mut self) -> Self {
        self.third_parties.clear();
        self
    }

    /// Appends an attachment name
    pub fn with_attachment(mut self, name: impl Into<String>) -> Self {
        self.attachments.push(name.into());
        self
    }

    /// Clears all attachments
    pub fn without_attachments(mut self) -> Self {
        self.attachments.clear();
        self
    }

    /// Builds the claim document
    pub fn build(self) -> FnolDocument {
        FnolDocument {
            policy: Some(Policy {
                number: self.policy_number,
                holder_name: self.holder_name,
                effective_date_start: self.effective_date_start,
                effective_date_end: self.effective_date_end,
            }),
            incident: Some(Incident {
                date: self.incident_date,
                time: self.incident_time,
                location: self.location,
                description: self.description,
            }),
            parties: Some(Parties {
                claimant: Some(Party {
                    name: self.claimant_name,
                    role: self.claimant_role,
                    contact: None,
                }),
                third_parties: self.third_parties,
                contact_details: Some(ContactDetails {
                    phone: self.contact_phone,
                    email: self.contact_email,
                    address: self.contact_address,
                }),
            }),
            asset: Some(Asset {
                asset_type: self.asset_type,
                id: self.asset_id,
                estimated_damage: self.estimated_damage,
                currency: self.currency.clone(),
            }),
            status: Some(Status {
                claim_type: self.claim_type,
                attachments: self.attachments,
                initial_estimate: self.initial_estimate,
                initial_estimate_currency: self.currency,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_fnol::{missing_field_labels, FnolRouter, Route};

    #[test]
    fn test_default_builder_is_complete_and_fast_tracks() {
        let doc = FnolDocumentBuilder::new().build();

        assert!(missing_field_labels(&doc).is_empty());
        assert_eq!(FnolRouter::evaluate(&doc).route, Route::FastTrack);
    }

    #[test]
    fn test_injury_preset_routes_to_specialist() {
        let doc = FnolDocumentBuilder::injury().build();
        assert_eq!(FnolRouter::evaluate(&doc).route, Route::Specialist);
    }

    #[test]
    fn test_suspicious_preset_routes_to_investigation() {
        let doc = FnolDocumentBuilder::suspicious().build();
        assert_eq!(FnolRouter::evaluate(&doc).route, Route::Investigation);
    }

    #[test]
    fn test_high_value_preset_routes_to_standard() {
        let doc = FnolDocumentBuilder::high_value().build();
        assert_eq!(FnolRouter::evaluate(&doc).route, Route::Standard);
    }

    #[test]
    fn test_without_policy_number_forces_manual_review() {
        let doc = FnolDocumentBuilder::new().without_policy_number().build();
        assert_eq!(FnolRouter::evaluate(&doc).route, Route::ManualReview);
    }

    #[test]
    fn test_third_parties_accumulate() {
        let doc = FnolDocumentBuilder::new()
            .without_third_parties()
            .with_third_party("Sam Hale")
            .with_third_party("Rita Vale")
            .build();

        assert_eq!(doc.third_party_names(), vec!["Sam Hale", "Rita Vale"]);
    }

    #[test]
    fn test_without_damage_estimate_clears_the_fallback_too() {
        let doc = FnolDocumentBuilder::new().without_damage_estimate().build();

        assert_eq!(doc.estimated_damage(), None);
        assert_eq!(FnolRouter::evaluate(&doc).route, Route::Standard);
    }
}
