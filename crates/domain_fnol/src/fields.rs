//! Extractable-field catalog
//!
//! The full inventory of fields the intake process knows how to surface,
//! each with a canonical label and a display section. The catalog drives
//! the informational missing-field scan in the standard output and the
//! per-label display values. Informational gaps never influence routing;
//! the mandatory set lives in the validation module.

use crate::document::{non_blank, FnolDocument};

/// Display section a catalog field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSection {
    PolicyInformation,
    IncidentInformation,
    InvolvedParties,
    AssetDetails,
    ClaimStatus,
}

impl FieldSection {
    /// Section heading as shown on the claim form
    pub fn title(&self) -> &'static str {
        match self {
            FieldSection::PolicyInformation => "Policy Information",
            FieldSection::IncidentInformation => "Incident Information",
            FieldSection::InvolvedParties => "Involved Parties",
            FieldSection::AssetDetails => "Asset Details",
            FieldSection::ClaimStatus => "Claim Status",
        }
    }
}

/// One extractable field
///
/// A field is empty when its value is absent, blank after trimming, or
/// an empty list. "Estimated Damage" applies the asset-to-status
/// fallback and the contact fields apply the primary-contact-to-claimant
/// fallback, so the catalog reports what a reader of the claim form
/// would actually see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    PolicyNumber,
    PolicyholderName,
    EffectiveDateStart,
    EffectiveDateEnd,
    IncidentDate,
    IncidentTime,
    Location,
    Description,
    Claimant,
    ThirdParties,
    ContactPhone,
    ContactEmail,
    ContactAddress,
    AssetType,
    AssetId,
    EstimatedDamage,
    ClaimType,
    Attachments,
    InitialEstimate,
}

impl ClaimField {
    /// Every catalog field in form order.
    pub const ALL: [ClaimField; 19] = [
        ClaimField::PolicyNumber,
        ClaimField::PolicyholderName,
        ClaimField::EffectiveDateStart,
        ClaimField::EffectiveDateEnd,
        ClaimField::IncidentDate,
        ClaimField::IncidentTime,
        ClaimField::Location,
        ClaimField::Description,
        ClaimField::Claimant,
        ClaimField::ThirdParties,
        ClaimField::ContactPhone,
        ClaimField::ContactEmail,
        ClaimField::ContactAddress,
        ClaimField::AssetType,
        ClaimField::AssetId,
        ClaimField::EstimatedDamage,
        ClaimField::ClaimType,
        ClaimField::Attachments,
        ClaimField::InitialEstimate,
    ];

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            ClaimField::PolicyNumber => "Policy Number",
            ClaimField::PolicyholderName => "Policyholder Name",
            ClaimField::EffectiveDateStart => "Effective Date Start",
            ClaimField::EffectiveDateEnd => "Effective Date End",
            ClaimField::IncidentDate => "Incident Date",
            ClaimField::IncidentTime => "Incident Time",
            ClaimField::Location => "Location",
            ClaimField::Description => "Description",
            ClaimField::Claimant => "Claimant",
            ClaimField::ThirdParties => "Third Parties",
            ClaimField::ContactPhone => "Contact Phone",
            ClaimField::ContactEmail => "Contact Email",
            ClaimField::ContactAddress => "Contact Address",
            ClaimField::AssetType => "Asset Type",
            ClaimField::AssetId => "Asset ID",
            ClaimField::EstimatedDamage => "Estimated Damage",
            ClaimField::ClaimType => "Claim Type",
            ClaimField::Attachments => "Attachments",
            ClaimField::InitialEstimate => "Initial Estimate",
        }
    }

    /// Section the field is displayed under
    pub fn section(&self) -> FieldSection {
        match self {
            ClaimField::PolicyNumber
            | ClaimField::PolicyholderName
            | ClaimField::EffectiveDateStart
            | ClaimField::EffectiveDateEnd => FieldSection::PolicyInformation,
            ClaimField::IncidentDate
            | ClaimField::IncidentTime
            | ClaimField::Location
            | ClaimField::Description => FieldSection::IncidentInformation,
            ClaimField::Claimant
            | ClaimField::ThirdParties
            | ClaimField::ContactPhone
            | ClaimField::ContactEmail
            | ClaimField::ContactAddress => FieldSection::InvolvedParties,
            ClaimField::AssetType | ClaimField::AssetId | ClaimField::EstimatedDamage => {
                FieldSection::AssetDetails
            }
            ClaimField::ClaimType | ClaimField::Attachments | ClaimField::InitialEstimate => {
                FieldSection::ClaimStatus
            }
        }
    }

    /// Display value for the field; `None` when the field is empty.
    /// Lists render comma-joined, dates render ISO, amounts render with
    /// trailing zeros normalized away.
    pub fn display_value(&self, doc: &FnolDocument) -> Option<String> {
        match self {
            ClaimField::PolicyNumber => doc.policy_number().map(str::to_string),
            ClaimField::PolicyholderName => doc.policyholder_name().map(str::to_string),
            ClaimField::EffectiveDateStart => doc
                .policy
                .as_ref()
                .and_then(|policy| policy.effective_date_start)
                .map(|date| date.format("%Y-%m-%d").to_string()),
            ClaimField::EffectiveDateEnd => doc
                .policy
                .as_ref()
                .and_then(|policy| policy.effective_date_end)
                .map(|date| date.format("%Y-%m-%d").to_string()),
            ClaimField::IncidentDate => doc
                .incident_date()
                .map(|date| date.format("%Y-%m-%d").to_string()),
            ClaimField::IncidentTime => doc
                .incident
                .as_ref()
                .and_then(|incident| non_blank(incident.time.as_deref()))
                .map(str::to_string),
            ClaimField::Location => doc
                .incident
                .as_ref()
                .and_then(|incident| non_blank(incident.location.as_deref()))
                .map(str::to_string),
            ClaimField::Description => doc.incident_description().map(str::to_string),
            ClaimField::Claimant => doc.claimant_name().map(str::to_string),
            ClaimField::ThirdParties => {
                let names = doc.third_party_names();
                if names.is_empty() {
                    None
                } else {
                    Some(names.join(", "))
                }
            }
            ClaimField::ContactPhone => doc.contact_phone().map(str::to_string),
            ClaimField::ContactEmail => doc.contact_email().map(str::to_string),
            ClaimField::ContactAddress => doc.contact_address().map(str::to_string),
            ClaimField::AssetType => doc
                .asset
                .as_ref()
                .and_then(|asset| non_blank(asset.asset_type.as_deref()))
                .map(str::to_string),
            ClaimField::AssetId => doc
                .asset
                .as_ref()
                .and_then(|asset| non_blank(asset.id.as_deref()))
                .map(str::to_string),
            ClaimField::EstimatedDamage => doc
                .estimated_damage()
                .map(|amount| amount.normalize().to_string()),
            ClaimField::ClaimType => doc.claim_type().map(str::to_string),
            ClaimField::Attachments => {
                let attachments = doc
                    .status
                    .as_ref()
                    .map(|status| status.attachments.as_slice())
                    .unwrap_or_default();
                if attachments.is_empty() {
                    None
                } else {
                    Some(attachments.join(", "))
                }
            }
            ClaimField::InitialEstimate => doc
                .status
                .as_ref()
                .and_then(|status| status.initial_estimate)
                .map(|amount| amount.normalize().to_string()),
        }
    }

    /// Whether the field is empty in the document
    pub fn is_empty(&self, doc: &FnolDocument) -> bool {
        self.display_value(doc).is_none()
    }
}

/// Labels of every catalog field empty in the document, in form order.
///
/// This is the informational scan behind the standard output's
/// `missingFields`; it covers all nineteen fields, not just the
/// mandatory three.
pub fn missing_field_labels(doc: &FnolDocument) -> Vec<&'static str> {
    ClaimField::ALL
        .into_iter()
        .filter(|field| field.is_empty(doc))
        .map(|field| field.label())
        .collect()
}
