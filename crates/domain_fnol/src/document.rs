//! FNOL document model
//!
//! A decision-ready First Notice of Loss record as produced by upstream
//! extraction. Every section and every leaf field is optional: partial or
//! empty data never fails construction or deserialization. Validation and
//! routing decide what to do about the gaps.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{lenient_amount_opt, lenient_date_opt};

/// Policy information from the claim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Policy number
    #[serde(default)]
    pub number: Option<String>,
    /// Policyholder full name
    #[serde(default)]
    pub holder_name: Option<String>,
    /// Policy effective start date
    #[serde(default, deserialize_with = "lenient_date_opt")]
    pub effective_date_start: Option<NaiveDate>,
    /// Policy effective end date
    #[serde(default, deserialize_with = "lenient_date_opt")]
    pub effective_date_end: Option<NaiveDate>,
}

/// Incident details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Date of incident
    #[serde(default, deserialize_with = "lenient_date_opt")]
    pub date: Option<NaiveDate>,
    /// Time of incident
    #[serde(default)]
    pub time: Option<String>,
    /// Incident location/address
    #[serde(default)]
    pub location: Option<String>,
    /// Incident description
    #[serde(default)]
    pub description: Option<String>,
}

/// Contact information for a party
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A party involved in the claim (claimant or third party)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub name: Option<String>,
    /// Role in the claim, e.g. "claimant", "third_party", "witness"
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub contact: Option<ContactDetails>,
}

/// All parties: claimant, third parties, primary contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    #[serde(default)]
    pub claimant: Option<Party>,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub third_parties: Vec<Party>,
    /// Primary contact for the claim
    #[serde(default)]
    pub contact_details: Option<ContactDetails>,
}

/// Claimed asset and damage estimate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset type, e.g. vehicle, property
    #[serde(default, rename = "type")]
    pub asset_type: Option<String>,
    /// Asset identifier, VIN, etc.
    #[serde(default)]
    pub id: Option<String>,
    /// Estimated damage amount in currency units
    #[serde(default, deserialize_with = "lenient_amount_opt")]
    pub estimated_damage: Option<Decimal>,
    /// Currency for estimated_damage; "USD" when the key is absent
    #[serde(default = "default_currency")]
    pub currency: Option<String>,
}

/// Claim status and metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Claim type, e.g. property, injury, auto
    #[serde(default)]
    pub claim_type: Option<String>,
    /// Attachment names/descriptions
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub attachments: Vec<String>,
    /// Initial estimate amount
    #[serde(default, deserialize_with = "lenient_amount_opt")]
    pub initial_estimate: Option<Decimal>,
    /// Currency for the initial estimate; "USD" when the key is absent
    #[serde(default = "default_currency")]
    pub initial_estimate_currency: Option<String>,
}

/// A decision-ready FNOL document
///
/// The five sections are independently optional, and lookups through the
/// accessors below treat an absent section exactly like a section full of
/// absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnolDocument {
    #[serde(default)]
    pub policy: Option<Policy>,
    #[serde(default)]
    pub incident: Option<Incident>,
    #[serde(default)]
    pub parties: Option<Parties>,
    #[serde(default)]
    pub asset: Option<Asset>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl FnolDocument {
    /// Policy number, trimmed; `None` when absent or blank
    pub fn policy_number(&self) -> Option<&str> {
        non_blank(self.policy.as_ref()?.number.as_deref())
    }

    /// Policyholder name, trimmed; `None` when absent or blank
    pub fn policyholder_name(&self) -> Option<&str> {
        non_blank(self.policy.as_ref()?.holder_name.as_deref())
    }

    /// Claimant name, trimmed; `None` when absent or blank
    pub fn claimant_name(&self) -> Option<&str> {
        non_blank(self.parties.as_ref()?.claimant.as_ref()?.name.as_deref())
    }

    /// The name that satisfies the mandatory name check: the policyholder
    /// name when present, otherwise the claimant name.
    pub fn policyholder_or_claimant_name(&self) -> Option<&str> {
        self.policyholder_name().or_else(|| self.claimant_name())
    }

    /// Date of the incident
    pub fn incident_date(&self) -> Option<NaiveDate> {
        self.incident.as_ref()?.date
    }

    /// Incident description, trimmed; `None` when absent or blank
    pub fn incident_description(&self) -> Option<&str> {
        non_blank(self.incident.as_ref()?.description.as_deref())
    }

    /// Claim type, trimmed; `None` when absent or blank
    pub fn claim_type(&self) -> Option<&str> {
        non_blank(self.status.as_ref()?.claim_type.as_deref())
    }

    /// Effective damage estimate: the asset's estimated damage, falling
    /// back to the status section's initial estimate. Zero is a real
    /// amount, not an absent one.
    pub fn estimated_damage(&self) -> Option<Decimal> {
        self.asset
            .as_ref()
            .and_then(|asset| asset.estimated_damage)
            .or_else(|| self.status.as_ref().and_then(|status| status.initial_estimate))
    }

    /// Contact phone: the claim's primary contact block, falling back to
    /// the claimant's own contact details.
    pub fn contact_phone(&self) -> Option<&str> {
        self.contact_field(|c| c.phone.as_deref())
    }

    /// Contact email, with the same fallback as `contact_phone`
    pub fn contact_email(&self) -> Option<&str> {
        self.contact_field(|c| c.email.as_deref())
    }

    /// Contact address, with the same fallback as `contact_phone`
    pub fn contact_address(&self) -> Option<&str> {
        self.contact_field(|c| c.address.as_deref())
    }

    /// Names of third parties with a non-blank name, in document order
    pub fn third_party_names(&self) -> Vec<&str> {
        self.parties
            .as_ref()
            .map(|parties| {
                parties
                    .third_parties
                    .iter()
                    .filter_map(|party| non_blank(party.name.as_deref()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn contact_field<'a>(
        &'a self,
        field: impl Fn(&'a ContactDetails) -> Option<&'a str>,
    ) -> Option<&'a str> {
        let parties = self.parties.as_ref()?;
        let primary = parties
            .contact_details
            .as_ref()
            .and_then(&field)
            .and_then(|value| non_blank(Some(value)));
        primary.or_else(|| {
            parties
                .claimant
                .as_ref()?
                .contact
                .as_ref()
                .and_then(&field)
                .and_then(|value| non_blank(Some(value)))
        })
    }
}

/// Trims the value and drops it when nothing remains.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

fn default_currency() -> Option<String> {
    Some("USD".to_string())
}

/// Deserializes a list field that may arrive as an explicit null.
fn null_as_empty_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
