//! Mandatory-field validation
//!
//! Exactly three fields are mandatory before a claim can be auto-routed:
//! the policy number, a policyholder or claimant name, and the incident
//! date. The validator reports which of them are missing, in that fixed
//! order, under canonical labels that never shift with internal field
//! names. It is pure and total: no document, however sparse, is an error.

use serde::{Deserialize, Serialize};

use crate::document::FnolDocument;

/// A field a claim cannot be auto-routed without
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MandatoryField {
    /// Policy number on the policy section
    #[serde(rename = "Policy Number")]
    PolicyNumber,
    /// Policyholder name, or failing that the claimant name
    #[serde(rename = "Policyholder/Claimant Name")]
    PolicyholderOrClaimantName,
    /// Date of the incident
    #[serde(rename = "Incident Date")]
    IncidentDate,
}

impl MandatoryField {
    /// All mandatory fields in report order.
    pub const ALL: [MandatoryField; 3] = [
        MandatoryField::PolicyNumber,
        MandatoryField::PolicyholderOrClaimantName,
        MandatoryField::IncidentDate,
    ];

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "Policy Number",
            MandatoryField::PolicyholderOrClaimantName => "Policyholder/Claimant Name",
            MandatoryField::IncidentDate => "Incident Date",
        }
    }

    /// Whether the document satisfies this field. Whitespace-only values
    /// do not count.
    fn is_present(&self, doc: &FnolDocument) -> bool {
        match self {
            MandatoryField::PolicyNumber => doc.policy_number().is_some(),
            MandatoryField::PolicyholderOrClaimantName => {
                doc.policyholder_or_claimant_name().is_some()
            }
            MandatoryField::IncidentDate => doc.incident_date().is_some(),
        }
    }
}

/// Ordered set of missing mandatory fields
///
/// Order always follows `MandatoryField::ALL`, so the same gaps produce
/// the same report every time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFields(Vec<MandatoryField>);

impl MissingFields {
    /// An empty set: every mandatory field is present.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: MandatoryField) -> bool {
        self.0.contains(&field)
    }

    /// Iterates the missing fields in report order.
    pub fn iter(&self) -> impl Iterator<Item = MandatoryField> + '_ {
        self.0.iter().copied()
    }

    /// Canonical labels in report order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(MandatoryField::label).collect()
    }

    /// Labels joined for interpolation into reasoning text.
    pub fn joined_labels(&self) -> String {
        self.labels().join(", ")
    }
}

impl From<Vec<MandatoryField>> for MissingFields {
    fn from(fields: Vec<MandatoryField>) -> Self {
        Self(fields)
    }
}

impl<'a> IntoIterator for &'a MissingFields {
    type Item = MandatoryField;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, MandatoryField>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Validator for FNOL documents
///
/// # Examples
///
/// ```rust
/// use domain_fnol::document::FnolDocument;
/// use domain_fnol::validation::FnolValidator;
///
/// let missing = FnolValidator::validate(&FnolDocument::default());
/// assert_eq!(
///     missing.labels(),
///     vec!["Policy Number", "Policyholder/Claimant Name", "Incident Date"],
/// );
/// ```
pub struct FnolValidator;

impl FnolValidator {
    /// Reports the mandatory fields the document is missing, in fixed
    /// report order. Never reports non-mandatory fields.
    pub fn validate(doc: &FnolDocument) -> MissingFields {
        MandatoryField::ALL
            .into_iter()
            .filter(|field| !field.is_present(doc))
            .collect::<Vec<_>>()
            .into()
    }
}
