//! Disease and treatment-protocol types.
//!
//! A treatment protocol orders recommended drugs for a disease into a
//! preferred tier and an alternative tier.

use crate::{DrugSummary, EntityId};

/// A disease in the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Disease {
    /// Unique identifier for this disease.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// ICD classification code.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icd_code: Option<String>,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// A recommended drug inside a treatment protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProtocolDrug {
    /// The recommended drug.
    pub drug: DrugSummary,
    /// Dosing guidance specific to this disease.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_recommendation: Option<String>,
    /// Conditions under which this recommendation applies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_conditions: Option<String>,
    /// Additional notes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

/// Response of `GET /diseases/{id}/treatment`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiseaseTreatment {
    /// The disease this protocol applies to.
    pub disease: Disease,
    /// First-line recommendations, in preference order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_drugs: Vec<ProtocolDrug>,
    /// Alternatives when preferred drugs are unsuitable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alternative_drugs: Vec<ProtocolDrug>,
}

impl DiseaseTreatment {
    /// Returns true when the protocol recommends no drugs at all.
    pub fn is_empty(&self) -> bool {
        self.preferred_drugs.is_empty() && self.alternative_drugs.is_empty()
    }
}

/// Payload for creating a disease via the admin workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewDisease {
    /// Display name.
    pub name: String,
    /// ICD classification code.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icd_code: Option<String>,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// Payload for attaching a protocol entry to a disease.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewProtocol {
    /// The disease this entry belongs to.
    pub disease_id: EntityId,
    /// The recommended drug.
    pub drug_id: EntityId,
    /// Preferred (first-line) vs alternative tier.
    pub is_preferred: bool,
    /// Ordering within the tier, ascending.
    pub preference_order: u32,
    /// Dosing guidance specific to this disease.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_recommendation: Option<String>,
    /// Conditions under which this recommendation applies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_conditions: Option<String>,
    /// Additional notes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_treatment_wire_shape() {
        let json = r#"{
            "disease": {"id": 2, "name": "Hypertension", "icdCode": "I10"},
            "preferredDrugs": [
                {
                    "drug": {"id": 8, "code": "AML-5", "name": "Amlodipine 5mg"},
                    "dosageRecommendation": "5mg once daily"
                }
            ],
            "alternativeDrugs": []
        }"#;
        let treatment: DiseaseTreatment = serde_json::from_str(json).unwrap();
        assert_eq!(treatment.disease.icd_code.as_deref(), Some("I10"));
        assert_eq!(treatment.preferred_drugs.len(), 1);
        assert!(!treatment.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_treatment() {
        let json = r#"{"disease": {"id": 3, "name": "Common cold"}}"#;
        let treatment: DiseaseTreatment = serde_json::from_str(json).unwrap();
        assert!(treatment.is_empty());
    }
}
