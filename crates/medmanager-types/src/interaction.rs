//! Drug-drug interaction types.
//!
//! An interaction record relates exactly two distinct drugs with a severity
//! classification, explanatory free text, optional structured mechanism
//! entries, and literature references. A check response bundles zero or
//! more records with an overall severity computed server-side.

use crate::{DrugSummary, EntityId, Reference, Severity};

/// A named pharmacodynamic/pharmacokinetic mechanism from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MechanismRef {
    /// Unique short identifier, e.g. `CYP3A4-INH`.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A structured mechanism entry on an interaction record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MechanismEntry {
    /// Mechanism class tag, e.g. `Pharmacokinetic` or `Pharmacodynamic`.
    pub mechanism_type: String,
    /// The catalog mechanism this entry refers to.
    pub mechanism: MechanismRef,
    /// Explanatory text for this mechanism in this interaction.
    pub interaction_text: String,
}

/// A drug-drug interaction between two distinct drugs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InteractionRecord {
    /// Unique identifier for this record.
    pub id: EntityId,
    /// First drug of the unordered pair.
    pub drug1: DrugSummary,
    /// Second drug of the unordered pair.
    pub drug2: DrugSummary,
    /// Clinical-risk classification.
    pub severity: Severity,
    /// Free-text interaction mechanism.
    pub mechanism: String,
    /// Free-text clinical effects.
    pub clinical_effects: String,
    /// Free-text management recommendation.
    pub management_recommendations: String,
    /// Structured mechanism entries, when curated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interaction_mechanisms: Vec<MechanismEntry>,
    /// Literature references supporting this record.
    #[cfg_attr(feature = "serde", serde(default))]
    pub references: Vec<Reference>,
}

impl InteractionRecord {
    /// Returns true if the record involves the given drug id.
    pub fn involves(&self, drug_id: EntityId) -> bool {
        self.drug1.id == drug_id || self.drug2.id == drug_id
    }
}

/// Request body for `POST /interactions/check`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InteractionCheckRequest {
    /// Distinct drug ids to check, in selection order.
    pub drug_ids: Vec<EntityId>,
}

/// Wire response of `POST /interactions/check`.
///
/// `overall_severity` is optional on deserialization so a client-side
/// fallback can be applied when the backend omits the field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InteractionCheckResponse {
    /// Interaction records found among the submitted drugs, server order.
    pub interactions: Vec<InteractionRecord>,
    /// Server-computed overall severity, when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overall_severity: Option<Severity>,
}

/// Payload for creating an interaction record via the admin workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewInteraction {
    /// First drug id of the pair.
    pub drug1_id: EntityId,
    /// Second drug id of the pair. Must differ from `drug1_id`.
    pub drug2_id: EntityId,
    /// Clinical-risk classification.
    pub severity: Severity,
    /// Free-text interaction mechanism.
    pub mechanism: String,
    /// Free-text clinical effects.
    pub clinical_effects: String,
    /// Free-text management recommendation.
    pub management_recommendations: String,
}

impl NewInteraction {
    /// Returns true when the pair relates two distinct drugs.
    ///
    /// An interaction of a drug with itself is never valid.
    pub fn is_valid_pair(&self) -> bool {
        self.drug1_id != self.drug2_id && self.drug1_id != 0 && self.drug2_id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_pair_rejected() {
        let payload = NewInteraction {
            drug1_id: 7,
            drug2_id: 7,
            severity: Severity::Mild,
            mechanism: String::new(),
            clinical_effects: String::new(),
            management_recommendations: String::new(),
        };
        assert!(!payload.is_valid_pair());
    }

    #[test]
    fn test_distinct_pair_accepted() {
        let payload = NewInteraction {
            drug1_id: 5,
            drug2_id: 12,
            severity: Severity::Severe,
            mechanism: "Additive anticoagulation".to_string(),
            clinical_effects: "Bleeding risk".to_string(),
            management_recommendations: "Avoid combination".to_string(),
        };
        assert!(payload.is_valid_pair());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_check_request_wire_shape() {
        let request = InteractionCheckRequest { drug_ids: vec![5, 12] };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "drugIds": [5, 12] }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_check_response_without_overall_severity() {
        let json = r#"{"interactions": []}"#;
        let response: InteractionCheckResponse = serde_json::from_str(json).unwrap();
        assert!(response.interactions.is_empty());
        assert_eq!(response.overall_severity, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_deserializes_mechanism_entries() {
        let json = r#"{
            "id": 3,
            "drug1": {"id": 5, "code": "ASA-100", "name": "Aspirin 100mg"},
            "drug2": {"id": 12, "code": "WFR-5", "name": "Warfarin 5mg"},
            "severity": "Severe",
            "mechanism": "Additive anticoagulation",
            "clinicalEffects": "Increased bleeding risk",
            "managementRecommendations": "Avoid combination",
            "interactionMechanisms": [
                {
                    "mechanismType": "Pharmacodynamic",
                    "mechanism": {"code": "PLT-INH", "name": "Platelet inhibition"},
                    "interactionText": "Both agents impair haemostasis"
                }
            ],
            "references": []
        }"#;
        let record: InteractionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.severity, Severity::Severe);
        assert!(record.involves(5));
        assert!(record.involves(12));
        assert!(!record.involves(99));
        assert_eq!(record.interaction_mechanisms.len(), 1);
        assert_eq!(record.interaction_mechanisms[0].mechanism.code, "PLT-INH");
    }
}
