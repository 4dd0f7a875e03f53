//! Drug reference types.
//!
//! This module provides the drug summary used by search and pick lists,
//! the full monograph detail, and the admin create/update payloads.

use crate::{EntityId, Reference};

/// Lifecycle status of a drug entry in the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrugStatus {
    /// Current, selectable entry.
    Active,
    /// Temporarily withdrawn from selection.
    Inactive,
    /// Superseded entry kept for historical records.
    Deprecated,
}

impl DrugStatus {
    /// Returns the wire/display name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Deprecated => "Deprecated",
        }
    }
}

/// A drug as returned by search and list endpoints.
///
/// Carries the identity fields plus denormalized dosage-form and route
/// names for display, when the backend includes them.
///
/// # Examples
///
/// ```
/// use medmanager_types::{DrugStatus, DrugSummary};
///
/// let drug = DrugSummary {
///     id: 5,
///     code: "ASA-100".to_string(),
///     name: "Aspirin 100mg".to_string(),
///     status: Some(DrugStatus::Active),
///     dosage_form: Some("Tablet".to_string()),
///     route: Some("Oral".to_string()),
/// };
/// assert!(drug.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DrugSummary {
    /// Unique identifier for this drug.
    pub id: EntityId,
    /// Unique short identifier shown alongside the name.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Lifecycle status, when included by the endpoint.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<DrugStatus>,
    /// Denormalized dosage-form name for list display.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_form: Option<String>,
    /// Denormalized route-of-administration name for list display.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route: Option<String>,
}

impl DrugSummary {
    /// Returns true unless the drug is explicitly inactive or deprecated.
    pub fn is_active(&self) -> bool {
        !matches!(
            self.status,
            Some(DrugStatus::Inactive) | Some(DrugStatus::Deprecated)
        )
    }
}

/// Full drug monograph as returned by `GET /drugs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DrugDetail {
    /// Unique identifier for this drug.
    pub id: EntityId,
    /// Unique short identifier.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<DrugStatus>,
    /// Denormalized dosage-form name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_form: Option<String>,
    /// Denormalized route-of-administration name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route: Option<String>,
    /// Approved indications.
    #[cfg_attr(feature = "serde", serde(default))]
    pub indications: Option<String>,
    /// Contraindications.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contraindications: Option<String>,
    /// Adult dosing guidance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_adults: Option<String>,
    /// Pediatric dosing guidance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_children: Option<String>,
    /// Dosing guidance under hepatic impairment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_hepatic_impairment: Option<String>,
    /// Dosing guidance under renal impairment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_renal_impairment: Option<String>,
    /// Known adverse effects.
    #[cfg_attr(feature = "serde", serde(default))]
    pub adverse_effects: Option<String>,
    /// Precautions during pregnancy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pregnancy_precautions: Option<String>,
    /// Precautions during breastfeeding.
    #[cfg_attr(feature = "serde", serde(default))]
    pub breastfeeding_precautions: Option<String>,
    /// Other precautions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub other_precautions: Option<String>,
    /// Literature references attached to this monograph.
    #[cfg_attr(feature = "serde", serde(default))]
    pub references: Vec<Reference>,
}

impl DrugDetail {
    /// Returns the summary projection of this monograph.
    pub fn summary(&self) -> DrugSummary {
        DrugSummary {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
            status: self.status,
            dosage_form: self.dosage_form.clone(),
            route: self.route.clone(),
        }
    }
}

/// Payload for creating a drug via the admin workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewDrug {
    /// Unique short identifier.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Dosage-form id in the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_form_id: Option<EntityId>,
    /// Route-of-administration id in the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route_id: Option<EntityId>,
    /// Approved indications.
    #[cfg_attr(feature = "serde", serde(default))]
    pub indications: Option<String>,
    /// Contraindications.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contraindications: Option<String>,
    /// Adult dosing guidance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_adults: Option<String>,
    /// Pediatric dosing guidance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_children: Option<String>,
    /// Known adverse effects.
    #[cfg_attr(feature = "serde", serde(default))]
    pub adverse_effects: Option<String>,
}

/// Payload for updating a drug via the admin workflow.
///
/// Same shape as [`NewDrug`] plus the lifecycle status, which is only
/// changed through updates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DrugUpdate {
    /// Unique short identifier.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    pub status: DrugStatus,
    /// Dosage-form id in the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_form_id: Option<EntityId>,
    /// Route-of-administration id in the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route_id: Option<EntityId>,
    /// Approved indications.
    #[cfg_attr(feature = "serde", serde(default))]
    pub indications: Option<String>,
    /// Contraindications.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contraindications: Option<String>,
    /// Adult dosing guidance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_adults: Option<String>,
    /// Pediatric dosing guidance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosage_children: Option<String>,
    /// Known adverse effects.
    #[cfg_attr(feature = "serde", serde(default))]
    pub adverse_effects: Option<String>,
}
