//! Reference catalog types: ingredients, dosage forms, routes, mechanisms.
//!
//! These are the small lookup entities maintained by the admin console and
//! referenced from drug and interaction records.

use crate::EntityId;

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Total item count across all pages.
    pub total: u64,
}

/// An active pharmaceutical ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Ingredient {
    /// Unique identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// Payload for creating or updating an ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewIngredient {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// A dosage form (tablet, injection, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DosageForm {
    /// Unique identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
}

/// Payload for creating or updating a dosage form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewDosageForm {
    /// Display name.
    pub name: String,
}

/// A route of administration (oral, intravenous, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteInformation {
    /// Unique identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// Payload for creating or updating a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewRoute {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// A named interaction mechanism in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Mechanism {
    /// Unique identifier.
    pub id: EntityId,
    /// Unique short identifier, e.g. `CYP3A4-INH`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// Payload for creating or updating a mechanism.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewMechanism {
    /// Unique short identifier.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_page_wire_shape() {
        let json = r#"{"data": [{"id": 1, "name": "Acetylsalicylic acid"}], "total": 41}"#;
        let page: Page<Ingredient> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 41);
        assert_eq!(page.data[0].name, "Acetylsalicylic acid");
    }
}
