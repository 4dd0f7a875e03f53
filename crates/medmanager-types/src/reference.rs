//! Bibliographic reference types.
//!
//! References are literature citations attached to drugs and interaction
//! records by the admin workflows. They are immutable once created.

use crate::EntityId;

/// A literature citation attached to a drug or interaction record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Reference {
    /// Unique identifier for this reference.
    pub id: EntityId,
    /// Citation title.
    pub title: String,
    /// Author list, free text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub authors: Option<String>,
    /// Journal or publisher.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Option<String>,
    /// Link to the cited material.
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
    /// Publication date (ISO date string as sent by the backend).
    #[cfg_attr(feature = "serde", serde(default))]
    pub publication_date: Option<String>,
    /// Digital Object Identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub doi: Option<String>,
}

/// Payload for attaching a new reference to a drug or interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewReference {
    /// Citation title.
    pub title: String,
    /// Author list, free text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub authors: Option<String>,
    /// Journal or publisher.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Option<String>,
    /// Link to the cited material.
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
    /// Publication date (ISO date string).
    #[cfg_attr(feature = "serde", serde(default))]
    pub publication_date: Option<String>,
    /// Digital Object Identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub doi: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_reference_wire_names() {
        let json = r#"{
            "id": 9,
            "title": "Stockley's Drug Interactions",
            "publicationDate": "2023-01-15",
            "doi": null
        }"#;
        let reference: Reference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.id, 9);
        assert_eq!(reference.publication_date.as_deref(), Some("2023-01-15"));
        assert!(reference.authors.is_none());
    }
}
