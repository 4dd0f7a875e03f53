//! # medmanager-types
//!
//! Wire types for the MedManager drug reference API.
//!
//! This crate provides the data model consumed and produced by the
//! MedManager backend: drugs and their monographs, drug-drug interaction
//! records and check results, disease treatment protocols, the reference
//! catalogs (ingredients, dosage forms, routes, mechanisms), user accounts
//! and authentication payloads, and search analytics.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via
//!   serde with the backend's camelCase field names. Disable this feature
//!   for plain in-process usage.
//!
//! ## Usage
//!
//! ```rust
//! use medmanager_types::{EntityId, Severity};
//!
//! let drug_ids: Vec<EntityId> = vec![5, 12];
//! assert_eq!(drug_ids.len(), 2);
//!
//! // Client-side fallback rating: highest severity wins.
//! let overall = Severity::aggregate([Severity::Mild, Severity::Severe]);
//! assert_eq!(overall, Severity::Severe);
//! ```

#![warn(missing_docs)]

mod analytics;
mod auth;
mod catalog;
mod disease;
mod drug;
mod id;
mod interaction;
mod reference;
mod severity;
mod user;

// Re-export all public types at crate root
pub use analytics::{PopularSearch, PopularSearches, RecentSearches, SearchLog, SearchStats};
pub use auth::{
    AuthUser, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, RegisterResponse, ResetPasswordRequest, RoleChangeRequest, UserProfile,
};
pub use catalog::{
    DosageForm, Ingredient, Mechanism, NewDosageForm, NewIngredient, NewMechanism, NewRoute,
    Page, RouteInformation,
};
pub use disease::{Disease, DiseaseTreatment, NewDisease, NewProtocol, ProtocolDrug};
pub use drug::{DrugDetail, DrugStatus, DrugSummary, DrugUpdate, NewDrug};
pub use id::EntityId;
pub use interaction::{
    InteractionCheckRequest, InteractionCheckResponse, InteractionRecord, MechanismEntry,
    MechanismRef, NewInteraction,
};
pub use reference::{NewReference, Reference};
pub use severity::{ParseSeverityError, Severity};
pub use user::{
    has_role, NewUser, ParseRoleError, Role, UserAccount, UserCreated, UserPage, UserPagination,
    UserUpdate,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        // Verify core types are accessible from crate root
        let _id: EntityId = 5;
        let _severity = Severity::Moderate;
        let _status = DrugStatus::Active;
        let _role = Role::Admin;
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let drug = DrugSummary {
            id: 5,
            code: "ASA-100".to_string(),
            name: "Aspirin 100mg".to_string(),
            status: Some(DrugStatus::Active),
            dosage_form: Some("Tablet".to_string()),
            route: Some("Oral".to_string()),
        };

        let json = serde_json::to_string(&drug).unwrap();
        let parsed: DrugSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(drug, parsed);
    }
}
