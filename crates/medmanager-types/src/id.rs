//! Entity identifier type.
//!
//! This module provides a type alias for MedManager entity identifiers.
//! Every reference entity (drug, interaction, disease, ...) is keyed by a
//! strictly positive numeric id assigned by the backend.

/// A MedManager entity identifier.
///
/// Identifiers are 64-bit unsigned integers assigned server-side. A value
/// of zero is never a valid identifier.
///
/// # Examples
///
/// ```
/// use medmanager_types::EntityId;
///
/// let aspirin: EntityId = 5;
/// let warfarin: EntityId = 12;
/// ```
pub type EntityId = u64;
