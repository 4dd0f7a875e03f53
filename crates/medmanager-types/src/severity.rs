//! Interaction severity classification.
//!
//! This module provides the ordinal clinical-risk scale used for individual
//! drug-drug interactions and for the aggregate rating of a whole check.

use std::fmt;
use std::str::FromStr;

/// Ordinal clinical-risk classification of a drug-drug interaction.
///
/// The variants are ordered by risk, so the derived `Ord` implements the
/// clinical precedence directly: `None < Mild < Moderate < Severe`.
///
/// # Examples
///
/// ```
/// use medmanager_types::Severity;
///
/// assert!(Severity::Severe > Severity::Moderate);
/// assert_eq!("Moderate".parse::<Severity>(), Ok(Severity::Moderate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// No interaction found.
    None,
    /// Minor clinical significance.
    Mild,
    /// Clinically relevant, usually manageable.
    Moderate,
    /// Potentially dangerous combination.
    Severe,
}

impl Severity {
    /// Returns the wire/display name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Combines individual interaction severities into an overall rating.
    ///
    /// Highest severity wins; an empty input yields [`Severity::None`].
    /// This is the client-side fallback for a check response that omits
    /// the server-computed overall rating.
    ///
    /// # Examples
    ///
    /// ```
    /// use medmanager_types::Severity;
    ///
    /// let overall = Severity::aggregate([Severity::Mild, Severity::Severe]);
    /// assert_eq!(overall, Severity::Severe);
    /// assert_eq!(Severity::aggregate([]), Severity::None);
    /// ```
    pub fn aggregate<I>(severities: I) -> Self
    where
        I: IntoIterator<Item = Severity>,
    {
        severities.into_iter().max().unwrap_or(Self::None)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(pub String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Mild" => Ok(Self::Mild),
            "Moderate" => Ok(Self::Moderate),
            "Severe" => Ok(Self::Severe),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}
