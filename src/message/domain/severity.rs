//! Message severity levels and their display markers.
//!
//! Severity is a small closed set with a total importance order. The
//! order drives marker selection only; the pipeline never sorts by it.

use serde::{Deserialize, Serialize};

/// Importance level of a message.
///
/// Severities are totally ordered from least to most important. The
/// severity decorator maps each level to a fixed marker appended to the
/// message body.
///
/// # Examples
///
/// ```
/// use linotype::message::domain::Severity;
///
/// assert!(Severity::Minor < Severity::Major);
/// assert_eq!(Severity::Regular.marker(), "(!)");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Routine message with no operational impact.
    Minor,

    /// Ordinary message worth an operator's attention.
    Regular,

    /// High-importance message signalling a significant event.
    Major,
}

impl Severity {
    /// Returns the marker the severity decorator appends to the body.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Minor => "()",
            Self::Regular => "(!)",
            Self::Major => "(!!!)",
        }
    }

    /// Returns the severity as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Regular => "regular",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid severity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl std::fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl TryFrom<&str> for Severity {
    type Error = ParseSeverityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "minor" => Ok(Self::Minor),
            "regular" => Ok(Self::Regular),
            "major" => Ok(Self::Major),
            _ => Err(ParseSeverityError(s.to_owned())),
        }
    }
}
