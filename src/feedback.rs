// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Classification feedback types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative form tier for one analyzed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Form meets the exercise's target zone.
    Good,
    /// Form is close but needs adjustment.
    Improve,
    /// Form is well outside the target zone.
    Poor,
    /// Pose or required joints could not be detected this frame.
    Undetected,
}

impl Tier {
    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Improve => "improve",
            Self::Poor => "poor",
            Self::Undetected => "undetected",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Feedback for one analyzed frame.
///
/// Carries the machine-actionable [`Tier`] alongside the literal display
/// message. Messages are display-compatible with the reference strings, so
/// consumers that only show text keep working unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Qualitative tier of the classification.
    pub tier: Tier,
    /// Human-readable feedback message.
    pub message: String,
}

impl Feedback {
    /// Create feedback with an explicit tier.
    #[must_use]
    pub fn new(tier: Tier, message: impl Into<String>) -> Self {
        Self {
            tier,
            message: message.into(),
        }
    }

    /// Create [`Tier::Good`] feedback.
    #[must_use]
    pub fn good(message: impl Into<String>) -> Self {
        Self::new(Tier::Good, message)
    }

    /// Create [`Tier::Improve`] feedback.
    #[must_use]
    pub fn improve(message: impl Into<String>) -> Self {
        Self::new(Tier::Improve, message)
    }

    /// Create [`Tier::Poor`] feedback.
    #[must_use]
    pub fn poor(message: impl Into<String>) -> Self {
        Self::new(Tier::Poor, message)
    }

    /// Create [`Tier::Undetected`] feedback.
    #[must_use]
    pub fn undetected(message: impl Into<String>) -> Self {
        Self::new(Tier::Undetected, message)
    }

    /// Returns whether a pose was detected this frame.
    #[must_use]
    pub const fn is_detected(&self) -> bool {
        !matches!(self.tier, Tier::Undetected)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
