//! Pin model: the wire type describing a learned concept anchored to a
//! geographic location, and the fixed status color palette.
//!
//! Pins flow into this layer from the embedding application on every render
//! (JSON deserialization happens at that boundary). The engine never mutates
//! them; all derived per-frame state lives in [`crate::placement`].

#[cfg(test)]
#[path = "pin_test.rs"]
mod pin_test;

use serde::{Deserialize, Serialize};

/// Mastery status of a pin; selects its color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinStatus {
    /// Concept the learner has mastered.
    Mastered,
    /// Identified knowledge gap.
    Gap,
    /// Due for spaced-repetition review; drawn with a pulsing ring.
    Review,
    /// On the current learning path.
    Path,
    /// Personal/untracked note.
    Personal,
}

/// Color treatment for a status: dot fill, glow shadow, and pulse ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColors {
    pub dot: &'static str,
    pub glow: &'static str,
    pub ring: &'static str,
}

impl PinStatus {
    /// Fixed palette for this status.
    #[must_use]
    pub fn colors(self) -> StatusColors {
        match self {
            Self::Mastered => StatusColors {
                dot: "#22c55e",
                glow: "rgba(34,197,94,0.4)",
                ring: "rgba(34,197,94,0.2)",
            },
            Self::Gap => StatusColors {
                dot: "#ef4444",
                glow: "rgba(239,68,68,0.4)",
                ring: "rgba(239,68,68,0.2)",
            },
            Self::Review => StatusColors {
                dot: "#eab308",
                glow: "rgba(234,179,8,0.4)",
                ring: "rgba(234,179,8,0.2)",
            },
            Self::Path => StatusColors {
                dot: "#3b82f6",
                glow: "rgba(59,130,246,0.4)",
                ring: "rgba(59,130,246,0.2)",
            },
            Self::Personal => StatusColors {
                dot: "#a855f7",
                glow: "rgba(168,85,247,0.4)",
                ring: "rgba(168,85,247,0.2)",
            },
        }
    }

    /// Whether this status gets the pulsing attention ring.
    #[must_use]
    pub fn pulses(self) -> bool {
        matches!(self, Self::Review)
    }
}

/// A pin as supplied by the embedding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Opaque caller-supplied identity.
    pub id: String,
    /// Place name shown in detail surfaces.
    pub name: String,
    /// Concept label; the text floated above the dot.
    pub concept: String,
    /// Latitude in degrees, nominally [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, nominally [-180, 180].
    pub longitude: f64,
    /// Mastery status driving the color treatment.
    pub status: PinStatus,
    /// Recall strength 0–100; display-only.
    pub strength: f64,
    /// Knowledge domain label; display-only.
    pub domain: String,
}
