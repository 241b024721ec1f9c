//! Standards a chat query can be scoped to.

#[cfg(test)]
#[path = "standard_test.rs"]
mod standard_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Carbon-market taxonomy tag sent as `selected_standard` with every question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standard {
    /// Gold Standard.
    #[default]
    Gs,
    /// Verra Verified Carbon Standard.
    Vcs,
    /// International Carbon Registry.
    Icr,
    PlanVivo,
    Other,
}

/// Error returned when a string names no known [`Standard`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown standard '{0}' (expected gs, vcs, icr, plan_vivo or other)")]
pub struct UnknownStandard(pub String);

impl Standard {
    /// Selector order used by every front end.
    pub const ALL: [Self; 5] = [Self::Gs, Self::Vcs, Self::Icr, Self::PlanVivo, Self::Other];

    /// Wire value for `selected_standard`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gs => "gs",
            Self::Vcs => "vcs",
            Self::Icr => "icr",
            Self::PlanVivo => "plan_vivo",
            Self::Other => "other",
        }
    }

    /// Human label shown in the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gs => "GS",
            Self::Vcs => "VCS",
            Self::Icr => "ICR",
            Self::PlanVivo => "Plan Vivo",
            Self::Other => "Other",
        }
    }

    /// Parse a wire value or one of the aliases the answer backend also accepts
    /// (`verra`, `gold_standard`, `planvivo`, ...). Case, `-` and spaces are ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "gs" | "gold_standard" => Some(Self::Gs),
            "vcs" | "verra" => Some(Self::Vcs),
            "icr" => Some(Self::Icr),
            "plan_vivo" | "planvivo" => Some(Self::PlanVivo),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Standard {
    type Err = UnknownStandard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownStandard(s.to_owned()))
    }
}
