//! Project identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseProjectError;

/// A project the host can serve.
///
/// This is the single point where a configured string becomes something the
/// rest of the system can rely on. Anything that does not parse here is
/// treated as "no selection" by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectId {
    #[serde(rename = "projectOne")]
    ProjectOne,
    #[serde(rename = "projectTwo")]
    ProjectTwo,
    #[serde(rename = "projectWeather")]
    ProjectWeather,
}

impl ProjectId {
    /// Every known project, in display order.
    pub const ALL: [ProjectId; 3] = [
        ProjectId::ProjectOne,
        ProjectId::ProjectTwo,
        ProjectId::ProjectWeather,
    ];

    /// Canonical configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectId::ProjectOne => "projectOne",
            ProjectId::ProjectTwo => "projectTwo",
            ProjectId::ProjectWeather => "projectWeather",
        }
    }

    /// Parse an optional configured name. Empty and unknown values yield `None`.
    pub fn parse_optional(name: Option<&str>) -> Option<ProjectId> {
        name.and_then(|n| n.parse().ok())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectId {
    type Err = ParseProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ProjectId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| ParseProjectError(name.to_string()))
    }
}
