//! Project selection with fallback.

use std::sync::Arc;

use serde::Serialize;

use showcase_protocols::{ProjectId, ViewProvider};

use crate::registry::ProjectRegistry;

/// Outcome of resolving a configured name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "project", rename_all = "snake_case")]
pub enum Selection {
    /// The configured name matched a registered project.
    Requested(ProjectId),
    /// Missing or unmatched name; the default project is used.
    Fallback(ProjectId),
}

impl Selection {
    /// The project that will be rendered.
    pub fn project(&self) -> ProjectId {
        match self {
            Selection::Requested(id) | Selection::Fallback(id) => *id,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback(_))
    }
}

/// Decide which project `name` maps to, falling back to `default`.
///
/// A name that parses but is not registered falls back like an unknown one.
pub fn resolve(registry: &ProjectRegistry, name: Option<&str>, default: ProjectId) -> Selection {
    match ProjectId::parse_optional(name) {
        Some(id) if registry.contains(id) => Selection::Requested(id),
        _ => Selection::Fallback(default),
    }
}

/// Look up `name` in `registry`, falling back to `default`.
///
/// Pure lookup. Returns `None` only when `default` itself is not registered,
/// which [`ProjectRegistry`] construction already rules out for its own default.
pub fn select(
    registry: &ProjectRegistry,
    name: Option<&str>,
    default: ProjectId,
) -> Option<Arc<dyn ViewProvider>> {
    registry.get(resolve(registry, name, default).project())
}
