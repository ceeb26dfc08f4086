//! Project registry.
//!
//! Built once at startup and read-only afterwards. The default project is
//! checked when the registry is built, so lookups never come back empty.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use showcase_protocols::{ProjectId, RegistryError, ViewProvider};

use crate::selector::{self, Selection};

/// Immutable mapping from project to view provider.
pub struct ProjectRegistry {
    providers: HashMap<ProjectId, Arc<dyn ViewProvider>>,
    default: ProjectId,
    default_provider: Arc<dyn ViewProvider>,
}

impl ProjectRegistry {
    /// Start building a registry.
    pub fn builder() -> ProjectRegistryBuilder {
        ProjectRegistryBuilder::default()
    }

    /// Get a provider by project.
    pub fn get(&self, id: ProjectId) -> Option<Arc<dyn ViewProvider>> {
        self.providers.get(&id).cloned()
    }

    /// Check if a project is registered.
    pub fn contains(&self, id: ProjectId) -> bool {
        self.providers.contains_key(&id)
    }

    /// The project used when the configured name does not match.
    pub fn default_project(&self) -> ProjectId {
        self.default
    }

    /// Provider of the default project.
    pub fn default_provider(&self) -> Arc<dyn ViewProvider> {
        self.default_provider.clone()
    }

    /// Registered projects in display order.
    pub fn list_ids(&self) -> Vec<ProjectId> {
        let mut ids: Vec<ProjectId> = self.providers.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Number of registered projects.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Always false for a built registry; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Decide which project a configured name maps to.
    pub fn resolve(&self, name: Option<&str>) -> Selection {
        selector::resolve(self, name, self.default)
    }

    /// Provider for an already resolved selection.
    pub fn provider_for(&self, selection: Selection) -> Arc<dyn ViewProvider> {
        self.get(selection.project()).unwrap_or_else(|| self.default_provider())
    }

    /// Provider for a configured name, falling back to the default.
    pub fn select(&self, name: Option<&str>) -> Arc<dyn ViewProvider> {
        self.provider_for(self.resolve(name))
    }
}

impl std::fmt::Debug for ProjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectRegistry")
            .field("projects", &self.list_ids())
            .field("default", &self.default)
            .finish()
    }
}

/// Collects providers before the registry is frozen.
#[derive(Default)]
pub struct ProjectRegistryBuilder {
    providers: HashMap<ProjectId, Arc<dyn ViewProvider>>,
}

impl ProjectRegistryBuilder {
    /// Register a provider.
    ///
    /// Returns an error if a provider for the same project is already registered.
    pub fn register(mut self, provider: Arc<dyn ViewProvider>) -> Result<Self, RegistryError> {
        let id = provider.id();
        if self.providers.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        self.providers.insert(id, provider);
        Ok(self)
    }

    /// Freeze the registry with `default` as the fallback project.
    pub fn build(self, default: ProjectId) -> Result<ProjectRegistry, RegistryError> {
        if self.providers.is_empty() {
            return Err(RegistryError::Empty);
        }

        let default_provider = self
            .providers
            .get(&default)
            .cloned()
            .ok_or(RegistryError::DefaultNotRegistered(default))?;

        debug!(
            "Project registry built: {} project(s), default={}",
            self.providers.len(),
            default
        );

        Ok(ProjectRegistry {
            providers: self.providers,
            default,
            default_provider,
        })
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
