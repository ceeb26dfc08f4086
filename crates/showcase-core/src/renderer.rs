//! Select, render and wrap in one step.

use std::sync::Arc;

use showcase_protocols::ProjectId;

use crate::registry::ProjectRegistry;
use crate::selector::Selection;
use crate::shell;

/// A composed page and the project it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub selection: Selection,
    pub title: String,
    pub html: String,
}

impl RenderedPage {
    pub fn project(&self) -> ProjectId {
        self.selection.project()
    }
}

/// Renders full documents from a shared registry.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    registry: Arc<ProjectRegistry>,
}

impl PageRenderer {
    pub fn new(registry: Arc<ProjectRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ProjectRegistry> {
        &self.registry
    }

    /// Render the page for a configured name.
    ///
    /// Unknown or missing names render the default project.
    pub fn render(&self, name: Option<&str>) -> RenderedPage {
        let selection = self.registry.resolve(name);
        let provider = self.registry.provider_for(selection);
        let fragment = provider.render();

        RenderedPage {
            selection,
            title: provider.title().to_string(),
            html: shell::compose(&fragment),
        }
    }
}
