//! One-shot commands: render and projects.

use std::sync::Arc;

use serde::Serialize;

use showcase_config::Config;
use showcase_core::PageRenderer;
use showcase_protocols::ProjectId;

use crate::register::build_registry;

/// Compose the page for `selected` and return it.
pub(crate) fn render_page(
    config: &Config,
    selected: Option<&str>,
) -> Result<String, Box<dyn std::error::Error>> {
    let renderer = PageRenderer::new(Arc::new(build_registry(config)?));
    Ok(renderer.render(selected).html)
}

#[derive(Debug, Serialize)]
struct ProjectRow {
    id: ProjectId,
    title: String,
    default: bool,
    active: bool,
}

/// List registered projects as a table or JSON.
pub(crate) fn list_projects(
    config: &Config,
    selected: Option<&str>,
    format: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let registry = build_registry(config)?;
    let active = registry.resolve(selected).project();

    let rows: Vec<ProjectRow> = registry
        .list_ids()
        .into_iter()
        .filter_map(|id| registry.get(id).map(|view| (id, view)))
        .map(|(id, view)| ProjectRow {
            id,
            title: view.title().to_string(),
            default: id == registry.default_project(),
            active: id == active,
        })
        .collect();

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut out = format!("{:<16} {:<18} {}\n", "PROJECT", "TITLE", "FLAGS");
    for row in rows {
        let mut flags = Vec::new();
        if row.active {
            flags.push("active");
        }
        if row.default {
            flags.push("default");
        }
        out.push_str(&format!(
            "{:<16} {:<18} {}\n",
            row.id.as_str(),
            row.title,
            flags.join(",")
        ));
    }
    Ok(out)
}
