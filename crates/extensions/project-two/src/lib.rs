//! # Showcase Project Two
//!
//! A small task board grouped by status.

use std::fmt::Write;

use showcase_protocols::{escape_html, Fragment, ProjectId, ViewProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Doing, TaskStatus::Done];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::Doing => "In progress",
            TaskStatus::Done => "Done",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(name: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Task board view.
pub struct ProjectTwoView {
    title: String,
    tasks: Vec<Task>,
}

impl ProjectTwoView {
    pub fn new(title: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            title: title.into(),
            tasks,
        }
    }

    /// Tasks with the given status, in insertion order.
    pub fn tasks_with(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.status == status)
    }
}

impl Default for ProjectTwoView {
    fn default() -> Self {
        Self::new(
            "Project Two",
            vec![
                Task::new("Sketch the landing page", TaskStatus::Done),
                Task::new("Wire up the board", TaskStatus::Doing),
                Task::new("Write release notes", TaskStatus::Todo),
            ],
        )
    }
}

impl ViewProvider for ProjectTwoView {
    fn id(&self) -> ProjectId {
        ProjectId::ProjectTwo
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self) -> Fragment {
        let mut html = String::new();
        let _ = write!(
            html,
            "<main class=\"project project-two\"><h1>{}</h1><div class=\"board\">",
            escape_html(&self.title)
        );

        // Every column is rendered, even when empty, so the layout stays fixed.
        for status in TaskStatus::ALL {
            let _ = write!(
                html,
                "<section class=\"column {}\"><h2>{}</h2><ul>",
                status.class(),
                status.label()
            );
            for task in self.tasks_with(status) {
                let _ = write!(html, "<li>{}</li>", escape_html(&task.name));
            }
            html.push_str("</ul></section>");
        }

        html.push_str("</div></main>");
        Fragment::new(html)
    }
}
