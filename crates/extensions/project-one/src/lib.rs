//! # Showcase Project One
//!
//! A short list of articles. This is the default project.

use std::fmt::Write;

use showcase_protocols::{escape_html, Fragment, ProjectId, ViewProvider};

/// One article entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub date: String,
    pub summary: String,
}

impl Article {
    pub fn new(title: impl Into<String>, date: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            summary: summary.into(),
        }
    }
}

/// Article listing view.
pub struct ProjectOneView {
    title: String,
    articles: Vec<Article>,
}

impl ProjectOneView {
    pub fn new(title: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            title: title.into(),
            articles,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }
}

impl Default for ProjectOneView {
    fn default() -> Self {
        Self::new(
            "Project One",
            vec![
                Article::new(
                    "Hello, world",
                    "2024-01-08",
                    "First post on the new site.",
                ),
                Article::new(
                    "Notes on layouts",
                    "2024-02-19",
                    "One shell, many pages.",
                ),
            ],
        )
    }
}

impl ViewProvider for ProjectOneView {
    fn id(&self) -> ProjectId {
        ProjectId::ProjectOne
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self) -> Fragment {
        let mut html = String::new();
        let _ = write!(
            html,
            "<main class=\"project project-one\"><h1>{}</h1>",
            escape_html(&self.title)
        );

        if self.articles.is_empty() {
            html.push_str("<p class=\"empty\">Nothing published yet.</p>");
        }

        for article in &self.articles {
            let _ = write!(
                html,
                "<article><h2>{}</h2><time datetime=\"{date}\">{date}</time><p>{}</p></article>",
                escape_html(&article.title),
                escape_html(&article.summary),
                date = escape_html(&article.date),
            );
        }

        html.push_str("</main>");
        Fragment::new(html)
    }
}
