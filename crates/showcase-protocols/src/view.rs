//! View provider protocol.

use std::fmt;

use crate::project::ProjectId;

/// Markup produced by a view provider.
///
/// The host embeds it verbatim and never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Fragment {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A project view.
///
/// Rendering takes no input and cannot fail.
pub trait ViewProvider: Send + Sync {
    /// The project this provider renders.
    fn id(&self) -> ProjectId;

    /// Human-readable title.
    fn title(&self) -> &str;

    /// Produce the view's markup.
    fn render(&self) -> Fragment;
}

/// Escape text for interpolation into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticView;

    impl ViewProvider for StaticView {
        fn id(&self) -> ProjectId {
            ProjectId::ProjectTwo
        }

        fn title(&self) -> &str {
            "Static"
        }

        fn render(&self) -> Fragment {
            Fragment::new("<p>static</p>")
        }
    }

    #[test]
    fn test_fragment_accessors() {
        let fragment = Fragment::new("<main></main>");
        assert_eq!(fragment.as_str(), "<main></main>");
        assert_eq!(fragment.to_string(), "<main></main>");
        assert_eq!(fragment.into_string(), "<main></main>");
    }

    #[test]
    fn test_fragment_from_string() {
        let fragment: Fragment = String::from("<p>x</p>").into();
        assert_eq!(fragment, Fragment::new("<p>x</p>"));
    }

    #[test]
    fn test_view_provider_object_safe() {
        let view: Box<dyn ViewProvider> = Box::new(StaticView);
        assert_eq!(view.id(), ProjectId::ProjectTwo);
        assert_eq!(view.title(), "Static");
        assert_eq!(view.render().as_str(), "<p>static</p>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
