//! The fixed outer document every project is rendered into.

use showcase_protocols::Fragment;

/// Document language attribute.
pub const LANG: &str = "en";

/// Wrap a single fragment in the document root and body container.
pub fn compose(fragment: &Fragment) -> String {
    let body = fragment.as_str();
    let mut html = String::with_capacity(body.len() + 64);
    html.push_str("<!DOCTYPE html>");
    html.push_str("<html lang=\"");
    html.push_str(LANG);
    html.push_str("\"><body>");
    html.push_str(body);
    html.push_str("</body></html>");
    html
}
