//! Rendering of audit reports.
//!
//! [`render_page`] builds the Bootstrap page served at `/`: the URL form, then
//! either the report sections or an error alert. [`render_text`] is the
//! command-line counterpart. Rendering only reads a [`Report`]; it never
//! touches the network or the parser. Every value interpolated into HTML goes
//! through [`escape_html`].

mod sections;
mod text;

use crate::error_handling::AnalysisError;
use crate::report::Report;

pub use text::render_text;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

/// Escapes text for use in HTML content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full page.
///
/// # Arguments
///
/// * `query_url` - URL typed by the user, echoed back into the form
/// * `outcome` - `None` when no URL was submitted, otherwise the analysis result
pub fn render_page(query_url: Option<&str>, outcome: Option<&Result<Report, AnalysisError>>) -> String {
    let mut content = sections::form(query_url);

    match outcome {
        Some(Ok(report)) => {
            content.push_str(&sections::audit_table(report));
            content.push_str(&sections::website_preview(report));
            content.push_str(&sections::social_previews(report));
            content.push_str(&sections::social_meta_table(report));
        }
        Some(Err(error)) => content.push_str(&sections::error_alert(error)),
        None => {}
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>SEO Audit &amp; Preview</title>
  <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
</head>
<body>
  <div class="container my-5">
{content}
  </div>
  <script src="{BOOTSTRAP_JS}"></script>
</body>
</html>
"#
    )
}
