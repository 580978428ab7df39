//! Plain-text rendering for the command line.

use colored::*;

use crate::audit::AuditResult;
use crate::report::Report;
use crate::utils::sanitize::sanitize_error_message;

/// Renders the report as an aligned table followed by the extra social tags.
///
/// Values taken from the page are stripped of control characters so a hostile
/// document cannot emit terminal escape sequences.
pub fn render_text(report: &Report) -> String {
    let name_width = report
        .audits
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(0);
    let status_width = report
        .audits
        .iter()
        .map(|a| terminal_safe(&a.status_text()).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "SEO audit for {}\n\n",
        terminal_safe(&report.source_url).bold()
    );
    for audit in &report.audits {
        out.push_str(&format!(
            "  {:<name_width$}  {}  {}\n",
            audit.name,
            status_cell(audit, status_width),
            audit.suggestion
        ));
    }
    out.push_str(&format!(
        "\n{}/{} checks passing\n",
        report.passing_checks(),
        report.audits.len()
    ));

    if !report.extra_social_meta.is_empty() {
        out.push_str("\nOther OG/Twitter meta tags:\n");
        for (key, value) in report.extra_social_meta.iter() {
            out.push_str(&format!(
                "  {} = {}\n",
                terminal_safe(key),
                terminal_safe(value)
            ));
        }
    }
    out
}

/// Drops control characters and flattens line breaks.
fn terminal_safe(value: &str) -> String {
    sanitize_error_message(value)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn status_cell(audit: &AuditResult, width: usize) -> ColoredString {
    let padded = format!("{:<width$}", terminal_safe(&audit.status_text()));
    if audit.status.is_present() {
        padded.green()
    } else {
        padded.yellow()
    }
}
