//! Page sections.

use super::escape_html;
use crate::error_handling::AnalysisError;
use crate::report::{Platform, PreviewCard, Report};

pub(super) fn form(query_url: Option<&str>) -> String {
    let value = query_url.map(escape_html).unwrap_or_default();
    format!(
        r#"    <div class="row mb-4">
      <div class="col">
        <h1 class="mb-4">SEO Audit &amp; Social Media Preview</h1>
        <form method="GET" action="/">
          <div class="input-group">
            <input type="text" name="url" class="form-control" placeholder="Enter URL" value="{value}" required>
            <button class="btn btn-primary" type="submit">Analyze</button>
          </div>
        </form>
      </div>
    </div>
"#
    )
}

pub(super) fn audit_table(report: &Report) -> String {
    let rows: String = report
        .audits
        .iter()
        .map(|audit| {
            format!(
                "          <tr>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n          </tr>\n",
                escape_html(audit.name),
                escape_html(&audit.status_text()),
                escape_html(&audit.suggestion)
            )
        })
        .collect();

    format!(
        r#"    <h2 class="mb-3">SEO Audit</h2>
    <div class="table-responsive mb-5">
      <table class="table table-bordered">
        <thead class="table-light">
          <tr><th>SEO Element</th><th>Status</th><th>Suggestion</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
      </table>
    </div>
"#
    )
}

pub(super) fn website_preview(report: &Report) -> String {
    let Some(card) = report
        .previews
        .iter()
        .find(|c| c.platform == Platform::Website)
    else {
        return String::new();
    };
    let declared = card.url.as_deref().unwrap_or(&report.source_url);
    // Only http(s) targets become links; anything else is shown as text
    let href = [declared, report.source_url.as_str()]
        .into_iter()
        .find(|candidate| is_web_url(candidate))
        .map(escape_html)
        .unwrap_or_else(|| "#".to_string());
    let url = escape_html(declared);

    format!(
        r#"    <h2 class="mb-3">Website Preview</h2>
    <div class="card mb-4">
      <img src="{image}" class="card-img-top" alt="OG Image">
      <div class="card-body">
        <h5 class="card-title">{title}</h5>
        <p class="card-text">{description}</p>
        <a href="{href}" class="btn btn-primary" target="_blank" rel="noopener">{url}</a>
      </div>
    </div>
"#,
        image = escape_html(&card.image),
        title = escape_html(&card.title),
        description = escape_html(&card.description),
    )
}

fn is_web_url(candidate: &str) -> bool {
    url::Url::parse(candidate).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}

pub(super) fn social_previews(report: &Report) -> String {
    let cards: String = report
        .previews
        .iter()
        .filter(|c| c.platform != Platform::Website)
        .map(social_card)
        .collect();

    format!(
        r#"    <h2 class="mb-3">Social Media Previews</h2>
    <div class="row mb-4">
{cards}    </div>
"#
    )
}

fn social_card(card: &PreviewCard) -> String {
    let badge = match card.platform {
        Platform::Facebook => "bg-primary",
        Platform::Twitter => "bg-info text-dark",
        Platform::TikTok | Platform::Website => "bg-dark",
    };
    format!(
        r#"      <div class="col-md-4">
        <div class="card">
          <img src="{image}" class="card-img-top" alt="{platform} Preview">
          <div class="card-body">
            <h5 class="card-title">{title}</h5>
            <p class="card-text">{description}</p>
            <span class="badge {badge}">{platform}</span>
          </div>
        </div>
      </div>
"#,
        image = escape_html(&card.image),
        title = escape_html(&card.title),
        description = escape_html(&card.description),
        platform = card.platform,
    )
}

pub(super) fn social_meta_table(report: &Report) -> String {
    let rows: String = report
        .extra_social_meta
        .iter()
        .map(|(key, value)| {
            format!(
                "          <tr>\n            <td>{}</td>\n            <td>{}</td>\n          </tr>\n",
                escape_html(key),
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"    <h2 class="mb-3">Other OG/Twitter Meta Tags</h2>
    <div class="table-responsive mb-5">
      <table class="table table-striped">
        <thead class="table-light">
          <tr><th>Tag</th><th>Content</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
      </table>
    </div>
"#
    )
}

pub(super) fn error_alert(error: &AnalysisError) -> String {
    format!(
        r#"    <div class="alert alert-danger" role="alert">
      {}
    </div>
"#,
        escape_html(&error.to_string())
    )
}
