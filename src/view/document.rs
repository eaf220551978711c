// src/view/document.rs
//! Serializes the results view into a standalone HTML page with the same mount point ids

use std::fmt::Write as _;

use super::{ids, ViewState};
use crate::render::escape_html;

/// Keep the embedded JSON from closing its script block early
fn escape_json_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

pub fn render_results_document(view: &ViewState) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Resume Analysis</title>\n</head>\n<body>\n");

    let transition = view
        .gauge
        .transition
        .as_ref()
        .map(|t| format!(" transition: {};", t.css()))
        .unwrap_or_default();

    let _ = write!(
        html,
        r#"<section class="score">
<svg viewBox="0 0 100 100"><circle id="{circle}" cx="50" cy="50" r="45" style="stroke-dasharray: {dash}; stroke-dashoffset: {offset};{transition}"/></svg>
<span id="{value}">{display}</span>
<p id="{message}">{message_text}</p>
<p id="{role}">{role_text}</p>
</section>
"#,
        circle = ids::SCORE_CIRCLE,
        dash = view.gauge.dash_array(),
        offset = view.gauge.dash_offset,
        transition = transition,
        value = ids::SCORE_VALUE,
        display = escape_html(&view.score_display),
        message = ids::SCORE_MESSAGE,
        message_text = escape_html(&view.score_message),
        role = ids::TARGET_ROLE,
        role_text = escape_html(&view.role_label),
    );

    // Container contents are already escaped markup
    let containers = [
        ("div", ids::CONTACT_LIST, &view.contact_list),
        ("div", ids::FOUND_SKILLS, &view.found_skills),
        ("div", ids::MISSING_SKILLS, &view.missing_skills),
        ("ul", ids::STRENGTHS_LIST, &view.strengths_list),
        ("ul", ids::IMPROVEMENTS_LIST, &view.improvements_list),
    ];
    for (tag, id, content) in containers {
        let _ = writeln!(html, r#"<{tag} id="{id}">{content}</{tag}>"#);
    }

    let _ = writeln!(html, r#"<canvas id="{}"></canvas>"#, ids::SCORE_CHART);
    if let Some(chart) = &view.chart {
        let _ = writeln!(
            html,
            r#"<script type="application/json" id="{}Config">{}</script>"#,
            ids::SCORE_CHART,
            escape_json_for_script(&chart.to_chart_config().to_string())
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Plain-text rendition of the progress surface
pub fn render_terminal_transcript(view: &ViewState) -> String {
    let mut out = String::new();
    for line in &view.terminal_lines {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out, "[{:>3.0}%]", view.progress_percent);
    out
}
