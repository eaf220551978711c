// src/render/result.rs
//! Fills the textual mount points of the results view from an analysis payload.
//! Every call overwrites container contents, so rendering twice gives the same page.

use std::fmt::Write as _;

use super::escape_html;
use super::score_message::score_message;
use crate::types::AnalysisResult;
use crate::view::ViewState;

pub const NOT_FOUND: &str = "Not Found";
pub const PORTFOLIO_DETECTED: &str = "Detected";
pub const PORTFOLIO_MISSING: &str = "Missing";
pub const NO_TAGS: &str = "None detected";
pub const NO_ITEMS: &str = "None found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    Positive,
    Negative,
}

impl TagStyle {
    fn class(self) -> &'static str {
        match self {
            TagStyle::Positive => "tag tag-positive",
            TagStyle::Negative => "tag tag-negative",
        }
    }
}

struct ContactField<'a> {
    label: &'static str,
    icon: &'static str,
    value: Option<&'a str>,
}

pub fn render_result(view: &mut ViewState, result: &AnalysisResult) {
    view.role_label = result.role.clone();
    view.score_message = score_message(result.score).to_string();
    view.contact_list = render_contacts(result);
    view.found_skills = render_tags(&result.details.skills, TagStyle::Positive);
    view.missing_skills = render_tags(&result.suggestions.missing_keywords, TagStyle::Negative);
    view.strengths_list = render_list(&result.suggestions.strengths);
    view.improvements_list = render_list(&result.improvement_items());
}

fn render_contacts(result: &AnalysisResult) -> String {
    let portfolio = if result.details.has_portfolio() {
        PORTFOLIO_DETECTED
    } else {
        PORTFOLIO_MISSING
    };

    let fields = [
        ContactField {
            label: "Email",
            icon: "fa-envelope",
            value: non_empty(result.details.email.as_deref()),
        },
        ContactField {
            label: "Phone",
            icon: "fa-phone",
            value: non_empty(result.details.phone.as_deref()),
        },
        ContactField {
            label: "Portfolio",
            icon: "fa-globe",
            value: Some(portfolio),
        },
    ];

    let mut html = String::new();
    for field in &fields {
        let found = matches!(field.value, Some(v) if v != PORTFOLIO_MISSING);
        let _ = write!(
            html,
            r#"<div class="contact-row"><span class="contact-label"><i class="fa-solid {}"></i> {}</span><span class="contact-value {}">{}</span></div>"#,
            field.icon,
            field.label,
            if found { "found" } else { "miss" },
            escape_html(field.value.unwrap_or(NOT_FOUND)),
        );
    }
    html
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn render_tags<S: AsRef<str>>(items: &[S], style: TagStyle) -> String {
    if items.is_empty() {
        return format!(r#"<span class="tag-placeholder">{}</span>"#, NO_TAGS);
    }
    items
        .iter()
        .map(|item| {
            format!(
                r#"<span class="{}">{}</span>"#,
                style.class(),
                escape_html(item.as_ref())
            )
        })
        .collect()
}

pub fn render_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return format!(r#"<li class="list-placeholder">{}</li>"#, NO_ITEMS);
    }
    items
        .iter()
        .map(|item| format!("<li><span>{}</span></li>", escape_html(item.as_ref())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> AnalysisResult {
        AnalysisResult::from_value(value).unwrap()
    }

    #[test]
    fn test_render_is_idempotent() {
        let result = payload(json!({
            "role": "Engineer",
            "score": 72,
            "details": { "email": "a@b.c", "skills": ["Rust", "Go"], "projects": true },
            "suggestions": {
                "strengths": ["Clear layout"],
                "weaknesses": ["No summary"],
                "improvements": ["Add metrics"],
                "missing_keywords": ["kubernetes"]
            }
        }));

        let mut view = ViewState::new();
        render_result(&mut view, &result);
        let first = view.clone();
        render_result(&mut view, &result);
        assert_eq!(view, first);
        assert_eq!(view.score_message, "Good, but needs optimization.");
        assert_eq!(view.role_label, "Engineer");
    }

    #[test]
    fn test_empty_tag_lists_render_placeholder() {
        let result = payload(json!({
            "role": "Engineer",
            "score": 50,
            "details": { "skills": [] },
            "suggestions": { "missing_keywords": [] }
        }));
        let mut view = ViewState::new();
        render_result(&mut view, &result);

        assert!(view.found_skills.contains(NO_TAGS));
        assert!(view.missing_skills.contains(NO_TAGS));
        assert!(view.strengths_list.contains(NO_ITEMS));
        assert!(view.improvements_list.contains(NO_ITEMS));
    }

    #[test]
    fn test_missing_email_and_found_phone() {
        let result = payload(json!({
            "role": "Engineer",
            "score": 50,
            "details": { "phone": "555-1234" }
        }));
        let mut view = ViewState::new();
        render_result(&mut view, &result);

        assert!(view
            .contact_list
            .contains(r#"Email</span><span class="contact-value miss">Not Found</span>"#));
        assert!(view
            .contact_list
            .contains(r#"Phone</span><span class="contact-value found">555-1234</span>"#));
        assert!(view
            .contact_list
            .contains(r#"Portfolio</span><span class="contact-value miss">Missing</span>"#));
    }

    #[test]
    fn test_empty_email_counts_as_missing() {
        let result = payload(json!({
            "role": "Engineer",
            "score": 50,
            "details": { "email": "" }
        }));
        let mut view = ViewState::new();
        render_result(&mut view, &result);
        assert!(view
            .contact_list
            .contains(r#"Email</span><span class="contact-value miss">Not Found</span>"#));
    }

    #[test]
    fn test_tags_and_lists_are_escaped_and_ordered() {
        assert_eq!(
            render_tags(&["C++", "<script>"], TagStyle::Negative),
            r#"<span class="tag tag-negative">C++</span><span class="tag tag-negative">&lt;script&gt;</span>"#
        );
        assert_eq!(
            render_list(&["w", "i"]),
            "<li><span>w</span></li><li><span>i</span></li>"
        );
    }

    #[test]
    fn test_improvements_list_puts_weaknesses_first() {
        let result = payload(json!({
            "role": "Engineer",
            "score": 50,
            "suggestions": { "weaknesses": ["weak"], "improvements": ["improve"] }
        }));
        let mut view = ViewState::new();
        render_result(&mut view, &result);
        let weak = view.improvements_list.find("weak").unwrap();
        let improve = view.improvements_list.find("improve").unwrap();
        assert!(weak < improve);
    }
}
