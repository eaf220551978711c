// src/render/mod.rs
//! Results view widgets

pub mod chart;
pub mod gauge;
pub mod result;
pub mod score_message;

pub use chart::RadarChart;
pub use result::render_result;
pub use score_message::score_message;

/// Escape payload text before it goes into markup or a double-quoted attribute
pub fn escape_html(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}
