// src/view/mod.rs
//! The page as data: named mount points the flows and renderers write into

pub mod document;

use std::time::Duration;

use crate::render::chart::RadarChart;

/// Mount point identifiers the page markup provides
pub mod ids {
    pub const SCORE_VALUE: &str = "scoreValue";
    pub const SCORE_CIRCLE: &str = "scoreCircle";
    pub const SCORE_MESSAGE: &str = "scoreMessage";
    pub const TARGET_ROLE: &str = "targetRoleDisplay";
    pub const CONTACT_LIST: &str = "contactInfoList";
    pub const FOUND_SKILLS: &str = "foundSkills";
    pub const MISSING_SKILLS: &str = "missingSkills";
    pub const STRENGTHS_LIST: &str = "strengthsList";
    pub const IMPROVEMENTS_LIST: &str = "improvementsList";
    pub const SCORE_CHART: &str = "scoreChart";
    pub const TERMINAL_LOADER: &str = "terminalLoader";
    pub const TERMINAL_LINES: &str = "terminalLines";
    pub const PROGRESS_BAR: &str = "progressBar";
    pub const FILE_NAME: &str = "fileName";
    pub const ACTION_AREA: &str = "actionArea";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    // Upload page
    pub file_name_display: String,
    pub action_area_revealed: bool,
    pub progress_surface_visible: bool,
    pub terminal_lines: Vec<String>,
    /// Index of the line currently scrolled into view
    pub terminal_scroll: Option<usize>,
    pub progress_percent: f64,

    // Results page
    pub role_label: String,
    pub score_message: String,
    pub score_display: String,
    pub gauge: GaugeState,
    pub contact_list: String,
    pub found_skills: String,
    pub missing_skills: String,
    pub strengths_list: String,
    pub improvements_list: String,
    pub chart: Option<RadarChart>,

    // Shell
    pub notifications: Vec<String>,
    pub location: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// User-facing alert
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push(message.into());
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        self.location = Some(path.into());
    }

    pub fn show_progress_surface(&mut self) {
        self.progress_surface_visible = true;
    }

    pub fn hide_progress_surface(&mut self) {
        self.progress_surface_visible = false;
    }

    pub fn append_terminal_line(&mut self, line: String) {
        self.terminal_lines.push(line);
        self.terminal_scroll = Some(self.terminal_lines.len() - 1);
    }

    pub fn set_progress(&mut self, percent: f64) {
        self.progress_percent = percent.clamp(0.0, 100.0);
    }
}

/// Stroke state of the circular score gauge
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeState {
    pub circumference: f64,
    pub dash_offset: f64,
    pub transition: Option<StrokeTransition>,
}

impl Default for GaugeState {
    fn default() -> Self {
        Self {
            circumference: 0.0,
            dash_offset: 0.0,
            transition: None,
        }
    }
}

impl GaugeState {
    pub fn dash_array(&self) -> String {
        format!("{} {}", self.circumference, self.circumference)
    }

    /// Offset actually painted `elapsed` after the transition started
    pub fn painted_offset(&self, elapsed: Duration) -> f64 {
        match &self.transition {
            Some(transition) => transition.offset_at(elapsed),
            None => self.dash_offset,
        }
    }
}

/// Eased move of the dash offset, the way a CSS transition would run it
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeTransition {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

impl StrokeTransition {
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn css(&self) -> String {
        format!(
            "stroke-dashoffset {}s ease-in-out",
            self.duration.as_secs_f64()
        )
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
