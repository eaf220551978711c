// src/render/chart.rs
//! Radar chart comparing the resume's category breakdown against a fixed reference profile

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

use crate::view::ViewState;

/// "Ideal candidate" values, matched to breakdown categories by position
pub const REFERENCE_PROFILE: [f64; 7] = [5.0, 20.0, 15.0, 15.0, 10.0, 10.0, 25.0];

pub const SUGGESTED_MIN: f64 = 0.0;
pub const SUGGESTED_MAX: f64 = 25.0;

const ACTUAL_COLOR: &str = "#00f3ff";
const ACTUAL_FILL: &str = "rgba(0, 243, 255, 0.2)";
const REFERENCE_COLOR: &str = "rgba(189, 0, 255, 0.3)";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChart {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDataset>,
    pub scale: RadialScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataset {
    pub label: String,
    /// `None` leaves a gap on that axis
    pub data: Vec<Option<f64>>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<u32>,
    pub point_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub show_ticks: bool,
}

impl RadarChart {
    pub fn from_breakdown(breakdown: &IndexMap<String, f64>) -> Self {
        let labels: Vec<String> = breakdown.keys().cloned().collect();
        let actual: Vec<Option<f64>> = breakdown.values().map(|v| Some(*v)).collect();
        let reference: Vec<Option<f64>> = (0..labels.len())
            .map(|i| REFERENCE_PROFILE.get(i).copied())
            .collect();

        Self {
            labels,
            datasets: vec![
                RadarDataset {
                    label: "Your Resume".to_string(),
                    data: actual,
                    background_color: ACTUAL_FILL.to_string(),
                    border_color: ACTUAL_COLOR.to_string(),
                    border_width: 2,
                    border_dash: Vec::new(),
                    point_radius: 3,
                },
                RadarDataset {
                    label: "Ideal Candidate".to_string(),
                    data: reference,
                    background_color: "transparent".to_string(),
                    border_color: REFERENCE_COLOR.to_string(),
                    border_width: 1,
                    border_dash: vec![4, 4],
                    point_radius: 0,
                },
            ],
            scale: RadialScale {
                suggested_min: SUGGESTED_MIN,
                suggested_max: SUGGESTED_MAX,
                show_ticks: false,
            },
        }
    }

    /// Chart.js configuration for the `scoreChart` canvas
    pub fn to_chart_config(&self) -> Value {
        json!({
            "type": "radar",
            "data": {
                "labels": self.labels,
                "datasets": self.datasets,
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "scales": {
                    "r": {
                        "suggestedMin": self.scale.suggested_min,
                        "suggestedMax": self.scale.suggested_max,
                        "ticks": { "display": self.scale.show_ticks, "backdropColor": "transparent" }
                    }
                },
                "plugins": {
                    "legend": { "position": "bottom" }
                }
            }
        })
    }
}

pub fn render_breakdown_chart(view: &mut ViewState, breakdown: Option<&IndexMap<String, f64>>) {
    view.chart = breakdown.map(RadarChart::from_breakdown);
}
