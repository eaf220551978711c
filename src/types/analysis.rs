// src/types/analysis.rs
//! Analysis payload returned by the upload service and handed to the results view

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ===== Payload Contract =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub role: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub details: Details,
    #[serde(default)]
    pub suggestions: Suggestions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Details {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Value>,
    /// Fields the service sends that rendering does not use (name, education, raw text...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing_keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub improvements: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AnalysisResult {
    /// Parse and validate a payload from raw JSON text
    pub fn from_json(raw: &str) -> Result<Self> {
        let result: Self =
            serde_json::from_str(raw).context("Failed to parse analysis payload")?;
        result.validate()?;
        Ok(result)
    }

    /// Validate an already-deserialized JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let result: Self =
            serde_json::from_value(value).context("Failed to parse analysis payload")?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.score.is_finite() {
            anyhow::bail!("Score is not a finite number");
        }
        if !(0.0..=100.0).contains(&self.score) {
            anyhow::bail!("Score {} is outside 0..=100", self.score);
        }
        if let Some(breakdown) = &self.breakdown {
            if let Some((category, _)) = breakdown.iter().find(|(_, v)| !v.is_finite()) {
                anyhow::bail!("Breakdown value for '{}' is not a finite number", category);
            }
        }
        Ok(())
    }

    /// Weaknesses followed by improvements, the order the improvements list shows them
    pub fn improvement_items(&self) -> Vec<&str> {
        self.suggestions
            .weaknesses
            .iter()
            .chain(self.suggestions.improvements.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize analysis payload")
    }
}

impl Details {
    /// Portfolio signal, using JSON truthiness for whatever the service sent
    pub fn has_portfolio(&self) -> bool {
        self.projects.as_ref().map_or(false, is_truthy)
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
