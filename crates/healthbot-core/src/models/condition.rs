//! Health condition profile models.

use serde::{Deserialize, Serialize};

/// Severity of a health condition, as entered by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Recognized condition codes.
///
/// Free-text condition names are mapped onto this closed set once, when the
/// condition enters the profile, so rule evaluation never has to re-scan
/// names. Anything unrecognized becomes [`ConditionCode::Other`] and still
/// contributes generic wellness reminders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCode {
    Diabetes,
    Hypertension,
    Other,
}

impl ConditionCode {
    /// Keyword registry: case-insensitive substring of the condition name.
    const KEYWORDS: &'static [(&'static str, ConditionCode)] = &[
        ("diabetes", ConditionCode::Diabetes),
        ("hypertension", ConditionCode::Hypertension),
    ];

    /// Map a free-text condition name onto recognized codes.
    ///
    /// Multiple keywords may match one name. No match yields `[Other]`,
    /// never an empty set.
    pub fn detect(name: &str) -> Vec<ConditionCode> {
        let lower = name.to_lowercase();
        let matched: Vec<ConditionCode> = Self::KEYWORDS
            .iter()
            .filter(|(keyword, _)| lower.contains(*keyword))
            .map(|(_, code)| *code)
            .collect();
        if matched.is_empty() {
            vec![ConditionCode::Other]
        } else {
            matched
        }
    }
}

/// A user-entered health condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthCondition {
    /// Opaque identifier, generated locally
    pub id: String,
    /// Free-text condition name (e.g., "Diabetes Type 2")
    pub name: String,
    /// User-assessed severity
    pub severity: Severity,
    /// Current medications, in entry order
    pub medications: Vec<String>,
    /// Free-text dietary restrictions, in entry order
    pub dietary_restrictions: Vec<String>,
    /// Codes derived from the name at entry time; profiles saved by older
    /// writers omit this field and get it re-derived on load
    #[serde(default)]
    pub codes: Vec<ConditionCode>,
}

impl HealthCondition {
    /// Create a condition, deriving its codes from the name.
    pub fn new(
        name: impl Into<String>,
        severity: Severity,
        medications: Vec<String>,
        dietary_restrictions: Vec<String>,
    ) -> Self {
        let name = name.into();
        let codes = ConditionCode::detect(&name);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            severity,
            medications,
            dietary_restrictions,
            codes,
        }
    }

    /// Build a condition from the profile form's raw fields, where
    /// medications and restrictions arrive as comma-separated text.
    pub fn from_form_input(
        name: &str,
        severity: Severity,
        medications: &str,
        dietary_restrictions: &str,
    ) -> Self {
        Self::new(
            name.trim(),
            severity,
            split_comma_list(medications),
            split_comma_list(dietary_restrictions),
        )
    }

    /// Re-derive codes if this record predates the `codes` field.
    pub fn ensure_codes(&mut self) {
        if self.codes.is_empty() {
            self.codes = ConditionCode::detect(&self.name);
        }
    }

    /// Whether this condition carries the given code.
    pub fn has_code(&self, code: ConditionCode) -> bool {
        self.codes.contains(&code)
    }
}

fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
