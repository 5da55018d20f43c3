//! Cafeteria menu models.

use serde::{Deserialize, Serialize};

/// Meal slot a menu item belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Nutrient values per serving. Grams except sodium, which is milligrams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nutrients {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sodium: u32,
}

/// Suitability verdict for a menu item.
///
/// Totally ordered: `Recommended < Caution < Avoid`, where greater means
/// more restrictive. A classification pass only ever moves a verdict toward
/// `Avoid` (monotonic escalation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Recommended,
    Caution,
    Avoid,
}

impl Verdict {
    /// One step more restrictive, saturating at `Avoid`.
    pub fn escalate(self) -> Verdict {
        match self {
            Verdict::Recommended => Verdict::Caution,
            Verdict::Caution | Verdict::Avoid => Verdict::Avoid,
        }
    }
}

/// A single cafeteria menu item: static reference data supplied at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: MealCategory,
    pub calories: u32,
    pub nutrients: Nutrients,
    /// Catalog-default verdict before any condition rules apply
    #[serde(rename = "suitability")]
    pub base_verdict: Verdict,
    /// Catalog-default reasons, kept ahead of any rule contributions
    #[serde(rename = "reasons")]
    pub base_reasons: Vec<String>,
    /// Suggested swaps, carried through for display only
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// A menu item with its final verdict for a condition profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub verdict: Verdict,
    /// Base reasons followed by rule contributions in firing order;
    /// duplicates are kept, one per contributing condition/restriction
    pub verdict_reasons: Vec<String>,
}
