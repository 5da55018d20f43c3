//! Nutrient threshold rules, keyed by condition code.
//!
//! Each rule inspects one `(item, code)` pair and either stays silent or
//! produces a [`RuleHit`]: a verdict contribution plus a human-readable
//! reason naming the condition or restriction that fired.

use crate::models::{ConditionCode, Nutrients, Verdict};

/// Carbs (g) above which a diabetes-coded condition forces `Avoid`.
pub const DIABETES_CARBS_AVOID: u32 = 60;
/// Carbs (g) above which a diabetes-coded condition escalates one step.
pub const DIABETES_CARBS_CAUTION: u32 = 50;
/// Sodium (mg) above which a diabetes-coded condition escalates one step.
pub const DIABETES_SODIUM_CAUTION: u32 = 800;
/// Sodium (mg) above which a hypertension-coded condition escalates one step.
pub const HYPERTENSION_SODIUM_LIMIT: u32 = 600;
/// Sodium (mg) above which a "low sodium" restriction raises to `Caution`.
pub const LOW_SODIUM_RESTRICTION_LIMIT: u32 = 400;

/// Restriction keyword checked against the free-text restriction entries.
const LOW_SODIUM_KEYWORD: &str = "low sodium";

/// One fired rule: the contributed verdict and its reason string.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHit {
    pub verdict: Verdict,
    pub reason: String,
}

/// Evaluate the rule set of a condition code against an item's nutrients.
///
/// `current` is the verdict accumulated so far for the item; escalating
/// rules contribute one step worse than it, so the aggregate can only move
/// toward `Avoid`.
pub fn evaluate_code(
    code: ConditionCode,
    condition_name: &str,
    nutrients: &Nutrients,
    current: Verdict,
) -> Option<RuleHit> {
    match code {
        ConditionCode::Diabetes => {
            let verdict = if nutrients.carbs > DIABETES_CARBS_AVOID {
                Verdict::Avoid
            } else if nutrients.carbs > DIABETES_CARBS_CAUTION
                || nutrients.sodium > DIABETES_SODIUM_CAUTION
            {
                current.escalate()
            } else {
                return None;
            };
            Some(RuleHit {
                verdict,
                reason: format!("{condition_name}: Monitor carbohydrate and sodium intake"),
            })
        }
        ConditionCode::Hypertension => {
            if nutrients.sodium > HYPERTENSION_SODIUM_LIMIT {
                Some(RuleHit {
                    verdict: current.escalate(),
                    reason: format!(
                        "{condition_name}: High sodium content may affect blood pressure"
                    ),
                })
            } else {
                None
            }
        }
        ConditionCode::Other => None,
    }
}

/// Evaluate a free-text dietary restriction against an item's nutrients.
pub fn evaluate_restriction(
    restriction: &str,
    nutrients: &Nutrients,
    current: Verdict,
) -> Option<RuleHit> {
    if restriction.to_lowercase().contains(LOW_SODIUM_KEYWORD)
        && nutrients.sodium > LOW_SODIUM_RESTRICTION_LIMIT
    {
        Some(RuleHit {
            verdict: current.max(Verdict::Caution),
            reason: format!("Dietary restriction: {restriction} - consider smaller portion"),
        })
    } else {
        None
    }
}
