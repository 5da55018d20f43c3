//! Menu suitability classifier.
//!
//! Pipeline per item: catalog base verdict → condition-code rules →
//! dietary-restriction rules, folding every contribution with a monotonic
//! max so a verdict never moves back toward `Recommended` within a pass.
//! Reasons accumulate in firing order and duplicates are kept, one per
//! contributing condition or restriction.

pub mod rules;

use crate::models::{ClassifiedMenuItem, HealthCondition, MenuItem};

/// Classify every item of a menu against a condition profile.
///
/// Deterministic and total: the same `(conditions, menu)` input yields
/// byte-identical output, including reason ordering.
pub fn classify_menu(
    conditions: &[HealthCondition],
    menu: &[MenuItem],
) -> Vec<ClassifiedMenuItem> {
    menu.iter()
        .map(|item| classify_item(conditions, item))
        .collect()
}

/// Classify a single menu item against a condition profile.
pub fn classify_item(conditions: &[HealthCondition], item: &MenuItem) -> ClassifiedMenuItem {
    let mut verdict = item.base_verdict;
    let mut reasons = item.base_reasons.clone();

    for condition in conditions {
        for code in &condition.codes {
            if let Some(hit) = rules::evaluate_code(*code, &condition.name, &item.nutrients, verdict)
            {
                verdict = verdict.max(hit.verdict);
                reasons.push(hit.reason);
            }
        }
        for restriction in &condition.dietary_restrictions {
            if let Some(hit) = rules::evaluate_restriction(restriction, &item.nutrients, verdict) {
                verdict = verdict.max(hit.verdict);
                reasons.push(hit.reason);
            }
        }
    }

    debug_assert!(verdict >= item.base_verdict);
    ClassifiedMenuItem {
        item: item.clone(),
        verdict,
        verdict_reasons: reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealCategory, Nutrients, Severity, Verdict};

    fn item(name: &str, carbs: u32, sodium: u32, base: Verdict) -> MenuItem {
        MenuItem {
            id: "1".into(),
            name: name.into(),
            category: MealCategory::Lunch,
            calories: 400,
            nutrients: Nutrients {
                protein: 12,
                carbs,
                fat: 14,
                fiber: 3,
                sodium,
            },
            base_verdict: base,
            base_reasons: vec!["Base reason".into()],
            alternatives: vec![],
        }
    }

    fn condition(name: &str, restrictions: Vec<&str>) -> HealthCondition {
        HealthCondition::new(
            name,
            Severity::High,
            vec![],
            restrictions.into_iter().map(String::from).collect(),
        )
    }

    #[test]
    fn test_no_matching_condition_keeps_base() {
        let conditions = vec![condition("Seasonal Allergies", vec![])];
        let classified = classify_item(&conditions, &item("Soup", 70, 1200, Verdict::Recommended));
        assert_eq!(classified.verdict, Verdict::Recommended);
        assert_eq!(classified.verdict_reasons, vec!["Base reason"]);
    }

    #[test]
    fn test_empty_profile_keeps_base() {
        let classified = classify_item(&[], &item("Pancakes", 68, 680, Verdict::Avoid));
        assert_eq!(classified.verdict, Verdict::Avoid);
    }

    #[test]
    fn test_base_reasons_come_first() {
        let conditions = vec![condition("Hypertension", vec![])];
        let classified = classify_item(&conditions, &item("Soup", 20, 900, Verdict::Recommended));
        assert_eq!(classified.verdict, Verdict::Caution);
        assert_eq!(
            classified.verdict_reasons,
            vec![
                "Base reason".to_string(),
                "Hypertension: High sodium content may affect blood pressure".to_string(),
            ]
        );
    }

    #[test]
    fn test_duplicate_reasons_are_kept() {
        // Two hypertension-coded conditions each fire on the same item.
        let conditions = vec![
            condition("Hypertension", vec![]),
            condition("Hypertension Stage 2", vec![]),
        ];
        let classified = classify_item(&conditions, &item("Soup", 20, 900, Verdict::Recommended));
        assert_eq!(classified.verdict_reasons.len(), 3);
        assert_eq!(classified.verdict, Verdict::Avoid); // escalated twice
    }

    #[test]
    fn test_condition_order_drives_reason_order() {
        let conditions = vec![
            condition("Diabetes", vec![]),
            condition("Hypertension", vec![]),
        ];
        let classified = classify_item(&conditions, &item("Soup", 55, 700, Verdict::Recommended));
        assert!(classified.verdict_reasons[1].starts_with("Diabetes:"));
        assert!(classified.verdict_reasons[2].starts_with("Hypertension:"));
    }

    #[test]
    fn test_restrictions_evaluated_after_codes() {
        let conditions = vec![condition("Diabetes", vec!["Low sodium"])];
        let classified = classify_item(&conditions, &item("Soup", 55, 500, Verdict::Recommended));
        assert!(classified.verdict_reasons[1].starts_with("Diabetes:"));
        assert!(classified.verdict_reasons[2].starts_with("Dietary restriction:"));
    }

    #[test]
    fn test_classify_menu_preserves_item_order() {
        let menu = vec![
            item("A", 10, 100, Verdict::Recommended),
            item("B", 70, 100, Verdict::Recommended),
        ];
        let classified = classify_menu(&[condition("Diabetes", vec![])], &menu);
        assert_eq!(classified[0].item.name, "A");
        assert_eq!(classified[0].verdict, Verdict::Recommended);
        assert_eq!(classified[1].item.name, "B");
        assert_eq!(classified[1].verdict, Verdict::Avoid);
    }
}
