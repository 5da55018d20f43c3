//! Property tests for the classification and notification pipelines.

use proptest::prelude::*;

use healthbot_core::models::{
    HealthCondition, MealCategory, MenuItem, Nutrients, Severity, Verdict,
};
use healthbot_core::registry::templates_for_code;
use healthbot_core::{classify_menu, select_active, synthesize_notifications};

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
    ]
}

fn condition_strategy() -> impl Strategy<Value = HealthCondition> {
    let names = prop::sample::select(vec![
        "Diabetes Type 2",
        "Gestational diabetes",
        "Hypertension",
        "diabetes with hypertension",
        "Seasonal Allergies",
        "Migraines",
    ]);
    let medications = prop::collection::vec(
        prop::sample::select(vec!["Metformin", "Lisinopril", "Insulin"]),
        0..3,
    );
    let restrictions = prop::collection::vec(
        prop::sample::select(vec!["Low sodium", "No sugar", "Gluten-free"]),
        0..3,
    );
    (names, severity_strategy(), medications, restrictions).prop_map(
        |(name, severity, medications, restrictions)| {
            HealthCondition::new(
                name,
                severity,
                medications.into_iter().map(String::from).collect(),
                restrictions.into_iter().map(String::from).collect(),
            )
        },
    )
}

fn profile_strategy() -> impl Strategy<Value = Vec<HealthCondition>> {
    prop::collection::vec(condition_strategy(), 0..4)
}

fn menu_item_strategy() -> impl Strategy<Value = MenuItem> {
    let verdicts = prop_oneof![
        Just(Verdict::Recommended),
        Just(Verdict::Caution),
        Just(Verdict::Avoid),
    ];
    (0u32..120, 0u32..2000, verdicts, "[a-z]{3,12}").prop_map(|(carbs, sodium, base, name)| {
        MenuItem {
            id: name.clone(),
            name,
            category: MealCategory::Lunch,
            calories: 300,
            nutrients: Nutrients {
                protein: 10,
                carbs,
                fat: 10,
                fiber: 3,
                sodium,
            },
            base_verdict: base,
            base_reasons: vec!["base".into()],
            alternatives: vec![],
        }
    })
}

fn menu_strategy() -> impl Strategy<Value = Vec<MenuItem>> {
    prop::collection::vec(menu_item_strategy(), 0..6)
}

proptest! {
    #[test]
    fn classification_is_deterministic(
        profile in profile_strategy(),
        menu in menu_strategy(),
    ) {
        let first = classify_menu(&profile, &menu);
        let second = classify_menu(&profile, &menu);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn verdicts_never_drop_below_base(
        profile in profile_strategy(),
        menu in menu_strategy(),
    ) {
        for classified in classify_menu(&profile, &menu) {
            prop_assert!(classified.verdict >= classified.item.base_verdict);
        }
    }

    #[test]
    fn adding_a_condition_never_improves_a_verdict(
        profile in profile_strategy(),
        extra in condition_strategy(),
        menu in menu_strategy(),
    ) {
        let before = classify_menu(&profile, &menu);

        let mut extended = profile.clone();
        extended.push(extra);
        let after = classify_menu(&extended, &menu);

        for (b, a) in before.iter().zip(after.iter()) {
            prop_assert!(a.verdict >= b.verdict);
        }
    }

    #[test]
    fn base_reasons_stay_a_prefix(
        profile in profile_strategy(),
        item in menu_item_strategy(),
    ) {
        let classified = classify_menu(&profile, &[item.clone()]).remove(0);
        prop_assert!(classified.verdict_reasons.len() >= item.base_reasons.len());
        prop_assert_eq!(
            &classified.verdict_reasons[..item.base_reasons.len()],
            &item.base_reasons[..]
        );
    }

    #[test]
    fn notification_count_follows_expansion_law(
        profile in profile_strategy(),
    ) {
        let notifications = synthesize_notifications(&profile);
        let expected: usize = profile
            .iter()
            .map(|condition| {
                let from_codes: usize = condition
                    .codes
                    .iter()
                    .map(|code| templates_for_code(*code).len())
                    .sum();
                from_codes + condition.medications.len() + 2
            })
            .sum();
        prop_assert_eq!(notifications.len(), expected);
    }

    #[test]
    fn notification_ids_are_positions(
        profile in profile_strategy(),
    ) {
        for (index, notification) in synthesize_notifications(&profile).iter().enumerate() {
            let expected_id = index.to_string();
            prop_assert_eq!(notification.id.as_str(), expected_id.as_str());
        }
    }

    #[test]
    fn active_selection_is_a_window_subset(
        profile in profile_strategy(),
        hour in 0u8..24,
    ) {
        let notifications = synthesize_notifications(&profile);
        let active = select_active(&notifications, hour);

        prop_assert!(active.len() <= notifications.len());
        for notification in &active {
            prop_assert!(notification.enabled);
            prop_assert!(hour.abs_diff(notification.time.hour) <= 1);
            prop_assert!(notifications.contains(notification));
        }
    }
}
