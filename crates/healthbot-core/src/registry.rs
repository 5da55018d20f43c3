//! Static catalogs: notification template registry and the built-in
//! cafeteria menu.
//!
//! Templates are authored here with typed times and categories, so a
//! malformed registry cannot be represented at runtime. External catalogs
//! loaded from JSON are validated once at load time; classification itself
//! never validates.

use thiserror::Error;

use crate::models::{
    ConditionCode, Frequency, MealCategory, MenuItem, NotificationCategory, NotificationTemplate,
    Nutrients, Priority, ScheduleTime, Verdict,
};

/// Catalog/registry load errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Menu data that does not decode or fails the structural checks
    #[error("catalog validation failed: {0}")]
    Validation(String),

    /// Registry data with unknown categories, frequencies, or times
    #[error("registry configuration error: {0}")]
    Configuration(String),
}

/// Fixed notification templates for a condition code.
///
/// Times, frequencies, and priorities are as authored; they are not derived
/// from the condition's own severity.
pub fn templates_for_code(code: ConditionCode) -> Vec<NotificationTemplate> {
    match code {
        ConditionCode::Diabetes => vec![
            NotificationTemplate {
                category: NotificationCategory::Monitoring,
                title: "Blood Sugar Check".into(),
                message: "Time to check your blood glucose levels".into(),
                frequency: Frequency::Daily,
                time: ScheduleTime::new(8, 0),
                priority: Priority::High,
            },
            NotificationTemplate {
                category: NotificationCategory::Diet,
                title: "Meal Planning Reminder".into(),
                message: "Review today's cafeteria menu for diabetic-friendly options".into(),
                frequency: Frequency::Daily,
                time: ScheduleTime::new(7, 30),
                priority: Priority::Medium,
            },
            NotificationTemplate {
                category: NotificationCategory::Activity,
                title: "Post-Meal Walk".into(),
                message: "Take a 10-minute walk to help manage blood sugar".into(),
                frequency: Frequency::Daily,
                time: ScheduleTime::new(13, 30),
                priority: Priority::Medium,
            },
        ],
        ConditionCode::Hypertension => vec![
            NotificationTemplate {
                category: NotificationCategory::Monitoring,
                title: "Blood Pressure Check".into(),
                message: "Remember to check your blood pressure".into(),
                frequency: Frequency::Weekly,
                time: ScheduleTime::new(9, 0),
                priority: Priority::High,
            },
            NotificationTemplate {
                category: NotificationCategory::Diet,
                title: "Low Sodium Reminder".into(),
                message: "Choose low-sodium options from today's menu".into(),
                frequency: Frequency::Daily,
                time: ScheduleTime::new(11, 30),
                priority: Priority::Medium,
            },
        ],
        ConditionCode::Other => Vec::new(),
    }
}

/// One medication reminder: fixed daily schedule, high priority.
pub fn medication_reminder(medication: &str) -> NotificationTemplate {
    NotificationTemplate {
        category: NotificationCategory::Medication,
        title: format!("{medication} Reminder"),
        message: format!("Time to take your {medication}"),
        frequency: Frequency::Daily,
        time: ScheduleTime::new(9, 0),
        priority: Priority::High,
    }
}

/// The generic wellness set appended for every condition.
pub fn generic_wellness_templates() -> Vec<NotificationTemplate> {
    vec![
        NotificationTemplate {
            category: NotificationCategory::Activity,
            title: "Eye Rest Break".into(),
            message: "Take a break and rest your eyes for 2 minutes".into(),
            frequency: Frequency::Daily,
            time: ScheduleTime::new(15, 0),
            priority: Priority::Low,
        },
        NotificationTemplate {
            category: NotificationCategory::Activity,
            title: "Stress Check".into(),
            message: "How are you feeling? Take a moment for mindfulness".into(),
            frequency: Frequency::Daily,
            time: ScheduleTime::new(16, 0),
            priority: Priority::Medium,
        },
    ]
}

/// The built-in sample cafeteria menu.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "1".into(),
            name: "Oatmeal with Fresh Berries".into(),
            category: MealCategory::Breakfast,
            calories: 250,
            nutrients: Nutrients {
                protein: 8,
                carbs: 45,
                fat: 3,
                fiber: 6,
                sodium: 150,
            },
            base_verdict: Verdict::Recommended,
            base_reasons: vec!["High fiber, low sugar - great for diabetes management".into()],
            alternatives: vec!["Steel-cut oats with cinnamon".into()],
        },
        MenuItem {
            id: "2".into(),
            name: "Pancakes with Syrup".into(),
            category: MealCategory::Breakfast,
            calories: 420,
            nutrients: Nutrients {
                protein: 8,
                carbs: 68,
                fat: 12,
                fiber: 2,
                sodium: 680,
            },
            base_verdict: Verdict::Avoid,
            base_reasons: vec!["High sugar and refined carbs - can spike blood glucose".into()],
            alternatives: vec![
                "Whole wheat pancakes with sugar-free syrup".into(),
                "Greek yogurt with berries".into(),
            ],
        },
        MenuItem {
            id: "3".into(),
            name: "Grilled Chicken Salad".into(),
            category: MealCategory::Lunch,
            calories: 320,
            nutrients: Nutrients {
                protein: 35,
                carbs: 15,
                fat: 12,
                fiber: 8,
                sodium: 450,
            },
            base_verdict: Verdict::Recommended,
            base_reasons: vec!["High protein, low carbs, good for blood sugar control".into()],
            alternatives: vec!["Salmon salad".into(), "Turkey and avocado wrap".into()],
        },
        MenuItem {
            id: "4".into(),
            name: "Fried Rice with Vegetables".into(),
            category: MealCategory::Lunch,
            calories: 380,
            nutrients: Nutrients {
                protein: 12,
                carbs: 58,
                fat: 14,
                fiber: 3,
                sodium: 950,
            },
            base_verdict: Verdict::Caution,
            base_reasons: vec!["High sodium and refined carbs - limit portion size".into()],
            alternatives: vec![
                "Brown rice with steamed vegetables".into(),
                "Quinoa bowl".into(),
            ],
        },
        MenuItem {
            id: "5".into(),
            name: "Mixed Nuts (1 oz)".into(),
            category: MealCategory::Snack,
            calories: 170,
            nutrients: Nutrients {
                protein: 6,
                carbs: 6,
                fat: 15,
                fiber: 3,
                sodium: 90,
            },
            base_verdict: Verdict::Recommended,
            base_reasons: vec!["Healthy fats and protein - helps stabilize blood sugar".into()],
            alternatives: vec!["Apple with almond butter".into(), "Greek yogurt".into()],
        },
    ]
}

/// Load a menu catalog from JSON, failing at load time rather than per
/// classification call.
pub fn load_menu_from_json(json: &str) -> Result<Vec<MenuItem>, CatalogError> {
    let items: Vec<MenuItem> =
        serde_json::from_str(json).map_err(|e| CatalogError::Validation(e.to_string()))?;
    for item in &items {
        validate_menu_item(item)?;
    }
    Ok(items)
}

/// Load a custom notification template registry from JSON. Unknown category,
/// frequency, or priority values and malformed times are configuration
/// errors, never silently ignored.
pub fn load_templates_from_json(json: &str) -> Result<Vec<NotificationTemplate>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Configuration(e.to_string()))
}

fn validate_menu_item(item: &MenuItem) -> Result<(), CatalogError> {
    if item.id.trim().is_empty() {
        return Err(CatalogError::Validation("menu item with empty id".into()));
    }
    if item.name.trim().is_empty() {
        return Err(CatalogError::Validation(format!(
            "menu item {} has an empty name",
            item.id
        )));
    }
    Ok(())
}
