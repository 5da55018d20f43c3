//! Notification synthesizer.
//!
//! Builds the full notification catalog for a condition profile. The catalog
//! is regenerated from scratch on every profile change; ids are positions in
//! the generated sequence and carry no identity across regenerations.

use crate::models::{GeneratedNotification, HealthCondition, NotificationTemplate};
use crate::registry;

/// Attribution fallback when no condition's name appears in a notification.
pub const GENERAL_WELLNESS: &str = "General Wellness";

/// Whether the generic wellness set repeats per condition or appears once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WellnessExpansion {
    /// Source behavior: N conditions yield N copies of each generic template.
    PerCondition,
    /// Corrected behavior: one copy for any non-empty profile.
    OncePerProfile,
}

/// Synthesize the notification catalog for a profile.
///
/// Per condition, in profile order: matched-code templates, then one
/// medication reminder per medication, then the generic wellness set. The
/// generic set repeats once per condition; see
/// [`synthesize_notifications_unique_wellness`] for the deduplicated
/// variant. An empty profile yields an empty catalog.
pub fn synthesize_notifications(conditions: &[HealthCondition]) -> Vec<GeneratedNotification> {
    synthesize(conditions, WellnessExpansion::PerCondition)
}

/// Variant of [`synthesize_notifications`] that appends the generic wellness
/// set once per non-empty profile instead of once per condition.
pub fn synthesize_notifications_unique_wellness(
    conditions: &[HealthCondition],
) -> Vec<GeneratedNotification> {
    synthesize(conditions, WellnessExpansion::OncePerProfile)
}

fn synthesize(
    conditions: &[HealthCondition],
    wellness: WellnessExpansion,
) -> Vec<GeneratedNotification> {
    let mut templates: Vec<NotificationTemplate> = Vec::new();

    for condition in conditions {
        for code in &condition.codes {
            templates.extend(registry::templates_for_code(*code));
        }
        for medication in &condition.medications {
            templates.push(registry::medication_reminder(medication));
        }
        if wellness == WellnessExpansion::PerCondition {
            templates.extend(registry::generic_wellness_templates());
        }
    }
    if wellness == WellnessExpansion::OncePerProfile && !conditions.is_empty() {
        templates.extend(registry::generic_wellness_templates());
    }

    templates
        .into_iter()
        .enumerate()
        .map(|(index, template)| {
            let condition = attribute(&template, conditions);
            GeneratedNotification {
                id: index.to_string(),
                category: template.category,
                title: template.title,
                message: template.message,
                frequency: template.frequency,
                time: template.time,
                priority: template.priority,
                enabled: true,
                condition,
            }
        })
        .collect()
}

/// Best-effort attribution: the first condition whose name appears in the
/// title or message. Text containing an unrelated condition's name will
/// mis-attribute; that is accepted, not corrected.
fn attribute(template: &NotificationTemplate, conditions: &[HealthCondition]) -> String {
    let title = template.title.to_lowercase();
    let message = template.message.to_lowercase();
    conditions
        .iter()
        .find(|condition| {
            let name = condition.name.to_lowercase();
            title.contains(&name) || message.contains(&name)
        })
        .map(|condition| condition.name.clone())
        .unwrap_or_else(|| GENERAL_WELLNESS.to_string())
}
