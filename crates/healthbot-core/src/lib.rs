//! HealthBot Core Library
//!
//! Deterministic recommendation engine behind a wellness dashboard: it turns
//! a user's health condition profile into a suitability-classified cafeteria
//! menu and a personalized schedule of health reminders.
//!
//! # Architecture
//!
//! ```text
//! Condition Profile ──► Code Detection (once, at entry)
//!        │
//!        ├──► Threshold Rules ──► Suitability Aggregation ──► Classified Menu
//!        │         (classifier)        monotonic max,           (for the UI)
//!        │                             ordered reasons
//!        │
//!        └──► Template Expansion ──► Id + Attribution ──► Active Window Filter
//!                  (notify)                                 |now - t| <= 1h
//! ```
//!
//! # Core Principle
//!
//! **Everything is recomputed from scratch on every profile change.** Both
//! pipelines are pure functions of `(profile, catalog)`; there is no
//! incremental update and no cross-run memory. Concurrent refreshes are
//! serialized by ticket ([`refresh::RefreshGuard`]), so a stale run can
//! never overwrite a newer result.
//!
//! # Modules
//!
//! - [`db`]: SQLite-backed profile store (the one durable input)
//! - [`models`]: Domain types (HealthCondition, MenuItem, Verdict, etc.)
//! - [`classifier`]: Nutrient threshold rules + suitability aggregation
//! - [`notify`]: Notification synthesis + active window filter
//! - [`registry`]: Static template registry and built-in menu
//! - [`refresh`]: Latest-wins refresh coordination

pub mod classifier;
pub mod db;
pub mod models;
pub mod notify;
pub mod refresh;
pub mod registry;

// Re-export commonly used types
pub use classifier::{classify_item, classify_menu};
pub use db::Database;
pub use models::{
    ClassifiedMenuItem, ConditionCode, Frequency, GeneratedNotification, HealthCondition,
    MealCategory, MenuItem, NotificationCategory, NotificationTemplate, Nutrients, Priority,
    ScheduleTime, Severity, Verdict,
};
pub use notify::{
    current_hour_local, select_active, select_active_wrapping, synthesize_notifications,
    synthesize_notifications_unique_wellness, GENERAL_WELLNESS,
};
pub use refresh::{RefreshGuard, RefreshTicket};
pub use registry::default_menu;

use std::path::Path;
use std::sync::{Arc, Mutex};

/// Top-level errors surfaced by [`HealthBotCore`].
#[derive(Debug, thiserror::Error)]
pub enum HealthBotError {
    #[error("storage error: {0}")]
    Storage(#[from] db::DbError),

    #[error("catalog error: {0}")]
    Catalog(#[from] registry::CatalogError),

    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for HealthBotError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        HealthBotError::LockPoisoned(e.to_string())
    }
}

/// Thread-safe engine facade consumed by the presentation layer.
///
/// Holds the profile store, the active menu catalog, and the latest
/// classification/notification results. Every profile mutation recomputes
/// both result sets whole; readers only ever observe a complete pass.
pub struct HealthBotCore {
    db: Arc<Mutex<Database>>,
    menu: Vec<MenuItem>,
    classified: RefreshGuard<Vec<ClassifiedMenuItem>>,
    notifications: RefreshGuard<Vec<GeneratedNotification>>,
}

impl HealthBotCore {
    /// Open or create the profile store at the given path, with the
    /// built-in menu catalog.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HealthBotError> {
        Ok(Self::with_db(Database::open(path)?))
    }

    /// In-memory engine (for testing).
    pub fn open_in_memory() -> Result<Self, HealthBotError> {
        Ok(Self::with_db(Database::open_in_memory()?))
    }

    fn with_db(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            menu: registry::default_menu(),
            classified: RefreshGuard::new(),
            notifications: RefreshGuard::new(),
        }
    }

    /// Replace the menu catalog from JSON, validating at load time, and
    /// reclassify against the stored profile.
    pub fn replace_menu_from_json(&mut self, json: &str) -> Result<(), HealthBotError> {
        self.menu = registry::load_menu_from_json(json)?;
        self.refresh_menu()?;
        Ok(())
    }

    /// The menu catalog currently in use.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// The stored condition profile, empty when unreadable.
    pub fn conditions(&self) -> Result<Vec<HealthCondition>, HealthBotError> {
        Ok(self.db.lock()?.load_profile_or_empty()?)
    }

    /// Add a condition and recompute both result sets.
    pub fn add_condition(
        &self,
        condition: HealthCondition,
    ) -> Result<Vec<HealthCondition>, HealthBotError> {
        let updated = self.db.lock()?.add_condition(condition)?;
        self.recompute(&updated);
        Ok(updated)
    }

    /// Remove a condition by id and recompute both result sets.
    pub fn remove_condition(&self, id: &str) -> Result<Vec<HealthCondition>, HealthBotError> {
        let updated = self.db.lock()?.remove_condition(id)?;
        self.recompute(&updated);
        Ok(updated)
    }

    // =========================================================================
    // Recommendation Operations
    // =========================================================================

    /// Reclassify the menu against the stored profile.
    pub fn refresh_menu(&self) -> Result<Vec<ClassifiedMenuItem>, HealthBotError> {
        let ticket = self.classified.begin();
        let conditions = self.conditions()?;
        let classified = classifier::classify_menu(&conditions, &self.menu);
        self.classified.commit(ticket, classified.clone());
        Ok(classified)
    }

    /// Regenerate the notification catalog from the stored profile.
    pub fn refresh_notifications(&self) -> Result<Vec<GeneratedNotification>, HealthBotError> {
        let ticket = self.notifications.begin();
        let conditions = self.conditions()?;
        let generated = notify::synthesize_notifications(&conditions);
        self.notifications.commit(ticket, generated.clone());
        Ok(generated)
    }

    /// The classified menu from the most recent pass, if any.
    pub fn current_menu(&self) -> Option<Vec<ClassifiedMenuItem>> {
        self.classified.current()
    }

    /// The notification catalog from the most recent pass, if any.
    pub fn current_notifications(&self) -> Option<Vec<GeneratedNotification>> {
        self.notifications.current()
    }

    /// Notifications due at `current_hour`, generating a catalog first when
    /// no pass has run yet.
    pub fn active_notifications(
        &self,
        current_hour: u8,
    ) -> Result<Vec<GeneratedNotification>, HealthBotError> {
        let notifications = match self.notifications.current() {
            Some(notifications) => notifications,
            None => self.refresh_notifications()?,
        };
        Ok(notify::select_active(&notifications, current_hour))
    }

    fn recompute(&self, conditions: &[HealthCondition]) {
        let menu_ticket = self.classified.begin();
        self.classified
            .commit(menu_ticket, classifier::classify_menu(conditions, &self.menu));

        let notification_ticket = self.notifications.begin();
        self.notifications.commit(
            notification_ticket,
            notify::synthesize_notifications(conditions),
        );
    }
}
