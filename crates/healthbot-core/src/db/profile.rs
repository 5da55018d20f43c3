//! Condition profile persistence.
//!
//! The profile is the sole durable input of the engine: a JSON array of
//! conditions stored whole under a fixed key, exactly as the browser
//! key-value store it replaces. Every write replaces the full array.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::HealthCondition;

/// Fixed storage key for the condition profile.
pub const PROFILE_KEY: &str = "healthProfile";

impl Database {
    /// Replace the stored profile with the given condition list.
    pub fn save_profile(&self, conditions: &[HealthCondition]) -> DbResult<()> {
        let json = serde_json::to_string(conditions)?;
        self.conn.execute(
            r#"
            INSERT INTO profile_store (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            params![PROFILE_KEY, json],
        )?;
        Ok(())
    }

    /// Load the stored profile. A missing document is an empty profile; a
    /// document that fails to decode is [`DbError::ProfileDecode`].
    pub fn load_profile(&self) -> DbResult<Vec<HealthCondition>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM profile_store WHERE key = ?1",
                params![PROFILE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(json) = stored else {
            return Ok(Vec::new());
        };

        let mut conditions: Vec<HealthCondition> =
            serde_json::from_str(&json).map_err(|e| DbError::ProfileDecode(e.to_string()))?;
        for condition in &mut conditions {
            condition.ensure_codes();
        }
        Ok(conditions)
    }

    /// Load the profile, substituting an empty list when the stored document
    /// is unreadable. Other errors still propagate.
    pub fn load_profile_or_empty(&self) -> DbResult<Vec<HealthCondition>> {
        match self.load_profile() {
            Err(DbError::ProfileDecode(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Append a condition and persist, returning the updated profile.
    pub fn add_condition(&self, condition: HealthCondition) -> DbResult<Vec<HealthCondition>> {
        let mut conditions = self.load_profile_or_empty()?;
        conditions.push(condition);
        self.save_profile(&conditions)?;
        Ok(conditions)
    }

    /// Remove a condition by id and persist, returning the updated profile.
    pub fn remove_condition(&self, id: &str) -> DbResult<Vec<HealthCondition>> {
        let mut conditions = self.load_profile_or_empty()?;
        let before = conditions.len();
        conditions.retain(|condition| condition.id != id);
        if conditions.len() == before {
            return Err(DbError::NotFound(format!("condition {id}")));
        }
        self.save_profile(&conditions)?;
        Ok(conditions)
    }
}
