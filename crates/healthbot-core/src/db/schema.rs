//! SQLite schema.

/// Full schema, applied idempotently on open.
///
/// The profile store mirrors the browser key-value store it replaces: each
/// row is one storage key holding a JSON document.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS profile_store (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
