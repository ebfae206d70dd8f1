//! Shared primitive aliases used across all three crates.

/// Primary key type for every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Timestamps are always UTC; offsets never enter the system.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
