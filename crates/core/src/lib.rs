//! Domain types, constants, and pure validation logic for the Beacon CMS
//! backend. No database, HTTP, or filesystem access lives here; the `db`
//! and `api` crates build on these definitions.

pub mod content;
pub mod error;
pub mod events;
pub mod roles;
pub mod settings;
pub mod types;
pub mod uploads;

pub use error::CoreError;
