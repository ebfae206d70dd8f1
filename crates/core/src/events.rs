//! Event classification constants.

use crate::error::CoreError;

/// Dated calendar entry shown on the events page.
pub const EVENT_TYPE_EVENT: &str = "event";

/// Undated news post shown in the news feed.
pub const EVENT_TYPE_NEWS: &str = "news";

/// Accepted values for `events.event_type`.
pub const EVENT_TYPES: &[&str] = &[EVENT_TYPE_EVENT, EVENT_TYPE_NEWS];

/// Validate a client-supplied event type.
pub fn validate_event_type(value: &str) -> Result<(), CoreError> {
    if EVENT_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "unknown event type '{value}', expected one of: {}",
            EVENT_TYPES.join(", ")
        )))
    }
}
