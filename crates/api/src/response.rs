use serde::Serialize;

/// Plain confirmation body for deletes and other actions whose result is
/// just "it happened", e.g. `{"message": "Team member deleted"}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
