use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single user-activity event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityEvent {
    /// Identifier of the user who performed the action
    pub user_id: String,
    /// Human-readable description of the action
    pub action: String,
    /// When the action happened
    pub timestamp: DateTime<Utc>,
}

impl ActivityEvent {
    pub fn new(user_id: &str, action: &str, timestamp: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            action: action.to_string(),
            timestamp: timestamp
                .parse()
                .unwrap_or_else(|_| DateTime::<Utc>::MIN_UTC),
        }
    }
}
