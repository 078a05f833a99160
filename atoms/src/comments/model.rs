use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taskboard_client::Error;

use crate::users::model::User;

/// Comment domain model - append-only notes on a task. Deletion is the only
/// mutation, restricted to the author or an admin.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub id: i64,
    pub task_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,

    /// Author joined in by the server on reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Serialize, Clone)]
pub struct CreateCommentPayload {
    pub content: String,
}

impl CreateCommentPayload {
    pub fn validate(&self) -> Result<(), Error> {
        if self.content.trim().is_empty() {
            return Err(Error::Validation("comment content is required".to_string()));
        }
        Ok(())
    }
}
