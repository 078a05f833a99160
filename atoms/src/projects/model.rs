use serde::{Deserialize, Serialize};

use crate::users::model::Role;

/// Project domain model. The member list is joined in by the server when a
/// single project is fetched; list responses may omit it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectMember {
    pub id: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

impl ProjectMember {
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("unknown")
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct AddMemberPayload {
    pub user_id: i64,
}
