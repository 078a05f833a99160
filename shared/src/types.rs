// ========== USER ==========
pub use taskboard_atoms::users::model::{Role, User};

// ========== TASK ==========
pub use taskboard_atoms::tasks::model::{
    CreateTaskPayload, Priority, Task, TaskStatus, UpdateTaskPayload,
};

// ========== COMMENT ==========
pub use taskboard_atoms::comments::model::{Comment, CreateCommentPayload};

// ========== PROJECT ==========
pub use taskboard_atoms::projects::model::{AddMemberPayload, Project, ProjectMember};

// ========== CLIENT ==========
pub use taskboard_client::{Api, ApiClient, Error, QueryCache, QueryKey};
