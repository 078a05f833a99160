pub mod model;
pub mod service;

pub use model::{AddMemberPayload, Project, ProjectMember};
pub use service::*;
