pub mod model;
pub mod policy;
pub mod service;

pub use model::{CreateTaskPayload, Priority, Task, TaskStatus, UpdateTaskPayload};
pub use service::*;
