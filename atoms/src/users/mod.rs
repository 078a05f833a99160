pub mod model;
pub mod service;

pub use model::{Role, User};
pub use service::*;
