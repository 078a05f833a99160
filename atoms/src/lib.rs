//! Resource services for the taskboard dashboard.
//!
//! One module per resource kind, each split into `model.rs` (wire types and
//! payloads) and `service.rs` (cached reads and invalidating writes over the
//! shared API client). Services take the client and cache as arguments so
//! callers own a single pair for the whole app.

pub mod comments;
pub mod projects;
pub mod tasks;
pub mod users;
