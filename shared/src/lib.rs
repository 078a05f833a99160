//! Composition crate: one import surface over the data layer, plus the
//! current-user session.

pub mod session;
pub mod types;

pub use session::Session;
