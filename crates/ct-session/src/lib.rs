//! ct-session library
//!
//! Durable session persistence plus the in-memory session manager.

pub(crate) mod error;
pub(crate) mod manager;
pub(crate) mod store;


pub use error::{SessionError, SessionErrorResult};
pub use manager::SessionManager;
pub use store::SessionStore;
