//! Repository traits implemented by the infrastructure layer.

pub mod session_store;

pub use session_store::SessionStore;

#[cfg(test)]
pub use session_store::MockSessionStore;
