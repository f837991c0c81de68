//! Domain entities.

pub mod session;

pub use session::Session;
