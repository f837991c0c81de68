//! Infrastructure layer: concrete store implementations.

pub mod store;
