//! Domain layer: counter rules, entities, and repository traits.

pub mod counter;
pub mod entities;
pub mod repositories;
