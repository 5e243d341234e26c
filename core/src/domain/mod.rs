//! Domain layer: entities and their state transitions

pub mod entities;

pub use entities::*;
