//! Repository implementations of the entity store contracts.

pub mod drop;
pub mod reward;
pub mod submission;
pub mod user;
