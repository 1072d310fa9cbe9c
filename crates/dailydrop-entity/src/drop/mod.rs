//! Drop domain entities.

pub mod model;
pub mod store;

pub use model::{CreateDrop, DropEvent};
pub use store::DropStore;
