//! Reward catalog domain entities.

pub mod kind;
pub mod model;
pub mod store;

pub use kind::RewardKind;
pub use model::{CreateReward, Reward};
pub use store::RewardStore;
