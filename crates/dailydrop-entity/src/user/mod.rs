//! User profile domain entities.

pub mod grant;
pub mod model;
pub mod store;

pub use grant::{CreateRewardGrant, GRANT_VALIDITY_DAYS, RewardGrant};
pub use model::{CreateUser, User};
pub use store::UserStore;
