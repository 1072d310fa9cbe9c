//! HTTP handlers grouped by domain.

pub mod capture;
pub mod drops;
pub mod health;
pub mod leaderboard;
pub mod media;
pub mod review;
pub mod rewards;
pub mod users;
