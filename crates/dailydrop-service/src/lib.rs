//! # dailydrop-service
//!
//! Business logic service layer for Daily Drop. Each service orchestrates
//! the entity stores and the media store to implement application-level
//! use cases: capture attempts, submission review, drop and reward
//! administration, leaderboard standings, and user profiles.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod capture;
pub mod context;
pub mod drops;
pub mod geo;
pub mod leaderboard;
pub mod profile;
pub mod review;
pub mod rewards;

pub use capture::{CaptureRequest, CaptureService};
pub use context::RequestContext;
pub use drops::{CreateDropParams, DropService};
pub use geo::{ProximityDecision, ProximityEvaluator};
pub use leaderboard::{LeaderboardEntry, LeaderboardService};
pub use profile::{ProfileService, UserProfile};
pub use review::{DropReviewSummary, PendingSubmission, ReviewService};
pub use rewards::{CreateRewardParams, RewardService};
