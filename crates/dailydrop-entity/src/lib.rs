//! # dailydrop-entity
//!
//! Domain entity models for Daily Drop. Every struct in this crate
//! represents a database table row or a domain value object; database
//! entities derive `sqlx::FromRow`. Each entity module also defines the
//! store contract (trait) its repository implements, so that services can
//! be exercised against in-memory stand-ins in tests.

pub mod drop;
pub mod reward;
pub mod submission;
pub mod user;
