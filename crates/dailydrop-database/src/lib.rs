//! PostgreSQL persistence for Daily Drop.
//!
//! Connection pooling, migrations, and the sqlx-backed implementations of
//! the store contracts defined in `dailydrop-entity`.

pub mod connection;
pub mod migration;
pub mod repositories;
