//! Collaborator contracts implemented outside the core crate.

pub mod blob;
