//! Kinship Graph: storage for the family tree.
//!
//! All reads and writes of people and `PARENT_OF` edges go through the
//! [`FamilyStore`] trait. [`GraphClient`] backs it with Neo4j; [`MemoryStore`]
//! keeps everything in process for tests and local development.

pub mod client;
pub mod memory;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use memory::MemoryStore;
pub use store::FamilyStore;
