//! kinship-core: Shared types, configuration, and error handling for Kinship.
//!
//! This crate provides the foundational pieces used by the graph client and
//! the HTTP server:
//! - `Person` and `ParentOf`, the records stored in the family graph
//! - Family tree payload assembly for visualization
//! - Layered configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod tree;
pub mod types;

pub use config::KinshipConfig;
pub use error::KinshipError;
pub use tree::{FamilyTree, TreeLink, TreeNode};
pub use types::{ParentOf, Person};
