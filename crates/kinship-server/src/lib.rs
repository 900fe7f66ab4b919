//! kinship-server: HTTP API over the family graph.
//!
//! Handlers receive the store through [`AppState`]; the binary decides
//! whether that store is Neo4j or in-memory.

pub mod error;
pub mod extract;
pub mod page;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{router, AppState};
