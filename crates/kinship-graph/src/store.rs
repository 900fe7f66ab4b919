//! The storage seam between HTTP handlers and the family graph.

use async_trait::async_trait;

use kinship_core::{ParentOf, Person};

use crate::client::{GraphClient, GraphError};

/// Operations on the family graph.
///
/// Each call is a single independent store operation. Nothing spans calls,
/// so concurrent callers may interleave freely.
#[async_trait]
pub trait FamilyStore: Send + Sync {
    /// Insert a person. No uniqueness check on `name`.
    async fn create_person(&self, person: &Person) -> Result<(), GraphError>;

    /// Create a `PARENT_OF` edge for every (parent, child) node pair matching
    /// the names. Silently creates nothing if either side is missing.
    async fn create_relationship(&self, parent: &str, child: &str) -> Result<(), GraphError>;

    /// Exact-match existence check.
    async fn person_exists(&self, name: &str) -> Result<bool, GraphError>;

    async fn all_people(&self) -> Result<Vec<Person>, GraphError>;

    /// People with no incoming or outgoing `PARENT_OF` edge.
    async fn isolated_people(&self) -> Result<Vec<Person>, GraphError>;

    /// Every edge as (parent name, child name).
    async fn family_tree(&self) -> Result<Vec<ParentOf>, GraphError>;

    /// Detach-delete: removes the person and all incident edges. No-op when
    /// the name is unknown.
    async fn delete_person(&self, name: &str) -> Result<(), GraphError>;

    /// Case-insensitive substring match on name.
    async fn search_people(&self, term: &str) -> Result<Vec<Person>, GraphError>;
}

#[async_trait]
impl FamilyStore for GraphClient {
    async fn create_person(&self, person: &Person) -> Result<(), GraphError> {
        GraphClient::create_person(self, person).await
    }

    async fn create_relationship(&self, parent: &str, child: &str) -> Result<(), GraphError> {
        GraphClient::create_relationship(self, parent, child).await
    }

    async fn person_exists(&self, name: &str) -> Result<bool, GraphError> {
        GraphClient::person_exists(self, name).await
    }

    async fn all_people(&self) -> Result<Vec<Person>, GraphError> {
        GraphClient::all_people(self).await
    }

    async fn isolated_people(&self) -> Result<Vec<Person>, GraphError> {
        GraphClient::isolated_people(self).await
    }

    async fn family_tree(&self) -> Result<Vec<ParentOf>, GraphError> {
        GraphClient::family_tree(self).await
    }

    async fn delete_person(&self, name: &str) -> Result<(), GraphError> {
        GraphClient::delete_person(self, name).await
    }

    async fn search_people(&self, term: &str) -> Result<Vec<Person>, GraphError> {
        GraphClient::search_people(self, term).await
    }
}
