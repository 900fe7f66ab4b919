//! Write operations for the family graph.
//!
//! Writes use plain CREATE, not MERGE: people are not deduplicated by name
//! and repeated relationship calls create repeated edges.

use neo4rs::query;

use kinship_core::Person;

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Insert a new Person node.
    pub async fn create_person(&self, person: &Person) -> Result<(), GraphError> {
        let q = query("CREATE (p:Person {name: $name, gender: $gender, desc: $desc})")
            .param("name", person.name.clone())
            .param("gender", person.gender.clone())
            .param("desc", person.desc.clone());

        self.run(q).await?;
        tracing::debug!(name = %person.name, "Created person");
        Ok(())
    }

    /// Link `parent` to `child`.
    ///
    /// When either name matches nothing the MATCH yields no rows and no edge
    /// is created; this is not reported as an error.
    pub async fn create_relationship(&self, parent: &str, child: &str) -> Result<(), GraphError> {
        let q = query(
            "MATCH (p:Person {name: $parent}), (c:Person {name: $child})
             CREATE (p)-[:PARENT_OF]->(c)",
        )
        .param("parent", parent.to_string())
        .param("child", child.to_string());

        self.run(q).await?;
        tracing::debug!(%parent, %child, "Linked parent to child");
        Ok(())
    }

    /// Delete every person with this name along with their edges.
    pub async fn delete_person(&self, name: &str) -> Result<(), GraphError> {
        let q = query(
            "MATCH (p:Person {name: $name})
             DETACH DELETE p",
        )
        .param("name", name.to_string());

        self.run(q).await?;
        tracing::debug!(%name, "Deleted person");
        Ok(())
    }
}
