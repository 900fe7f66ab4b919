//! Read operations against the family graph.

use neo4rs::query;

use kinship_core::{ParentOf, Person};

use crate::client::{GraphClient, GraphError};

/// Projection shared by every person-returning query. Missing optional
/// properties come back as empty strings.
const PERSON_COLUMNS: &str =
    "p.name AS name, coalesce(p.gender, '') AS gender, coalesce(p.desc, '') AS desc";

impl GraphClient {
    // ── Lookups ──────────────────────────────────────────────────

    /// Whether at least one person carries exactly this name.
    pub async fn person_exists(&self, name: &str) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (p:Person {name: $name})
             RETURN count(p) AS cnt",
        )
        .param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0) > 0),
            None => Ok(false),
        }
    }

    // ── List Queries ─────────────────────────────────────────────

    /// List every person.
    pub async fn all_people(&self) -> Result<Vec<Person>, GraphError> {
        let q = query(&format!("MATCH (p:Person) RETURN {PERSON_COLUMNS}"));
        self.people_from(q).await
    }

    /// List people with no incoming or outgoing `PARENT_OF` edge.
    pub async fn isolated_people(&self) -> Result<Vec<Person>, GraphError> {
        let q = query(&format!(
            "MATCH (p:Person)
             WHERE NOT EXISTS {{ (p)-[:PARENT_OF]-() }}
             RETURN {PERSON_COLUMNS}"
        ));
        self.people_from(q).await
    }

    /// List every `PARENT_OF` edge by endpoint names.
    pub async fn family_tree(&self) -> Result<Vec<ParentOf>, GraphError> {
        let q = query(
            "MATCH (p:Person)-[:PARENT_OF]->(c:Person)
             RETURN p.name AS parent, c.name AS child",
        );

        let rows = self.query_rows(q).await?;
        let mut edges = Vec::with_capacity(rows.len());
        for row in rows {
            let parent: String = row.get("parent").map_err(|e| {
                GraphError::Serialization(format!("Failed to read edge parent: {e}"))
            })?;
            let child: String = row.get("child").map_err(|e| {
                GraphError::Serialization(format!("Failed to read edge child: {e}"))
            })?;
            edges.push(ParentOf { parent, child });
        }
        Ok(edges)
    }

    // ── Search ───────────────────────────────────────────────────

    /// Case-insensitive substring search on person names.
    pub async fn search_people(&self, term: &str) -> Result<Vec<Person>, GraphError> {
        let q = query(&format!(
            "MATCH (p:Person)
             WHERE toLower(p.name) CONTAINS toLower($term)
             RETURN {PERSON_COLUMNS}"
        ))
        .param("term", term.to_string());
        self.people_from(q).await
    }

    async fn people_from(&self, q: neo4rs::Query) -> Result<Vec<Person>, GraphError> {
        let rows = self.query_rows(q).await?;
        rows.iter().map(row_to_person).collect()
    }
}

/// Convert a row projected with `PERSON_COLUMNS` into a `Person`.
fn row_to_person(row: &neo4rs::Row) -> Result<Person, GraphError> {
    let name: String = row
        .get("name")
        .map_err(|e| GraphError::Serialization(format!("Failed to read person name: {e}")))?;

    Ok(Person {
        name,
        gender: row.get("gender").unwrap_or_default(),
        desc: row.get("desc").unwrap_or_default(),
    })
}
