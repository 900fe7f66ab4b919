//! In-process `FamilyStore` for tests and `--in-memory` development runs.
//!
//! Mirrors the Neo4j store's semantics: every created person is a distinct
//! node even when names repeat, relationship creation links every matching
//! parent node to every matching child node, and deletion detaches.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use kinship_core::{ParentOf, Person};

use crate::client::GraphError;
use crate::store::FamilyStore;

type NodeKey = u64;

#[derive(Default)]
struct Inner {
    next_key: NodeKey,
    people: Vec<(NodeKey, Person)>,
    edges: Vec<(NodeKey, NodeKey)>,
}

impl Inner {
    fn keys_named(&self, name: &str) -> Vec<NodeKey> {
        self.people
            .iter()
            .filter(|(_, p)| p.name == name)
            .map(|(k, _)| *k)
            .collect()
    }

    fn name_of(&self, key: NodeKey) -> Option<&str> {
        self.people
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| p.name.as_str())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FamilyStore for MemoryStore {
    async fn create_person(&self, person: &Person) -> Result<(), GraphError> {
        let mut inner = self.inner.write().await;
        let key = inner.next_key;
        inner.next_key += 1;
        inner.people.push((key, person.clone()));
        Ok(())
    }

    async fn create_relationship(&self, parent: &str, child: &str) -> Result<(), GraphError> {
        let mut inner = self.inner.write().await;
        let parents = inner.keys_named(parent);
        let children = inner.keys_named(child);
        for p in &parents {
            for c in &children {
                inner.edges.push((*p, *c));
            }
        }
        Ok(())
    }

    async fn person_exists(&self, name: &str) -> Result<bool, GraphError> {
        let inner = self.inner.read().await;
        Ok(inner.people.iter().any(|(_, p)| p.name == name))
    }

    async fn all_people(&self) -> Result<Vec<Person>, GraphError> {
        let inner = self.inner.read().await;
        Ok(inner.people.iter().map(|(_, p)| p.clone()).collect())
    }

    async fn isolated_people(&self) -> Result<Vec<Person>, GraphError> {
        let inner = self.inner.read().await;
        let linked: HashSet<NodeKey> = inner.edges.iter().flat_map(|&(p, c)| [p, c]).collect();
        Ok(inner
            .people
            .iter()
            .filter(|(k, _)| !linked.contains(k))
            .map(|(_, p)| p.clone())
            .collect())
    }

    async fn family_tree(&self) -> Result<Vec<ParentOf>, GraphError> {
        let inner = self.inner.read().await;
        let mut edges = Vec::with_capacity(inner.edges.len());
        for &(p, c) in &inner.edges {
            match (inner.name_of(p), inner.name_of(c)) {
                (Some(parent), Some(child)) => edges.push(ParentOf::new(parent, child)),
                _ => {
                    return Err(GraphError::Serialization(format!(
                        "Edge {p} -> {c} references a missing node"
                    )))
                }
            }
        }
        Ok(edges)
    }

    async fn delete_person(&self, name: &str) -> Result<(), GraphError> {
        let mut inner = self.inner.write().await;
        let doomed: HashSet<NodeKey> = inner.keys_named(name).into_iter().collect();
        inner.people.retain(|(k, _)| !doomed.contains(k));
        inner
            .edges
            .retain(|(p, c)| !doomed.contains(p) && !doomed.contains(c));
        Ok(())
    }

    async fn search_people(&self, term: &str) -> Result<Vec<Person>, GraphError> {
        let needle = term.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner
            .people
            .iter()
            .filter(|(_, p)| p.name.to_lowercase().contains(&needle))
            .map(|(_, p)| p.clone())
            .collect())
    }
}
