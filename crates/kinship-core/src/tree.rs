//! Family tree payload consumed by the front-end graph renderer.

use serde::{Deserialize, Serialize};

use crate::types::{ParentOf, Person};

/// A person as a graph node. `id` is the person's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub gender: String,
    pub desc: String,
}

/// A parent → child link between two node ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyTree {
    pub nodes: Vec<TreeNode>,
    pub links: Vec<TreeLink>,
}

impl FamilyTree {
    /// Build the node/link payload from people and edges as returned by the
    /// store. Order is preserved; duplicates and cycles pass through as-is.
    pub fn assemble(people: Vec<Person>, edges: Vec<ParentOf>) -> Self {
        let nodes = people
            .into_iter()
            .map(|p| TreeNode {
                id: p.name,
                gender: p.gender,
                desc: p.desc,
            })
            .collect();

        let links = edges
            .into_iter()
            .map(|e| TreeLink {
                source: e.parent,
                target: e.child,
            })
            .collect();

        Self { nodes, links }
    }
}
