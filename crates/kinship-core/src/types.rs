//! Core domain types for the family graph.

use serde::{Deserialize, Serialize};

// ── Person ────────────────────────────────────────────────────────

/// An individual in the family tree.
///
/// `name` acts as the identifier. The store does not enforce uniqueness,
/// so two people with the same name can coexist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub gender: String,
    #[serde(default)]
    pub desc: String,
}

impl Person {
    pub fn new(name: impl Into<String>, gender: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            desc: desc.into(),
        }
    }
}

// ── Edges ─────────────────────────────────────────────────────────

/// A directed `PARENT_OF` edge, identified by the endpoint names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ParentOf {
    pub parent: String,
    pub child: String,
}

impl ParentOf {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Whether either endpoint carries the given name.
    pub fn touches(&self, name: &str) -> bool {
        self.parent == name || self.child == name
    }
}
