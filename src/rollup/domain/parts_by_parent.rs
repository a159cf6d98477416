use super::{ChildPart, PartId};
use std::collections::HashMap;

/// Key of the parent index
///
/// `Root` anchors every top-level part, so no real id can collide with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentKey {
    Root,
    Part(PartId),
}

impl From<Option<PartId>> for ParentKey {
    fn from(parent: Option<PartId>) -> Self {
        match parent {
            Some(id) => ParentKey::Part(id),
            None => ParentKey::Root,
        }
    }
}

impl std::fmt::Display for ParentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentKey::Root => write!(f, "<root>"),
            ParentKey::Part(id) => write!(f, "{}", id),
        }
    }
}

/// PartsByParent aggregate: adjacency list from parent to its children
///
/// Children keep the order in which their edges were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartsByParent {
    children: HashMap<ParentKey, Vec<ChildPart>>,
}

impl PartsByParent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parent: ParentKey, child: ChildPart) {
        self.children.entry(parent).or_default().push(child);
    }

    /// Children of `parent`; empty when the part is a leaf
    pub fn children_of(&self, parent: ParentKey) -> &[ChildPart] {
        self.children
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn parent_count(&self) -> usize {
        self.children.len()
    }

    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
