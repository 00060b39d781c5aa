use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ColorIdentifier, DecodingError};

pub const ROOT_SEMANTIC_ID: i32 = -1;
pub const DEFAULT_SEMANTIC_ID: i32 = 0;

pub const ROOT_SEMANTIC_NAME: &str = "Root";
pub const DEFAULT_SEMANTIC_NAME: &str = "Default";

/// Node of the semantic tree ("skin", "outline", ...) layered on top of the raw pixels.
///
/// The tree only grows. Its root (id -1) is a container and can't be found by
/// [`SemanticIdentifier::find`]; id 0 ("Default") always exists below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticIdentifier {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub children: Vec<SemanticIdentifier>,
}

impl Default for SemanticIdentifier {
    fn default() -> Self {
        Self::root()
    }
}

impl SemanticIdentifier {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Root with the single "Default" child.
    pub fn root() -> Self {
        let mut root = Self::new(ROOT_SEMANTIC_ID, ROOT_SEMANTIC_NAME);
        root.children.push(Self::new(DEFAULT_SEMANTIC_ID, DEFAULT_SEMANTIC_NAME));
        root
    }

    /// Searches the descendants (not `self`) in pre-order.
    pub fn find(&self, id: i32) -> Option<&SemanticIdentifier> {
        for child in &self.children {
            if child.id == id {
                return Some(child);
            }
            if let Some(found) = child.find(id) {
                return Some(found);
            }
        }
        None
    }

    fn find_mut(&mut self, id: i32) -> Option<&mut SemanticIdentifier> {
        for child in &mut self.children {
            if child.id == id {
                return Some(child);
            }
            if let Some(found) = child.find_mut(id) {
                return Some(found);
            }
        }
        None
    }

    pub fn contains(&self, id: i32) -> bool {
        self.find(id).is_some()
    }

    /// Pre-order traversal: `self` first, then every child subtree.
    pub fn enumerate_children(&self, visit: &mut impl FnMut(&SemanticIdentifier)) {
        visit(self);
        for child in &self.children {
            child.enumerate_children(visit);
        }
    }

    /// All ids in pre-order, including `self`.
    pub fn ids(&self) -> Vec<i32> {
        let mut ids = Vec::new();
        self.enumerate_children(&mut |node| ids.push(node.id));
        ids
    }

    /// Appends a child named `name` below `parent_id` and returns its new id.
    ///
    /// Returns `None` if `parent_id` is neither `self` nor a descendant.
    pub fn add_child(&mut self, parent_id: i32, name: impl Into<String>) -> Option<i32> {
        let id = self.ids().into_iter().max().unwrap_or(DEFAULT_SEMANTIC_ID).max(DEFAULT_SEMANTIC_ID) + 1;
        let parent = if self.id == parent_id { Some(self) } else { self.find_mut(parent_id) }?;
        parent.children.push(SemanticIdentifier::new(id, name));
        Some(id)
    }

    /// # Errors
    ///
    /// Fails if an id occurs twice or the default id is missing.
    pub fn validate(&self) -> Result<(), DecodingError> {
        let mut seen = HashSet::new();
        for id in self.ids() {
            if !seen.insert(id) {
                return Err(DecodingError::DuplicateSemantic { id });
            }
        }
        if !self.contains(DEFAULT_SEMANTIC_ID) {
            return Err(DecodingError::UnknownSemantic { id: DEFAULT_SEMANTIC_ID });
        }
        Ok(())
    }
}

/// One cell of the edited layer.
///
/// Equality and hashing use the `(semantic, color)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemanticPixel {
    pub semantic: i32,
    pub color: ColorIdentifier,
}

impl SemanticPixel {
    pub const fn new(semantic: i32, color: ColorIdentifier) -> Self {
        Self { semantic, color }
    }

    pub fn key(&self) -> (i32, ColorIdentifier) {
        (self.semantic, self.color)
    }
}
