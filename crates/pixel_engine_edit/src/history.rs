//! Branching undo/redo log.
//!
//! Nodes live in an arena and link to each other by index. Recording after an undo adds a
//! sibling branch instead of dropping the undone operations; redo always follows the most
//! recently recorded branch.

use pixel_engine::PixelBuffer;

use crate::Operation;

/// Undo/redo surface shared by everything that owns a [`History`].
pub trait UndoState {
    fn undo_description(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    /// Returns false when there was nothing to undo.
    fn undo(&mut self) -> bool;

    fn redo_description(&self) -> Option<String>;
    fn can_redo(&self) -> bool;
    /// Returns false when there was nothing to redo.
    fn redo(&mut self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing recorded yet.
    Empty,
    /// The head has no redo branch.
    AtTip,
    /// At least one operation can be redone.
    MidHistory,
}

#[derive(Clone, Debug)]
struct HistoryNode<T> {
    operation: Operation<T>,
    previous: Option<usize>,
    next: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct History<T> {
    nodes: Vec<HistoryNode<T>>,
    /// Nodes without a predecessor, in recording order.
    roots: Vec<usize>,
    /// Last applied operation, `None` before the first one.
    head: Option<usize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            head: None,
        }
    }
}

impl<T: Clone> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded operations over all branches.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn state(&self) -> HistoryState {
        if self.nodes.is_empty() {
            HistoryState::Empty
        } else if self.forward_branches().is_empty() {
            HistoryState::AtTip
        } else {
            HistoryState::MidHistory
        }
    }

    fn forward_branches(&self) -> &[usize] {
        match self.head {
            Some(head) => &self.nodes[head].next,
            None => &self.roots,
        }
    }

    /// Number of redo branches leaving the head.
    pub fn branch_count(&self) -> usize {
        self.forward_branches().len()
    }

    /// The operation `undo` would revert.
    pub fn head_operation(&self) -> Option<&Operation<T>> {
        self.head.map(|head| &self.nodes[head].operation)
    }

    /// The operation `redo` would apply.
    pub fn redo_operation(&self) -> Option<&Operation<T>> {
        self.forward_branches().last().map(|next| &self.nodes[*next].operation)
    }

    /// Appends `operation` after the head and makes it the new head. The operation must
    /// already be applied to the image.
    pub fn record(&mut self, operation: Operation<T>) {
        let index = self.nodes.len();
        self.nodes.push(HistoryNode {
            operation,
            previous: self.head,
            next: Vec::new(),
        });
        match self.head {
            Some(head) => self.nodes[head].next.push(index),
            None => self.roots.push(index),
        }
        self.head = Some(index);
    }

    pub fn can_undo(&self) -> bool {
        self.head.is_some()
    }

    pub fn can_redo(&self) -> bool {
        !self.forward_branches().is_empty()
    }

    /// Reverts the head operation on `image` and steps back.
    pub fn undo(&mut self, image: &mut PixelBuffer<T>) -> bool {
        let Some(head) = self.head else {
            log::debug!("undo: nothing to undo");
            return false;
        };
        let node = &self.nodes[head];
        node.operation.undo(image);
        self.head = node.previous;
        true
    }

    /// Re-applies the most recently recorded branch after the head.
    pub fn redo(&mut self, image: &mut PixelBuffer<T>) -> bool {
        let Some(&next) = self.forward_branches().last() else {
            log::debug!("redo: no forward branch");
            return false;
        };
        self.nodes[next].operation.redo(image);
        self.head = Some(next);
        true
    }
}
