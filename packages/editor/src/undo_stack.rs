//! # Undo/Redo Stack
//!
//! Tracks document history and enables undo/redo.
//!
//! ## Design
//!
//! Mutations are pure, so history is a stack of whole-document snapshots:
//! undo swaps the current document for the previous snapshot, redo swaps it
//! back. No inverse operations to compute, no partial state to repair.
//! Documents are small in-memory trees, so snapshot cost is negligible.

use mailsmith_model::Document;

/// Snapshot-based undo/redo stack for document editing.
#[derive(Debug)]
pub struct UndoStack {
    /// Past snapshots (most recent last).
    undo_stack: Vec<Document>,

    /// Undone snapshots (most recent last).
    redo_stack: Vec<Document>,

    /// Maximum number of undo levels (0 = unlimited).
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100).
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record the pre-mutation snapshot. New edits invalidate the redo
    /// future.
    pub fn push(&mut self, snapshot: Document) {
        self.undo_stack.push(snapshot);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Step back, exchanging `current` for the previous snapshot.
    pub fn undo(&mut self, current: &Document) -> Option<Document> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    /// Step forward, exchanging `current` for the next snapshot.
    pub fn redo(&mut self, current: &Document) -> Option<Document> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
