//! # Edit Session
//!
//! One user's editing state: the document, the selection, and the undo
//! history, kept consistent as a unit. Every mutation and every undo/redo
//! step reconciles the selection against the resulting tree before control
//! returns to the caller, so the external property panel can never observe
//! a selection pointing at a deleted node.

use mailsmith_codegen::generate_html;
use mailsmith_model::Document;

use crate::{EditorError, Mutation, MutationError, Selection, UndoStack};

/// Payload handed to the external persistence collaborator on Save.
#[derive(Debug, Clone)]
pub struct SavePayload {
    pub document: Document,
    pub html: String,
}

/// Single-user editing session over one template.
pub struct EditSession {
    document: Document,
    selection: Selection,
    undo: UndoStack,

    /// Increments on each applied mutation and each undo/redo step.
    version: u64,
}

impl EditSession {
    /// Start a session on a fresh or hydrated document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: Selection::new(),
            undo: UndoStack::new(),
            version: 0,
        }
    }

    /// Start a session from a previously saved template.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(Self::new(Document::from_json(json)?))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation, returning the id of any node it created.
    ///
    /// No-op mutations (stale ids) leave the session version and undo
    /// history untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<Option<String>, MutationError> {
        let applied = mutation.apply(&self.document)?;

        if applied.document == self.document {
            return Ok(applied.created_id);
        }

        self.undo.push(std::mem::replace(&mut self.document, applied.document));
        self.version += 1;
        self.selection.reconcile(&self.document);

        Ok(applied.created_id)
    }

    pub fn select_element(&mut self, element_id: &str) {
        self.selection.select_element(&self.document, element_id);
    }

    pub fn select_section(&mut self, section_id: &str) {
        self.selection.select_section(&self.document, section_id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo.undo(&self.document) {
            Some(previous) => {
                self.document = previous;
                self.version += 1;
                self.selection.reconcile(&self.document);
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.undo.redo(&self.document) {
            Some(next) => {
                self.document = next;
                self.version += 1;
                self.selection.reconcile(&self.document);
                true
            }
            None => false,
        }
    }

    /// Generate HTML for the external preview renderer.
    pub fn preview(&self) -> String {
        generate_html(&self.document)
    }

    /// The save contract: hand `(document, html)` to the external
    /// persistence collaborator. The core does not decide when saving
    /// happens or how it is transported.
    pub fn save(&self) -> SavePayload {
        SavePayload {
            document: self.document.clone(),
            html: generate_html(&self.document),
        }
    }
}
