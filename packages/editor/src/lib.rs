//! # Mailsmith Editor
//!
//! Document editing engine for Mailsmith email templates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document / Section / Element tree    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: pure mutations over the tree        │
//! │  - Insert/update/move/duplicate/delete      │
//! │  - Selection state, re-derived per step     │
//! │  - Snapshot undo/redo                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ codegen: Document → email-safe HTML         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: generated HTML and selection are
//!    derived views, never stored inside the tree.
//! 2. **Mutations are pure**: `Mutation::apply` takes a document and returns
//!    a new one; the input is never edited in place, so undo is a snapshot
//!    swap and diffing needs no bookkeeping.
//! 3. **Resilient contract**: operations on stale ids are logged no-ops, not
//!    panics; only deleting the last section is an explicit rejection.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mailsmith_editor::{EditSession, Mutation};
//! use mailsmith_model::Document;
//!
//! let mut session = EditSession::new(Document::new("Spring Sale"));
//! let section_id = session.document().sections[0].id.clone();
//!
//! session.apply(Mutation::InsertElement {
//!     section_id,
//!     kind: "heading".to_string(),
//! })?;
//!
//! let payload = session.save(); // (Document, generated HTML)
//! ```

mod errors;
mod mutations;
mod selection;
mod session;
mod undo_stack;

pub use errors::EditorError;
pub use mutations::{Applied, Mutation, MutationError, MoveDirection};
pub use selection::Selection;
pub use session::{EditSession, SavePayload};
pub use undo_stack::UndoStack;

// Re-export common types for convenience
pub use mailsmith_model::{Document, Element, ElementKind, Section};
