//! # Mailsmith Model
//!
//! The email template document tree: a `Document` of ordered `Section`s,
//! each holding ordered content `Element`s.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document / Section / Element values  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + selection + undo        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ codegen: Document → email-safe HTML         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Plain values**: every node is a serde-derived value struct; the tree
//!    is cloned and swapped whole, never shared.
//! 2. **No baked-in defaults**: unset content/style fields stay `None` in the
//!    tree; the code generator substitutes documented defaults at render
//!    time, so saved templates stay minimal and diffable.
//! 3. **Ids are never reused**: the id counter travels with the document and
//!    is repaired on hydration.

mod document;
mod element;
mod id;

pub use document::{Document, GlobalStyle, Section, SectionStyle};
pub use element::{
    Align, ButtonContent, ButtonStyle, DividerStyle, Element, ElementKind, ImageContent,
    ImageStyle, RawHtmlContent, RawHtmlStyle, SpacerStyle, TextContent, TextStyle,
};
pub use id::IdGenerator;
