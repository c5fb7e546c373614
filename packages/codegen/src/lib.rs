//! # Mailsmith Codegen
//!
//! Deterministic `Document → HTML string` generation targeting email
//! rendering engines.
//!
//! Email clients support only a restricted HTML/CSS subset: no external
//! stylesheets, no flexbox/grid, unreliable `<style>` support beyond
//! body-level resets. The generator therefore emits one document shell
//! (doctype, meta tags, minimal reset) wrapping a width-constrained
//! container div; one full-width `<table>` per section with all styling
//! inlined; and one rendering block per element inside each section's
//! single cell.
//!
//! Generation is total: every optional content/style field has a documented
//! default in [`defaults`], substituted at render time, so a document whose
//! elements carry no fields at all still produces valid HTML. Identical
//! documents yield byte-identical output — nothing in the render path
//! iterates an unordered container and no timestamp is embedded.

mod context;
pub mod defaults;
mod elements;
mod generator;


pub use context::GenerateOptions;
pub use generator::{generate_html, generate_html_with_options};
