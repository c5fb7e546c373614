//! # Selection State
//!
//! Tracks which section and/or element the external property panel is
//! editing. Selection lives beside the document, never inside it, and is
//! re-derived against the current tree after every mutation so it can never
//! point at a deleted or relocated node.

use mailsmith_model::Document;

/// At most one active element and/or one active section.
///
/// Invariant: when an element is selected, the section selection is always
/// that element's current parent, re-derived rather than tracked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    section: Option<String>,
    element: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Select an element, activating its parent section as well.
    ///
    /// Unknown ids clear the element selection instead of leaving a stale
    /// reference behind.
    pub fn select_element(&mut self, doc: &Document, element_id: &str) {
        match doc.section_of_element(element_id) {
            Some(section) => {
                self.element = Some(element_id.to_string());
                self.section = Some(section.id.clone());
            }
            None => self.element = None,
        }
    }

    /// Select a section, clearing any element selection.
    pub fn select_section(&mut self, doc: &Document, section_id: &str) {
        self.element = None;
        self.section = if doc.find_section(section_id).is_some() {
            Some(section_id.to_string())
        } else {
            None
        };
    }

    pub fn clear(&mut self) {
        self.section = None;
        self.element = None;
    }

    /// Re-derive consistency against the current document.
    ///
    /// Called within the same logical step as every mutation: a selection
    /// referencing a just-deleted entity is corrected here, and an element
    /// that moved sections drags the section selection along with it.
    pub fn reconcile(&mut self, doc: &Document) {
        if let Some(element_id) = self.element.clone() {
            match doc.section_of_element(&element_id) {
                Some(section) => {
                    self.section = Some(section.id.clone());
                    return;
                }
                None => self.element = None,
            }
        }

        if let Some(section_id) = &self.section {
            if doc.find_section(section_id).is_none() {
                self.section = None;
            }
        }
    }
}
