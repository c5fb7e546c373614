//! # Document Mutations
//!
//! High-level semantic operations on Mailsmith documents.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `apply` returns a new document; the input is never touched
//! 2. **Total**: every mutation yields a complete, renderable document
//! 3. **Intent-preserving**: each mutation represents one user gesture
//!
//! ## Error policy
//!
//! Operating on an id that no longer exists is a caller bug (typically a
//! stale id held across a duplicate), not a user-facing error. Those cases
//! are logged at `warn` and return the document unchanged. The only explicit
//! rejection is deleting the last remaining section, which the caller is
//! expected to surface to the user.

use mailsmith_model::{Document, Element, ElementKind, GlobalStyle, Section, SectionStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Direction for [`Mutation::MoveSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a kind-default element to a section.
    ///
    /// `kind` is the toolbox kind string from the drag-source contract.
    InsertElement { section_id: String, kind: String },

    /// Merge supplied content/style fields into an element, wherever it
    /// resides. The patch must be built for the element's kind.
    UpdateElement {
        element_id: String,
        patch: ElementKind,
    },

    /// Remove an element from whichever section holds it.
    RemoveElement { element_id: String },

    /// Relocate an element to `section_id` at `index` (clamped).
    MoveElement {
        element_id: String,
        section_id: String,
        index: usize,
    },

    /// Copy an element with a fresh id, inserted after the source.
    DuplicateElement { element_id: String },

    /// Append a new empty section, or insert immediately after `after`.
    InsertSection { after: Option<String> },

    /// Merge supplied style fields into a section.
    UpdateSection {
        section_id: String,
        style: SectionStyle,
    },

    /// Remove a section. Rejected when it is the last one.
    RemoveSection { section_id: String },

    /// Deep-copy a section and all its elements with freshly minted ids,
    /// inserted immediately after the original.
    DuplicateSection { section_id: String },

    /// Swap a section with its neighbor; no-op at either boundary.
    MoveSection {
        section_id: String,
        direction: MoveDirection,
    },

    /// Update template metadata.
    UpdateMeta {
        name: Option<String>,
        subject_line: Option<String>,
        preview_text: Option<String>,
    },

    /// Merge supplied fields into the global wrapper style.
    UpdateGlobalStyle { style: GlobalStyle },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("cannot delete the last remaining section")]
    LastSection,
}

/// Result of applying a mutation.
#[derive(Debug, Clone)]
pub struct Applied {
    /// The new document (the input is left untouched).
    pub document: Document,

    /// Id of the node the mutation created, if any.
    pub created_id: Option<String>,
}

impl Mutation {
    /// Apply this mutation to a document, returning the new document.
    pub fn apply(&self, doc: &Document) -> Result<Applied, MutationError> {
        let mut next = doc.clone();

        let created_id = match self {
            Mutation::InsertElement { section_id, kind } => {
                Self::apply_insert_element(&mut next, section_id, kind)
            }

            Mutation::UpdateElement { element_id, patch } => {
                Self::apply_update_element(&mut next, element_id, patch);
                None
            }

            Mutation::RemoveElement { element_id } => {
                Self::apply_remove_element(&mut next, element_id);
                None
            }

            Mutation::MoveElement {
                element_id,
                section_id,
                index,
            } => {
                Self::apply_move_element(&mut next, element_id, section_id, *index);
                None
            }

            Mutation::DuplicateElement { element_id } => {
                Self::apply_duplicate_element(&mut next, element_id)
            }

            Mutation::InsertSection { after } => {
                Self::apply_insert_section(&mut next, after.as_deref())
            }

            Mutation::UpdateSection { section_id, style } => {
                Self::apply_update_section(&mut next, section_id, style);
                None
            }

            Mutation::RemoveSection { section_id } => {
                Self::apply_remove_section(&mut next, section_id)?;
                None
            }

            Mutation::DuplicateSection { section_id } => {
                Self::apply_duplicate_section(&mut next, section_id)
            }

            Mutation::MoveSection {
                section_id,
                direction,
            } => {
                Self::apply_move_section(&mut next, section_id, *direction);
                None
            }

            Mutation::UpdateMeta {
                name,
                subject_line,
                preview_text,
            } => {
                if let Some(name) = name {
                    next.name = name.clone();
                }
                if let Some(subject) = subject_line {
                    next.subject_line = subject.clone();
                }
                if let Some(preview) = preview_text {
                    next.preview_text = preview.clone();
                }
                None
            }

            Mutation::UpdateGlobalStyle { style } => {
                next.global_style.merge(style);
                None
            }
        };

        Ok(Applied {
            document: next,
            created_id,
        })
    }

    fn apply_insert_element(doc: &mut Document, section_id: &str, kind: &str) -> Option<String> {
        let Some(payload) = ElementKind::from_kind_name(kind) else {
            warn!(kind, "insert_element: unknown element kind");
            return None;
        };

        if doc.find_section(section_id).is_none() {
            warn!(section_id, "insert_element: section not found");
            return None;
        }

        let id = doc.mint_id();
        let section = doc
            .find_section_mut(section_id)
            .expect("section presence checked above");
        section.elements.push(Element::new(id.clone(), payload));
        Some(id)
    }

    fn apply_update_element(doc: &mut Document, element_id: &str, patch: &ElementKind) {
        match doc.find_element_mut(element_id) {
            Some(element) => {
                if !element.merge_patch(patch) {
                    warn!(
                        element_id,
                        expected = element.kind.kind_name(),
                        got = patch.kind_name(),
                        "update_element: patch kind mismatch"
                    );
                }
            }
            None => warn!(element_id, "update_element: element not found"),
        }
    }

    fn apply_remove_element(doc: &mut Document, element_id: &str) {
        for section in &mut doc.sections {
            if let Some(pos) = section.elements.iter().position(|el| el.id == element_id) {
                section.elements.remove(pos);
                return;
            }
        }
        warn!(element_id, "remove_element: element not found");
    }

    fn apply_move_element(doc: &mut Document, element_id: &str, section_id: &str, index: usize) {
        // Check the target before detaching, so a bad target can't drop
        // the element.
        if doc.find_section(section_id).is_none() {
            warn!(section_id, "move_element: target section not found");
            return;
        }

        let mut detached = None;
        for section in &mut doc.sections {
            if let Some(pos) = section.elements.iter().position(|el| el.id == element_id) {
                detached = Some(section.elements.remove(pos));
                break;
            }
        }

        let Some(element) = detached else {
            warn!(element_id, "move_element: element not found");
            return;
        };

        let target = doc
            .find_section_mut(section_id)
            .expect("target presence checked above");
        let insert_index = index.min(target.elements.len());
        target.elements.insert(insert_index, element);
    }

    fn apply_duplicate_element(doc: &mut Document, element_id: &str) -> Option<String> {
        let Some(section_id) = doc.section_of_element(element_id).map(|s| s.id.clone()) else {
            warn!(element_id, "duplicate_element: element not found");
            return None;
        };

        let id = doc.mint_id();
        let section = doc
            .find_section_mut(&section_id)
            .expect("holding section resolves");
        let pos = section
            .elements
            .iter()
            .position(|el| el.id == element_id)
            .expect("element presence checked above");
        let copy = Element::new(id.clone(), section.elements[pos].kind.clone());
        section.elements.insert(pos + 1, copy);
        Some(id)
    }

    fn apply_insert_section(doc: &mut Document, after: Option<&str>) -> Option<String> {
        let index = match after {
            Some(after_id) => match doc.section_index(after_id) {
                Some(index) => index + 1,
                None => {
                    warn!(after_id, "insert_section: anchor not found");
                    return None;
                }
            },
            None => doc.sections.len(),
        };

        let id = doc.mint_id();
        doc.sections.insert(index, Section::new(id.clone()));
        Some(id)
    }

    fn apply_update_section(doc: &mut Document, section_id: &str, style: &SectionStyle) {
        match doc.find_section_mut(section_id) {
            Some(section) => section.style.merge(style),
            None => warn!(section_id, "update_section: section not found"),
        }
    }

    fn apply_remove_section(doc: &mut Document, section_id: &str) -> Result<(), MutationError> {
        let Some(index) = doc.section_index(section_id) else {
            warn!(section_id, "remove_section: section not found");
            return Ok(());
        };

        if doc.sections.len() == 1 {
            return Err(MutationError::LastSection);
        }

        doc.sections.remove(index);
        Ok(())
    }

    fn apply_duplicate_section(doc: &mut Document, section_id: &str) -> Option<String> {
        let Some(index) = doc.section_index(section_id) else {
            warn!(section_id, "duplicate_section: section not found");
            return None;
        };

        // Fresh ids for the copy and every element inside it. Reusing the
        // source ids would break selection and make future edits hit both
        // sections at once.
        let mut copy = doc.sections[index].clone();
        copy.id = doc.mint_id();
        for element in &mut copy.elements {
            element.id = doc.mint_id();
        }

        let id = copy.id.clone();
        doc.sections.insert(index + 1, copy);
        Some(id)
    }

    fn apply_move_section(doc: &mut Document, section_id: &str, direction: MoveDirection) {
        let Some(index) = doc.section_index(section_id) else {
            warn!(section_id, "move_section: section not found");
            return;
        };

        match direction {
            MoveDirection::Up if index > 0 => doc.sections.swap(index, index - 1),
            MoveDirection::Down if index + 1 < doc.sections.len() => {
                doc.sections.swap(index, index + 1)
            }
            // At the boundary the move is a plain no-op, not a contract
            // violation.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsmith_model::TextContent;

    fn doc_with_sections(n: usize) -> Document {
        let mut doc = Document::new("Test");
        for _ in 1..n {
            doc = Mutation::InsertSection { after: None }
                .apply(&doc)
                .unwrap()
                .document;
        }
        doc
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::InsertElement {
            section_id: "abc-1".to_string(),
            kind: "button".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_insert_element_appends() {
        let doc = Document::new("Test");
        let section_id = doc.sections[0].id.clone();

        let applied = Mutation::InsertElement {
            section_id: section_id.clone(),
            kind: "heading".to_string(),
        }
        .apply(&doc)
        .unwrap();

        let new_id = applied.created_id.unwrap();
        assert_eq!(applied.document.sections[0].elements.len(), 1);
        assert_eq!(applied.document.sections[0].elements[0].id, new_id);

        // The input document was not touched.
        assert!(doc.sections[0].elements.is_empty());
    }

    #[test]
    fn test_insert_element_unknown_section_is_noop() {
        let doc = Document::new("Test");

        let applied = Mutation::InsertElement {
            section_id: "stale-99".to_string(),
            kind: "heading".to_string(),
        }
        .apply(&doc)
        .unwrap();

        assert!(applied.created_id.is_none());
        assert_eq!(applied.document, doc);
    }

    #[test]
    fn test_insert_element_unknown_kind_is_noop() {
        let doc = Document::new("Test");
        let section_id = doc.sections[0].id.clone();

        let applied = Mutation::InsertElement {
            section_id,
            kind: "carousel".to_string(),
        }
        .apply(&doc)
        .unwrap();

        assert!(applied.created_id.is_none());
        assert_eq!(applied.document, doc);
    }

    #[test]
    fn test_update_element_merges_fields() {
        let doc = Document::new("Test");
        let section_id = doc.sections[0].id.clone();
        let applied = Mutation::InsertElement {
            section_id,
            kind: "paragraph".to_string(),
        }
        .apply(&doc)
        .unwrap();
        let element_id = applied.created_id.unwrap();

        let patched = Mutation::UpdateElement {
            element_id: element_id.clone(),
            patch: ElementKind::Paragraph {
                content: TextContent {
                    text: Some("Updated copy".to_string()),
                },
                style: Default::default(),
            },
        }
        .apply(&applied.document)
        .unwrap();

        match &patched.document.find_element(&element_id).unwrap().kind {
            ElementKind::Paragraph { content, .. } => {
                assert_eq!(content.text.as_deref(), Some("Updated copy"));
            }
            _ => panic!("kind changed"),
        }
    }

    #[test]
    fn test_remove_last_section_rejected() {
        let doc = Document::new("Test");
        let section_id = doc.sections[0].id.clone();

        let err = Mutation::RemoveSection { section_id }
            .apply(&doc)
            .unwrap_err();

        assert_eq!(err, MutationError::LastSection);
    }

    #[test]
    fn test_remove_section() {
        let doc = doc_with_sections(2);
        let second_id = doc.sections[1].id.clone();

        let applied = Mutation::RemoveSection {
            section_id: second_id.clone(),
        }
        .apply(&doc)
        .unwrap();

        assert_eq!(applied.document.sections.len(), 1);
        assert!(!applied.document.contains_id(&second_id));
    }

    #[test]
    fn test_duplicate_section_mints_disjoint_ids() {
        let mut doc = Document::new("Test");
        let section_id = doc.sections[0].id.clone();
        for kind in ["heading", "paragraph", "button"] {
            doc = Mutation::InsertElement {
                section_id: section_id.clone(),
                kind: kind.to_string(),
            }
            .apply(&doc)
            .unwrap()
            .document;
        }

        let before_ids: Vec<String> = doc.all_ids().map(str::to_string).collect();

        let applied = Mutation::DuplicateSection {
            section_id: section_id.clone(),
        }
        .apply(&doc)
        .unwrap();
        let copy_id = applied.created_id.unwrap();
        let copy = applied.document.find_section(&copy_id).unwrap();

        // The copy sits right after the original.
        assert_eq!(applied.document.section_index(&copy_id), Some(1));

        // Every id in the copy is fresh.
        assert!(!before_ids.contains(&copy.id));
        for element in &copy.elements {
            assert!(!before_ids.contains(&element.id));
        }

        // Content survived the copy.
        assert_eq!(copy.elements.len(), 3);
    }

    #[test]
    fn test_move_section_is_involution() {
        let doc = doc_with_sections(3);
        let middle_id = doc.sections[1].id.clone();
        let order: Vec<String> = doc.sections.iter().map(|s| s.id.clone()).collect();

        let up = Mutation::MoveSection {
            section_id: middle_id.clone(),
            direction: MoveDirection::Up,
        }
        .apply(&doc)
        .unwrap();
        assert_eq!(up.document.section_index(&middle_id), Some(0));

        let back = Mutation::MoveSection {
            section_id: middle_id,
            direction: MoveDirection::Down,
        }
        .apply(&up.document)
        .unwrap();

        let restored: Vec<String> = back.document.sections.iter().map(|s| s.id.clone()).collect();
        assert_eq!(restored, order);
    }

    #[test]
    fn test_move_section_boundary_is_noop() {
        let doc = doc_with_sections(2);
        let first_id = doc.sections[0].id.clone();

        let applied = Mutation::MoveSection {
            section_id: first_id,
            direction: MoveDirection::Up,
        }
        .apply(&doc)
        .unwrap();

        assert_eq!(applied.document, doc);
    }

    #[test]
    fn test_move_element_across_sections() {
        let doc = doc_with_sections(2);
        let first_id = doc.sections[0].id.clone();
        let second_id = doc.sections[1].id.clone();

        let applied = Mutation::InsertElement {
            section_id: first_id.clone(),
            kind: "divider".to_string(),
        }
        .apply(&doc)
        .unwrap();
        let element_id = applied.created_id.unwrap();

        let moved = Mutation::MoveElement {
            element_id: element_id.clone(),
            section_id: second_id.clone(),
            index: 5, // clamped
        }
        .apply(&applied.document)
        .unwrap();

        assert!(moved.document.find_section(&first_id).unwrap().elements.is_empty());
        assert_eq!(
            moved
                .document
                .section_of_element(&element_id)
                .map(|s| s.id.clone()),
            Some(second_id)
        );
    }

    #[test]
    fn test_move_element_to_missing_section_keeps_element() {
        let doc = Document::new("Test");
        let section_id = doc.sections[0].id.clone();
        let applied = Mutation::InsertElement {
            section_id,
            kind: "image".to_string(),
        }
        .apply(&doc)
        .unwrap();
        let element_id = applied.created_id.unwrap();

        let moved = Mutation::MoveElement {
            element_id: element_id.clone(),
            section_id: "stale-1".to_string(),
            index: 0,
        }
        .apply(&applied.document)
        .unwrap();

        assert_eq!(moved.document, applied.document);
        assert!(moved.document.find_element(&element_id).is_some());
    }

    #[test]
    fn test_duplicate_element_inserts_after_source() {
        let doc = Document::new("Test");
        let section_id = doc.sections[0].id.clone();
        let mut current = doc;
        let mut ids = Vec::new();
        for kind in ["heading", "button"] {
            let applied = Mutation::InsertElement {
                section_id: section_id.clone(),
                kind: kind.to_string(),
            }
            .apply(&current)
            .unwrap();
            ids.push(applied.created_id.unwrap());
            current = applied.document;
        }

        let applied = Mutation::DuplicateElement {
            element_id: ids[0].clone(),
        }
        .apply(&current)
        .unwrap();
        let copy_id = applied.created_id.unwrap();

        let order: Vec<&str> = applied.document.sections[0]
            .elements
            .iter()
            .map(|el| el.id.as_str())
            .collect();
        assert_eq!(order, vec![ids[0].as_str(), copy_id.as_str(), ids[1].as_str()]);
    }

    #[test]
    fn test_insert_section_after() {
        let doc = doc_with_sections(2);
        let first_id = doc.sections[0].id.clone();

        let applied = Mutation::InsertSection {
            after: Some(first_id),
        }
        .apply(&doc)
        .unwrap();
        let new_id = applied.created_id.unwrap();

        assert_eq!(applied.document.sections.len(), 3);
        assert_eq!(applied.document.section_index(&new_id), Some(1));
    }

    #[test]
    fn test_insert_section_stale_anchor_is_noop() {
        let doc = Document::new("Test");

        let applied = Mutation::InsertSection {
            after: Some("stale-42".to_string()),
        }
        .apply(&doc)
        .unwrap();

        assert!(applied.created_id.is_none());
        assert_eq!(applied.document, doc);
    }

    #[test]
    fn test_update_global_style_merges_fields() {
        let doc = Document::new("Test");

        let first = Mutation::UpdateGlobalStyle {
            style: GlobalStyle {
                background: Some("#101010".to_string()),
                ..Default::default()
            },
        }
        .apply(&doc)
        .unwrap();

        let second = Mutation::UpdateGlobalStyle {
            style: GlobalStyle {
                max_width: Some("720px".to_string()),
                ..Default::default()
            },
        }
        .apply(&first.document)
        .unwrap();

        let global = &second.document.global_style;
        assert_eq!(global.background.as_deref(), Some("#101010"));
        assert_eq!(global.max_width.as_deref(), Some("720px"));
        assert_eq!(global.font_family, None);
    }

    #[test]
    fn test_update_meta() {
        let doc = Document::new("Test");

        let applied = Mutation::UpdateMeta {
            name: None,
            subject_line: Some("You're invited".to_string()),
            preview_text: Some("Three days only".to_string()),
        }
        .apply(&doc)
        .unwrap();

        assert_eq!(applied.document.name, "Test");
        assert_eq!(applied.document.subject_line, "You're invited");
        assert_eq!(applied.document.preview_text, "Three days only");
    }
}
