//! End-to-end editing scenarios: toolbox drops, restructuring, save.

use mailsmith_codegen::generate_html;
use mailsmith_editor::{EditSession, ElementKind, Mutation, MutationError, MoveDirection};
use mailsmith_model::{Document, TextContent, TextStyle};

#[test]
fn test_build_newsletter_from_scratch() {
    let mut session = EditSession::new(Document::new("October newsletter"));
    let hero_id = session.document().sections[0].id.clone();

    // Toolbox drops into the hero section.
    for kind in ["heading", "paragraph", "button"] {
        session
            .apply(Mutation::InsertElement {
                section_id: hero_id.clone(),
                kind: kind.to_string(),
            })
            .unwrap()
            .unwrap();
    }

    // A second section with a divider and an image.
    let footer_id = session
        .apply(Mutation::InsertSection { after: None })
        .unwrap()
        .unwrap();
    for kind in ["divider", "image"] {
        session
            .apply(Mutation::InsertElement {
                section_id: footer_id.clone(),
                kind: kind.to_string(),
            })
            .unwrap()
            .unwrap();
    }

    session
        .apply(Mutation::UpdateMeta {
            name: None,
            subject_line: Some("October news".to_string()),
            preview_text: Some("Everything we shipped".to_string()),
        })
        .unwrap();

    let payload = session.save();
    assert_eq!(payload.html.matches("<table").count(), 2);
    assert!(payload.html.contains("Everything we shipped"));
    assert_eq!(payload.document.sections[0].elements.len(), 3);
    assert_eq!(payload.document.sections[1].elements.len(), 2);
}

#[test]
fn test_generated_tables_track_section_order() {
    let mut session = EditSession::new(Document::new("Order"));
    let first_id = session.document().sections[0].id.clone();
    let second_id = session
        .apply(Mutation::InsertSection { after: None })
        .unwrap()
        .unwrap();

    session
        .apply(Mutation::UpdateSection {
            section_id: first_id,
            style: mailsmith_model::SectionStyle {
                background: Some("#0000AA".to_string()),
                ..Default::default()
            },
        })
        .unwrap();
    session
        .apply(Mutation::UpdateSection {
            section_id: second_id.clone(),
            style: mailsmith_model::SectionStyle {
                background: Some("#AA0000".to_string()),
                ..Default::default()
            },
        })
        .unwrap();

    let before = generate_html(session.document());
    assert!(before.find("#0000AA").unwrap() < before.find("#AA0000").unwrap());

    session
        .apply(Mutation::MoveSection {
            section_id: second_id,
            direction: MoveDirection::Up,
        })
        .unwrap();

    let after = generate_html(session.document());
    assert!(after.find("#AA0000").unwrap() < after.find("#0000AA").unwrap());
}

#[test]
fn test_global_style_flows_into_generated_wrapper() {
    let mut session = EditSession::new(Document::new("Global"));

    session
        .apply(Mutation::UpdateGlobalStyle {
            style: mailsmith_model::GlobalStyle {
                font_family: Some("Georgia, serif".to_string()),
                max_width: Some("720px".to_string()),
                ..Default::default()
            },
        })
        .unwrap();

    let html = generate_html(session.document());
    assert!(html.contains("font-family:Georgia, serif;"));
    assert!(html.contains("max-width:720px;"));
    // Fields the patch left unset keep their generation-time defaults.
    assert!(html.contains("background-color:#F4F4F4;"));
}

#[test]
fn test_duplicate_then_edit_leaves_source_untouched() {
    let mut session = EditSession::new(Document::new("Duplicate"));
    let section_id = session.document().sections[0].id.clone();

    let heading_id = session
        .apply(Mutation::InsertElement {
            section_id: section_id.clone(),
            kind: "heading".to_string(),
        })
        .unwrap()
        .unwrap();
    session
        .apply(Mutation::UpdateElement {
            element_id: heading_id.clone(),
            patch: ElementKind::Heading {
                content: TextContent {
                    text: Some("Original".to_string()),
                },
                style: TextStyle::default(),
            },
        })
        .unwrap();

    let copy_section_id = session
        .apply(Mutation::DuplicateSection {
            section_id: section_id.clone(),
        })
        .unwrap()
        .unwrap();

    // Edit the heading inside the copy; the original must not change.
    let copy_heading_id = session
        .document()
        .find_section(&copy_section_id)
        .unwrap()
        .elements[0]
        .id
        .clone();
    assert_ne!(copy_heading_id, heading_id);

    session
        .apply(Mutation::UpdateElement {
            element_id: copy_heading_id,
            patch: ElementKind::Heading {
                content: TextContent {
                    text: Some("Copy".to_string()),
                },
                style: TextStyle::default(),
            },
        })
        .unwrap();

    let doc = session.document();
    match &doc.find_element(&heading_id).unwrap().kind {
        ElementKind::Heading { content, .. } => {
            assert_eq!(content.text.as_deref(), Some("Original"));
        }
        _ => panic!("kind changed"),
    }
}

#[test]
fn test_stale_id_after_structural_change_is_noop() {
    let mut session = EditSession::new(Document::new("Stale"));
    let section_id = session.document().sections[0].id.clone();
    let element_id = session
        .apply(Mutation::InsertElement {
            section_id,
            kind: "spacer".to_string(),
        })
        .unwrap()
        .unwrap();

    session
        .apply(Mutation::RemoveElement {
            element_id: element_id.clone(),
        })
        .unwrap();
    let version = session.version();

    // A caller holding the deleted id gets a silent no-op.
    session
        .apply(Mutation::RemoveElement { element_id })
        .unwrap();
    assert_eq!(session.version(), version);
}

#[test]
fn test_last_section_survives_delete_attempts() {
    let mut session = EditSession::new(Document::new("Last"));
    let section_id = session.document().sections[0].id.clone();
    let before = session.document().clone();

    let err = session
        .apply(Mutation::RemoveSection { section_id })
        .unwrap_err();

    assert_eq!(err, MutationError::LastSection);
    assert_eq!(*session.document(), before);
}

#[test]
fn test_undo_chain_restores_initial_document() {
    let mut session = EditSession::new(Document::new("History"));
    let initial = session.document().clone();
    let section_id = session.document().sections[0].id.clone();

    for kind in ["heading", "image", "button"] {
        session
            .apply(Mutation::InsertElement {
                section_id: section_id.clone(),
                kind: kind.to_string(),
            })
            .unwrap();
    }
    session
        .apply(Mutation::DuplicateSection {
            section_id: section_id.clone(),
        })
        .unwrap();

    while session.undo() {}

    assert_eq!(*session.document(), initial);
}

#[test]
fn test_save_round_trips_through_json() {
    let mut session = EditSession::new(Document::new("Round trip"));
    let section_id = session.document().sections[0].id.clone();
    session
        .apply(Mutation::InsertElement {
            section_id,
            kind: "rawHtml".to_string(),
        })
        .unwrap();

    let payload = session.save();
    let json = payload.document.to_json().unwrap();

    let mut restored = EditSession::from_json(&json).unwrap();
    assert_eq!(*restored.document(), payload.document);

    // The restored session mints ids that never collide with existing ones.
    let new_section = restored
        .apply(Mutation::InsertSection { after: None })
        .unwrap()
        .unwrap();
    assert!(!payload.document.contains_id(&new_section));
}
