use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailsmith_codegen::generate_html;
use mailsmith_model::{
    ButtonContent, ButtonStyle, Document, Element, ElementKind, TextContent, TextStyle,
};

fn sample_document(sections: usize) -> Document {
    let mut doc = Document::new("Benchmark newsletter");
    doc.preview_text = "The latest from the bench".to_string();

    for i in 0..sections {
        if i > 0 {
            let id = doc.mint_id();
            doc.sections.push(mailsmith_model::Section::new(id));
        }

        let heading_id = doc.mint_id();
        doc.sections[i].elements.push(Element::new(
            heading_id,
            ElementKind::Heading {
                content: TextContent {
                    text: Some(format!("Story {}", i + 1)),
                },
                style: TextStyle::default(),
            },
        ));

        let body_id = doc.mint_id();
        doc.sections[i].elements.push(Element::new(
            body_id,
            ElementKind::Paragraph {
                content: TextContent {
                    text: Some("A paragraph of body copy long enough to matter.".to_string()),
                },
                style: TextStyle::default(),
            },
        ));

        let button_id = doc.mint_id();
        doc.sections[i].elements.push(Element::new(
            button_id,
            ElementKind::Button {
                content: ButtonContent {
                    label: Some("Read more".to_string()),
                    href: Some("https://example.com/story".to_string()),
                },
                style: ButtonStyle::default(),
            },
        ));
    }

    doc
}

fn generate_small_document(c: &mut Criterion) {
    let doc = sample_document(1);

    c.bench_function("generate_small_document", |b| {
        b.iter(|| generate_html(black_box(&doc)))
    });
}

fn generate_large_document(c: &mut Criterion) {
    let doc = sample_document(50);

    c.bench_function("generate_large_document", |b| {
        b.iter(|| generate_html(black_box(&doc)))
    });
}

criterion_group!(benches, generate_small_document, generate_large_document);
criterion_main!(benches);
