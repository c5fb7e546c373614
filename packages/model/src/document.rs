use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::id::IdGenerator;

/// Root template node.
///
/// Always renderable: there is no invalid intermediate state, and every
/// mutation produces a complete document. A document always holds at least
/// one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub subject_line: String,
    #[serde(default)]
    pub preview_text: String,
    #[serde(default)]
    pub global_style: GlobalStyle,
    pub sections: Vec<Section>,
    #[serde(default)]
    id_gen: IdGenerator,
}

/// Outer-wrapper style applied during generation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
}

impl GlobalStyle {
    pub fn merge(&mut self, patch: &GlobalStyle) {
        if patch.font_family.is_some() {
            self.font_family = patch.font_family.clone();
        }
        if patch.background.is_some() {
            self.background = patch.background.clone();
        }
        if patch.width.is_some() {
            self.width = patch.width.clone();
        }
        if patch.max_width.is_some() {
            self.max_width = patch.max_width.clone();
        }
    }
}

/// Ordered container of elements; order determines vertical stacking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub style: SectionStyle,
}

impl Section {
    pub fn new(id: String) -> Self {
        Self {
            id,
            elements: Vec::new(),
            style: SectionStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// CSS padding shorthand (e.g. "24px", "24px 16px").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<crate::element::Align>,
}

impl SectionStyle {
    pub fn merge(&mut self, patch: &SectionStyle) {
        if patch.background.is_some() {
            self.background = patch.background.clone();
        }
        if patch.padding.is_some() {
            self.padding = patch.padding.clone();
        }
        if patch.width.is_some() {
            self.width = patch.width.clone();
        }
        if patch.max_width.is_some() {
            self.max_width = patch.max_width.clone();
        }
        if patch.align.is_some() {
            self.align = patch.align;
        }
    }
}

impl Document {
    /// Create a fresh template with one empty default section.
    pub fn new(name: &str) -> Self {
        let mut id_gen = IdGenerator::new(name);
        let section = Section::new(id_gen.new_id());

        Self {
            name: name.to_string(),
            subject_line: String::new(),
            preview_text: String::new(),
            global_style: GlobalStyle::default(),
            sections: vec![section],
            id_gen,
        }
    }

    /// Hydrate a previously saved template.
    ///
    /// Hand-edited or merged templates get the same hardening as fresh ones:
    /// the id counter is bumped past every id present in the tree so no
    /// colliding id can be minted, and a template stripped of its sections
    /// gets one empty default section back (a document always holds at
    /// least one).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut doc: Document = serde_json::from_str(json)?;
        let ids: Vec<String> = doc.all_ids().map(str::to_string).collect();
        doc.id_gen.ensure_past(ids.iter().map(String::as_str));
        if doc.sections.is_empty() {
            let id = doc.id_gen.new_id();
            doc.sections.push(Section::new(id));
        }
        Ok(doc)
    }

    /// Serialize for the external storage collaborator.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Mint a fresh node id, unique for the document's lifetime.
    pub fn mint_id(&mut self) -> String {
        self.id_gen.new_id()
    }

    /// Every section and element id in tree order.
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().flat_map(|section| {
            std::iter::once(section.id.as_str())
                .chain(section.elements.iter().map(|el| el.id.as_str()))
        })
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.all_ids().any(|candidate| candidate == id)
    }

    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn find_section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.sections
            .iter()
            .flat_map(|s| s.elements.iter())
            .find(|el| el.id == element_id)
    }

    pub fn find_element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.elements.iter_mut())
            .find(|el| el.id == element_id)
    }

    /// The section holding the given element, if any.
    pub fn section_of_element(&self, element_id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.elements.iter().any(|el| el.id == element_id))
    }
}
