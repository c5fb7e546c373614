use serde::{Deserialize, Serialize};

/// Horizontal alignment, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_css(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// One content primitive inside a section.
///
/// All content/style fields are optional: the tree never bakes defaults in,
/// the code generator substitutes them at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    pub fn new(id: String, kind: ElementKind) -> Self {
        Self { id, kind }
    }

    /// Merge a patch of the same kind into this element.
    ///
    /// Returns `false` (leaving the element untouched) when the patch was
    /// built for a different kind.
    pub fn merge_patch(&mut self, patch: &ElementKind) -> bool {
        match (&mut self.kind, patch) {
            (
                ElementKind::Heading { content, style },
                ElementKind::Heading {
                    content: pc,
                    style: ps,
                },
            )
            | (
                ElementKind::Paragraph { content, style },
                ElementKind::Paragraph {
                    content: pc,
                    style: ps,
                },
            ) => {
                content.merge(pc);
                style.merge(ps);
                true
            }
            (
                ElementKind::Image { content, style },
                ElementKind::Image {
                    content: pc,
                    style: ps,
                },
            ) => {
                content.merge(pc);
                style.merge(ps);
                true
            }
            (
                ElementKind::Button { content, style },
                ElementKind::Button {
                    content: pc,
                    style: ps,
                },
            ) => {
                content.merge(pc);
                style.merge(ps);
                true
            }
            (ElementKind::Divider { style }, ElementKind::Divider { style: ps }) => {
                style.merge(ps);
                true
            }
            (ElementKind::Spacer { style }, ElementKind::Spacer { style: ps }) => {
                style.merge(ps);
                true
            }
            (
                ElementKind::RawHtml { content, style },
                ElementKind::RawHtml {
                    content: pc,
                    style: ps,
                },
            ) => {
                content.merge(pc);
                style.merge(ps);
                true
            }
            _ => false,
        }
    }
}

/// Closed set of element kinds and their kind-specific payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ElementKind {
    Heading {
        #[serde(default)]
        content: TextContent,
        #[serde(default)]
        style: TextStyle,
    },

    Paragraph {
        #[serde(default)]
        content: TextContent,
        #[serde(default)]
        style: TextStyle,
    },

    Image {
        #[serde(default)]
        content: ImageContent,
        #[serde(default)]
        style: ImageStyle,
    },

    Button {
        #[serde(default)]
        content: ButtonContent,
        #[serde(default)]
        style: ButtonStyle,
    },

    Divider {
        #[serde(default)]
        style: DividerStyle,
    },

    Spacer {
        #[serde(default)]
        style: SpacerStyle,
    },

    RawHtml {
        #[serde(default)]
        content: RawHtmlContent,
        #[serde(default)]
        style: RawHtmlStyle,
    },
}

impl ElementKind {
    /// Build the empty payload for a toolbox kind string.
    ///
    /// This is the drag-source contract: the external toolbox hands over a
    /// kind name, nothing else. Unknown names return `None`.
    pub fn from_kind_name(kind: &str) -> Option<Self> {
        match kind {
            "heading" => Some(ElementKind::Heading {
                content: TextContent::default(),
                style: TextStyle::default(),
            }),
            "paragraph" => Some(ElementKind::Paragraph {
                content: TextContent::default(),
                style: TextStyle::default(),
            }),
            "image" => Some(ElementKind::Image {
                content: ImageContent::default(),
                style: ImageStyle::default(),
            }),
            "button" => Some(ElementKind::Button {
                content: ButtonContent::default(),
                style: ButtonStyle::default(),
            }),
            "divider" => Some(ElementKind::Divider {
                style: DividerStyle::default(),
            }),
            "spacer" => Some(ElementKind::Spacer {
                style: SpacerStyle::default(),
            }),
            "rawHtml" => Some(ElementKind::RawHtml {
                content: RawHtmlContent::default(),
                style: RawHtmlStyle::default(),
            }),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ElementKind::Heading { .. } => "heading",
            ElementKind::Paragraph { .. } => "paragraph",
            ElementKind::Image { .. } => "image",
            ElementKind::Button { .. } => "button",
            ElementKind::Divider { .. } => "divider",
            ElementKind::Spacer { .. } => "spacer",
            ElementKind::RawHtml { .. } => "rawHtml",
        }
    }
}

/// Text payload for heading/paragraph elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TextContent {
    pub fn merge(&mut self, patch: &TextContent) {
        if patch.text.is_some() {
            self.text = patch.text.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

impl TextStyle {
    pub fn merge(&mut self, patch: &TextStyle) {
        if patch.font_size.is_some() {
            self.font_size = patch.font_size;
        }
        if patch.color.is_some() {
            self.color = patch.color.clone();
        }
        if patch.font_weight.is_some() {
            self.font_weight = patch.font_weight;
        }
        if patch.align.is_some() {
            self.align = patch.align;
        }
        if patch.line_height.is_some() {
            self.line_height = patch.line_height;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageContent {
    pub fn merge(&mut self, patch: &ImageContent) {
        if patch.src.is_some() {
            self.src = patch.src.clone();
        }
        if patch.alt.is_some() {
            self.alt = patch.alt.clone();
        }
        if patch.caption.is_some() {
            self.caption = patch.caption.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyle {
    /// CSS width (e.g. "100%", "320px").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl ImageStyle {
    pub fn merge(&mut self, patch: &ImageStyle) {
        if patch.width.is_some() {
            self.width = patch.width.clone();
        }
        if patch.rounded.is_some() {
            self.rounded = patch.rounded;
        }
        if patch.align.is_some() {
            self.align = patch.align;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ButtonContent {
    pub fn merge(&mut self, patch: &ButtonContent) {
        if patch.label.is_some() {
            self.label = patch.label.clone();
        }
        if patch.href.is_some() {
            self.href = patch.href.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl ButtonStyle {
    pub fn merge(&mut self, patch: &ButtonStyle) {
        if patch.background.is_some() {
            self.background = patch.background.clone();
        }
        if patch.color.is_some() {
            self.color = patch.color.clone();
        }
        if patch.padding_y.is_some() {
            self.padding_y = patch.padding_y;
        }
        if patch.padding_x.is_some() {
            self.padding_x = patch.padding_x;
        }
        if patch.border_radius.is_some() {
            self.border_radius = patch.border_radius;
        }
        if patch.align.is_some() {
            self.align = patch.align;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<u32>,
    /// Border style keyword (solid, dashed, dotted).
    #[serde(
        rename = "style",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub line_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// CSS width (e.g. "100%", "80px").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

impl DividerStyle {
    pub fn merge(&mut self, patch: &DividerStyle) {
        if patch.thickness.is_some() {
            self.thickness = patch.thickness;
        }
        if patch.line_style.is_some() {
            self.line_style = patch.line_style.clone();
        }
        if patch.color.is_some() {
            self.color = patch.color.clone();
        }
        if patch.width.is_some() {
            self.width = patch.width.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpacerStyle {
    /// Fixed pixel height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl SpacerStyle {
    pub fn merge(&mut self, patch: &SpacerStyle) {
        if patch.height.is_some() {
            self.height = patch.height;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawHtmlContent {
    /// Emitted verbatim at generation time: no escaping, no sanitization.
    /// A deliberate trust boundary; sanitize above the core if the authoring
    /// environment is untrusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl RawHtmlContent {
    pub fn merge(&mut self, patch: &RawHtmlContent) {
        if patch.html.is_some() {
            self.html = patch.html.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawHtmlStyle {
    /// Container height in pixels. Unset means auto.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl RawHtmlStyle {
    pub fn merge(&mut self, patch: &RawHtmlStyle) {
        if patch.height.is_some() {
            self.height = patch.height;
        }
    }
}
