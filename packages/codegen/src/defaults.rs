//! Documented generation-time defaults.
//!
//! The document tree never bakes these in: unset fields stay `None` until
//! render time, where exactly one constant below is substituted per field
//! per kind.

/// Outer wrapper font stack.
pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";
/// Page background behind the container.
pub const BODY_BACKGROUND: &str = "#F4F4F4";
/// Container width.
pub const CONTAINER_WIDTH: &str = "100%";
/// Container max-width; the responsive constraint email clients respect.
pub const CONTAINER_MAX_WIDTH: &str = "600px";

/// Section card background.
pub const SECTION_BACKGROUND: &str = "#FFFFFF";
/// Padding on the section's single cell.
pub const SECTION_PADDING: &str = "24px";

pub const HEADING_TEXT: &str = "Your heading";
pub const HEADING_FONT_SIZE: u32 = 24;
pub const HEADING_COLOR: &str = "#333333";
pub const HEADING_FONT_WEIGHT: u32 = 600;
pub const HEADING_LINE_HEIGHT: f32 = 1.3;

pub const PARAGRAPH_TEXT: &str = "Your paragraph text";
pub const PARAGRAPH_FONT_SIZE: u32 = 16;
pub const PARAGRAPH_COLOR: &str = "#666666";
pub const PARAGRAPH_LINE_HEIGHT: f32 = 1.5;

/// Substituted whenever an image has no (or an empty) `src`. An empty `src`
/// must never reach the output: several clients render it as a broken-image
/// glyph, and some resolve it against the page origin as a tracking beacon.
pub const PLACEHOLDER_IMAGE_SRC: &str = "https://placehold.co/600x300";
pub const IMAGE_WIDTH: &str = "100%";
pub const IMAGE_BORDER_RADIUS: u32 = 8;
pub const IMAGE_CAPTION_FONT_SIZE: u32 = 13;
pub const IMAGE_CAPTION_COLOR: &str = "#999999";

pub const BUTTON_LABEL: &str = "Click here";
pub const BUTTON_HREF: &str = "#";
pub const BUTTON_BACKGROUND: &str = "#4F46E5";
pub const BUTTON_COLOR: &str = "#FFFFFF";
pub const BUTTON_PADDING_Y: u32 = 10;
pub const BUTTON_PADDING_X: u32 = 20;
pub const BUTTON_BORDER_RADIUS: u32 = 4;

pub const DIVIDER_THICKNESS: u32 = 1;
pub const DIVIDER_STYLE: &str = "solid";
pub const DIVIDER_COLOR: &str = "#dddddd";
pub const DIVIDER_WIDTH: &str = "100%";

pub const SPACER_HEIGHT: u32 = 30;
