//! Per-kind rendering rules.
//!
//! Each element kind has one dedicated render function keyed off the kind
//! tag, so adding a kind is a single localized extension. Every optional
//! field is defaulted here and only here.

use mailsmith_model::{
    Align, ButtonContent, ButtonStyle, DividerStyle, Element, ElementKind, ImageContent,
    ImageStyle, RawHtmlContent, RawHtmlStyle, SpacerStyle, TextContent, TextStyle,
};

use crate::context::Context;
use crate::defaults;
use crate::generator::escape_html;

pub(crate) fn generate_element(element: &Element, ctx: &mut Context) {
    match &element.kind {
        ElementKind::Heading { content, style } => generate_heading(content, style, ctx),
        ElementKind::Paragraph { content, style } => generate_paragraph(content, style, ctx),
        ElementKind::Image { content, style } => generate_image(content, style, ctx),
        ElementKind::Button { content, style } => generate_button(content, style, ctx),
        ElementKind::Divider { style } => generate_divider(style, ctx),
        ElementKind::Spacer { style } => generate_spacer(style, ctx),
        ElementKind::RawHtml { content, style } => generate_raw_html(content, style, ctx),
    }
}

fn generate_heading(content: &TextContent, style: &TextStyle, ctx: &mut Context) {
    let text = content.text.as_deref().unwrap_or(defaults::HEADING_TEXT);

    ctx.add_line(&format!(
        "<h1 style=\"margin:0;font-size:{}px;color:{};font-weight:{};text-align:{};line-height:{};\">{}</h1>",
        style.font_size.unwrap_or(defaults::HEADING_FONT_SIZE),
        style.color.as_deref().unwrap_or(defaults::HEADING_COLOR),
        style.font_weight.unwrap_or(defaults::HEADING_FONT_WEIGHT),
        style.align.unwrap_or(Align::Left).as_css(),
        style.line_height.unwrap_or(defaults::HEADING_LINE_HEIGHT),
        escape_html(text),
    ));
}

fn generate_paragraph(content: &TextContent, style: &TextStyle, ctx: &mut Context) {
    let text = content.text.as_deref().unwrap_or(defaults::PARAGRAPH_TEXT);

    ctx.add_line(&format!(
        "<p style=\"margin:0;font-size:{}px;color:{};text-align:{};line-height:{};\">{}</p>",
        style.font_size.unwrap_or(defaults::PARAGRAPH_FONT_SIZE),
        style.color.as_deref().unwrap_or(defaults::PARAGRAPH_COLOR),
        style.align.unwrap_or(Align::Left).as_css(),
        style.line_height.unwrap_or(defaults::PARAGRAPH_LINE_HEIGHT),
        escape_html(text),
    ));
}

fn generate_image(content: &ImageContent, style: &ImageStyle, ctx: &mut Context) {
    // Never emit an empty src.
    let src = content
        .src
        .as_deref()
        .filter(|src| !src.is_empty())
        .unwrap_or(defaults::PLACEHOLDER_IMAGE_SRC);
    let alt = content.alt.as_deref().unwrap_or("");

    ctx.add_line(&format!(
        "<div style=\"text-align:{};\">",
        style.align.unwrap_or(Align::Center).as_css()
    ));
    ctx.indent();

    let mut img_style = format!(
        "display:inline-block;width:{};max-width:100%;",
        style.width.as_deref().unwrap_or(defaults::IMAGE_WIDTH)
    );
    if style.rounded.unwrap_or(false) {
        img_style.push_str(&format!(
            "border-radius:{}px;",
            defaults::IMAGE_BORDER_RADIUS
        ));
    }

    ctx.add_line(&format!(
        "<img src=\"{}\" alt=\"{}\" style=\"{}\">",
        escape_html(src),
        escape_html(alt),
        img_style
    ));

    if let Some(caption) = content.caption.as_deref().filter(|c| !c.is_empty()) {
        ctx.add_line(&format!(
            "<p style=\"margin:8px 0 0 0;font-size:{}px;color:{};\">{}</p>",
            defaults::IMAGE_CAPTION_FONT_SIZE,
            defaults::IMAGE_CAPTION_COLOR,
            escape_html(caption),
        ));
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

fn generate_button(content: &ButtonContent, style: &ButtonStyle, ctx: &mut Context) {
    let label = content.label.as_deref().unwrap_or(defaults::BUTTON_LABEL);
    let href = content.href.as_deref().unwrap_or(defaults::BUTTON_HREF);

    ctx.add_line(&format!(
        "<div style=\"text-align:{};\">",
        style.align.unwrap_or(Align::Center).as_css()
    ));
    ctx.indent();

    ctx.add_line(&format!(
        "<a href=\"{}\" style=\"display:inline-block;background-color:{};color:{};padding:{}px {}px;border-radius:{}px;text-decoration:none;\">{}</a>",
        escape_html(href),
        style
            .background
            .as_deref()
            .unwrap_or(defaults::BUTTON_BACKGROUND),
        style.color.as_deref().unwrap_or(defaults::BUTTON_COLOR),
        style.padding_y.unwrap_or(defaults::BUTTON_PADDING_Y),
        style.padding_x.unwrap_or(defaults::BUTTON_PADDING_X),
        style
            .border_radius
            .unwrap_or(defaults::BUTTON_BORDER_RADIUS),
        escape_html(label),
    ));

    ctx.dedent();
    ctx.add_line("</div>");
}

fn generate_divider(style: &DividerStyle, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<hr style=\"border:none;border-top:{}px {} {};width:{};margin:16px 0;\">",
        style.thickness.unwrap_or(defaults::DIVIDER_THICKNESS),
        style.line_style.as_deref().unwrap_or(defaults::DIVIDER_STYLE),
        style.color.as_deref().unwrap_or(defaults::DIVIDER_COLOR),
        style.width.as_deref().unwrap_or(defaults::DIVIDER_WIDTH),
    ));
}

fn generate_spacer(style: &SpacerStyle, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div style=\"height:{}px;\"></div>",
        style.height.unwrap_or(defaults::SPACER_HEIGHT)
    ));
}

// Verbatim emission is the feature: no escaping, no sanitization. Trust is
// the authoring layer's problem.
fn generate_raw_html(content: &RawHtmlContent, style: &RawHtmlStyle, ctx: &mut Context) {
    match style.height {
        Some(height) => ctx.add_line(&format!("<div style=\"height:{}px;\">", height)),
        None => ctx.add_line("<div>"),
    }
    ctx.indent();

    if let Some(html) = &content.html {
        ctx.add_line(html);
    }

    ctx.dedent();
    ctx.add_line("</div>");
}
