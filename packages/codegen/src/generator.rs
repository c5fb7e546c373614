use mailsmith_model::{Document, Section};

use crate::context::{Context, GenerateOptions};
use crate::defaults;
use crate::elements::generate_element;

/// Generate deliverable HTML for a document.
///
/// Total: never fails, whatever fields the document leaves unset.
pub fn generate_html(document: &Document) -> String {
    generate_html_with_options(document, GenerateOptions::default())
}

pub fn generate_html_with_options(document: &Document, options: GenerateOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    generate_head(document, &mut ctx);
    generate_body(document, &mut ctx);

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn generate_head(document: &Document, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");

    // Preview text doubles as the inbox snippet in clients that read the
    // description meta.
    if !document.preview_text.is_empty() {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&document.preview_text)
        ));
    }

    ctx.add_line(&format!("<title>{}</title>", escape_html(&document.name)));

    // Body-level resets are the only <style> usage email clients can be
    // trusted with; everything else is inlined per element.
    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line("body { margin: 0; padding: 0; }");
    ctx.add_line("table { border-collapse: collapse; }");
    ctx.add_line("img { border: 0; max-width: 100%; }");
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn generate_body(document: &Document, ctx: &mut Context) {
    let global = &document.global_style;

    ctx.add_line(&format!(
        "<body style=\"margin:0;padding:0;background-color:{};font-family:{};\">",
        global
            .background
            .as_deref()
            .unwrap_or(defaults::BODY_BACKGROUND),
        global.font_family.as_deref().unwrap_or(defaults::FONT_FAMILY),
    ));
    ctx.indent();

    ctx.add_line(&format!(
        "<div class=\"container\" style=\"width:{};max-width:{};margin:0 auto;\">",
        global.width.as_deref().unwrap_or(defaults::CONTAINER_WIDTH),
        global
            .max_width
            .as_deref()
            .unwrap_or(defaults::CONTAINER_MAX_WIDTH),
    ));
    ctx.indent();

    for section in &document.sections {
        generate_section(section, ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");

    ctx.dedent();
    ctx.add_line("</body>");
}

// One table per section: layout via table/tr/td, background on the table,
// padding on its single cell.
fn generate_section(section: &Section, ctx: &mut Context) {
    let style = &section.style;

    let mut table_style = format!(
        "background-color:{};",
        style
            .background
            .as_deref()
            .unwrap_or(defaults::SECTION_BACKGROUND)
    );
    if let Some(width) = &style.width {
        table_style.push_str(&format!("width:{};", width));
    }
    if let Some(max_width) = &style.max_width {
        table_style.push_str(&format!("max-width:{};", max_width));
    }

    ctx.add_line(&format!(
        "<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" style=\"{}\">",
        table_style
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();

    let mut cell_style = format!(
        "padding:{};",
        style.padding.as_deref().unwrap_or(defaults::SECTION_PADDING)
    );
    if let Some(align) = style.align {
        cell_style.push_str(&format!("text-align:{};", align.as_css()));
    }

    ctx.add_line(&format!("<td style=\"{}\">", cell_style));
    ctx.indent();

    for element in &section.elements {
        generate_element(element, ctx);
    }

    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
