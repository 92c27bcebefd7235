//! The shared stylesheet.
//!
//! Every composed document embeds this exact block in its head, and the
//! assembler re-wraps merged bodies with it, so the stylesheet is the
//! single source of visual consistency. Page geometry is fixed at A4 with
//! 20mm margins; `.page` sizes a full page and `.break` forces the page
//! break the renderer honours between blocks.

/// The `<style>` block shared verbatim by the cover composer, the content
/// composer, and the assembler.
pub const STYLESHEET: &str = concat!(
    "<style>",
    "@page { size: A4; margin: 20mm; }",
    "body { font-family: Inter, Arial, sans-serif; color: #0f172a; }",
    ".page { width: 210mm; height: 297mm; box-sizing: border-box; padding: 20mm; ",
    "display: flex; flex-direction: column; justify-content: flex-start; }",
    "h1 { font-size: 32px; font-weight: 700; margin: 0 0 12px; }",
    "h2 { font-size: 26px; font-weight: 600; margin: 0 0 10px; }",
    "p { font-size: 18px; line-height: 1.6; margin: 10px 0; }",
    ".center { display:flex; flex-direction:column; align-items:center; ",
    "justify-content:center; text-align:center; height:100%; }",
    ".cover-title { font-size: 42px; font-weight: 800; margin-bottom: 8px; }",
    ".cover-subtitle { font-size: 22px; font-weight: 600; opacity: 0.95; }",
    ".author { margin-top: 24px; font-size: 18px; opacity: 0.9; }",
    "img { max-width: 100%; height: auto; border-radius: 8px; }",
    ".page-img { margin: 12px 0 6px; }",
    ".break { page-break-after: always; }",
    "</style>",
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stylesheet_declares_page_geometry_and_break_rule() {
        assert!(STYLESHEET.contains("size: A4; margin: 20mm"));
        assert!(STYLESHEET.contains(".break { page-break-after: always; }"));
        assert!(STYLESHEET.starts_with("<style>"));
        assert!(STYLESHEET.ends_with("</style>"));
    }
}
