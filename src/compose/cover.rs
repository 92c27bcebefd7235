//! Cover page composition.
//!
//! The cover is always exactly one page: a full-bleed panel in the theme
//! color holding a high-resolution illustration, the title, the subtitle,
//! and the author byline, all centered.

use crate::document::Document;
use crate::illustration;
use crate::request::GenerationRequest;

/// Cover illustrations render at print resolution.
const COVER_IMAGE_WIDTH: u32 = 2480;
const COVER_IMAGE_HEIGHT: u32 = 1748;

/// Compose the cover document for a request.
pub fn render(req: &GenerationRequest) -> Document {
    let image = illustration::synthesize(
        &format!("Book cover about {}", req.topic_description),
        &req.image_style,
        &req.theme_color,
        COVER_IMAGE_WIDTH,
        COVER_IMAGE_HEIGHT,
    );

    let theme = html_escape::encode_double_quoted_attribute(&req.theme_color);
    let body = format!(
        concat!(
            r#"<div class="page" style="background-color:{theme}; color:white;">"#,
            r#"<div class="center">"#,
            r#"<img alt="Cover" class="page-img" src="{src}" />"#,
            r#"<div class="cover-title">{title}</div>"#,
            r#"<div class="cover-subtitle">{subtitle}</div>"#,
            r#"<div class="author">By {author}</div>"#,
            "</div>",
            "</div>",
        ),
        theme = theme,
        src = image.data_uri,
        title = html_escape::encode_text(&req.book_title),
        subtitle = html_escape::encode_text(&req.subtitle),
        author = html_escape::encode_text(&req.author_name),
    );

    Document::from_body(body)
}
