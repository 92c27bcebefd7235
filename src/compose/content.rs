//! Content page composition.
//!
//! Produces the planned number of page blocks, each pairing a numbered
//! section heading, a themed illustration, and a bounded run of filler
//! paragraphs. An explicit break marker follows every page except the
//! last, so a document with N pages always carries exactly N-1 breaks.

use crate::document::{Document, PAGE_BREAK};
use crate::illustration;
use crate::planner::{heading_for_page, Length};
use crate::request::GenerationRequest;
use crate::text;

const PAGE_IMAGE_WIDTH: u32 = 1200;
const PAGE_IMAGE_HEIGHT: u32 = 720;

/// Word budget fed to the text synthesizer for each page.
const WORDS_PER_PAGE: usize = 250;

/// Paragraph wrap width in characters.
const PARAGRAPH_WIDTH: usize = 600;

/// Synthesized text beyond this many paragraphs is silently discarded;
/// this bounds the rendered height of a page.
const MAX_PARAGRAPHS_PER_PAGE: usize = 5;

/// Compose the content document for a request.
pub fn render(req: &GenerationRequest) -> Document {
    let pages = Length::parse(&req.length).page_count();
    let background = html_escape::encode_double_quoted_attribute(&req.page_background_color);

    let mut body = String::new();
    for i in 0..pages {
        let heading = heading_for_page(i);
        let passage = text::filler(&req.topic_description, &req.writing_style, WORDS_PER_PAGE);
        let paragraphs = text::split_into_paragraphs(&passage, PARAGRAPH_WIDTH);
        let image = illustration::synthesize(
            &format!("{heading} — {}", req.topic_description),
            &req.image_style,
            &req.theme_color,
            PAGE_IMAGE_WIDTH,
            PAGE_IMAGE_HEIGHT,
        );

        body.push_str(&format!(
            r#"<div class="page" style="background-color:{background};">"#
        ));
        body.push_str(&format!(
            "<h2>{}. {}</h2>",
            i + 1,
            html_escape::encode_text(heading)
        ));
        body.push_str(&format!(
            r#"<img class="page-img" alt="Illustration" src="{}" />"#,
            image.data_uri
        ));
        for paragraph in paragraphs.iter().take(MAX_PARAGRAPHS_PER_PAGE) {
            body.push_str(&format!("<p>{}</p>", html_escape::encode_text(paragraph)));
        }
        body.push_str("</div>");

        if i < pages - 1 {
            body.push_str(PAGE_BREAK);
        }
    }

    Document::from_body(body)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::request;

    #[test]
    fn short_requests_produce_five_pages_and_four_breaks() {
        let doc = render(&request::sample());
        assert_eq!(doc.page_count(), 5);
        assert_eq!(doc.break_count(), 4);
    }

    #[test]
    fn medium_requests_produce_ten_pages() {
        let mut req = request::sample();
        req.length = "Medium".to_string();
        let doc = render(&req);
        assert_eq!(doc.page_count(), 10);
        assert_eq!(doc.break_count(), 9);
    }

    #[test]
    fn headings_are_numbered_and_follow_the_planned_order() {
        let doc = render(&request::sample());
        let body = doc.body();
        for (i, heading) in [
            "Introduction",
            "Foundations",
            "Key Concepts",
            "Applications",
            "Case Study",
        ]
        .iter()
        .enumerate()
        {
            assert!(body.contains(&format!("<h2>{}. {heading}</h2>", i + 1)));
        }
        // order matches the heading sequence
        let intro = body.find("1. Introduction").expect("has introduction");
        let case_study = body.find("5. Case Study").expect("has case study");
        assert!(intro < case_study);
    }

    #[test]
    fn pages_are_bounded_to_five_paragraphs() {
        let doc = render(&request::sample());
        let first_page = doc
            .body()
            .split(PAGE_BREAK)
            .next()
            .expect("has a first page");
        assert!(first_page.matches("<p>").count() <= MAX_PARAGRAPHS_PER_PAGE);
    }

    #[test]
    fn pages_use_the_requested_background_color() {
        let doc = render(&request::sample());
        assert!(doc.body().contains("background-color:#ffffff"));
    }

    #[test]
    fn paragraphs_reference_topic_and_style() {
        let doc = render(&request::sample());
        assert!(doc.body().contains("physics"));
        assert!(doc.body().contains("conversational tone"));
    }
}
