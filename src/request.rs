//! The generation request.

use crate::error::{Error, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Everything needed to assemble one book. Immutable once constructed;
/// every field is required.
///
/// `length` stays a free-form label here; the planner interprets it by
/// substring match (see [`crate::planner::Length`]), so UI strings like
/// "Short (~5 pages)" pass through unchanged. Free-text fields are *not*
/// escaped at this layer; the composers escape them at the point of
/// embedding.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct GenerationRequest {
    pub book_title: String,
    pub subtitle: String,
    pub author_name: String,
    /// Theme color as a CSS color value, e.g. a hex string.
    pub theme_color: String,
    /// Background color for content pages.
    pub page_background_color: String,
    /// Free-form tone descriptor, e.g. "Conversational".
    pub writing_style: String,
    /// Free-form illustration style descriptor, e.g. "Watercolor".
    pub image_style: String,
    /// Length category label, e.g. "Short", "Medium (~10 pages)".
    pub length: String,
    pub topic_description: String,
}

impl GenerationRequest {
    /// Reject requests whose identifying or style fields are blank. Color
    /// and length fields are deliberately left permissive: the planner and
    /// composers degrade gracefully on anything they don't recognise.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("book_title", &self.book_title),
            ("author_name", &self.author_name),
            ("topic_description", &self.topic_description),
            ("writing_style", &self.writing_style),
            ("image_style", &self.image_style),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidRequest(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

/// A ready-made request for tests across the crate.
#[cfg(test)]
pub(crate) fn sample() -> GenerationRequest {
    GenerationRequestBuilder::default()
        .book_title("Atoms")
        .subtitle("A Short Introduction")
        .author_name("R. Feynman")
        .theme_color("#1e3a8a")
        .page_background_color("#ffffff")
        .writing_style("Conversational")
        .image_style("Minimalist")
        .length("Short")
        .topic_description("physics")
        .build()
        .expect("can build request")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_build_a_request_with_the_builder() {
        let req = sample();
        assert_eq!(req.book_title, "Atoms");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn can_deserialize_a_request_from_toml() {
        let toml_str = r##"
            book_title = "Atoms"
            subtitle = "A Short Introduction"
            author_name = "R. Feynman"
            theme_color = "#1e3a8a"
            page_background_color = "#ffffff"
            writing_style = "Conversational"
            image_style = "Minimalist"
            length = "Short"
            topic_description = "physics"
        "##;
        let req: GenerationRequest = toml::from_str(toml_str).expect("can deserialize request");
        assert_eq!(req, sample());
    }

    #[test]
    fn missing_fields_fail_deserialization() {
        let toml_str = r#"book_title = "Atoms""#;
        assert!(toml::from_str::<GenerationRequest>(toml_str).is_err());
    }

    #[test]
    fn blank_titles_are_rejected() {
        let mut req = sample();
        req.book_title = "   ".to_string();
        assert!(matches!(req.validate(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn blank_styles_are_rejected() {
        // a blank writing style would read "An exploration in  tone"
        let mut req = sample();
        req.writing_style = String::new();
        assert!(matches!(req.validate(), Err(Error::InvalidRequest(_))));

        let mut req = sample();
        req.image_style = "  ".to_string();
        assert!(matches!(req.validate(), Err(Error::InvalidRequest(_))));
    }
}
