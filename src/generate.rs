//! The generation entrypoint.
//!
//! Runs the whole pipeline for one request: validate, compose the cover
//! and content documents, merge them, and verify the merged result still
//! contains page blocks. All three documents are returned so callers can
//! offer the cover and content independently of the full book.

use crate::compose;
use crate::document::{self, Document};
use crate::error::Result;
use crate::request::GenerationRequest;

/// The three documents produced for one request.
#[derive(Debug, Clone)]
pub struct GeneratedBook {
    pub cover: Document,
    pub content: Document,
    pub full: Document,
}

/// Assemble a book from a generation request.
///
/// Fails with [`crate::error::Error::StructuralIntegrity`] if the merged
/// document carries no page blocks, and with
/// [`crate::error::Error::InvalidRequest`] if the request is blank where
/// it must not be. Never returns partial results.
pub fn generate(req: &GenerationRequest) -> Result<GeneratedBook> {
    req.validate()?;

    log::debug!(
        "generating \"{}\" ({} content pages)",
        req.book_title,
        crate::planner::Length::parse(&req.length).page_count()
    );

    let cover = compose::cover::render(req);
    let content = compose::content::render(req);
    let full = document::assemble_checked(&cover, &content)?;

    Ok(GeneratedBook {
        cover,
        content,
        full,
    })
}
