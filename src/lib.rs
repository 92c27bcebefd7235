//! # bookforge
//!
//! Assembles a multi-page, illustrated e-book from a structured
//! description. The pipeline stages are:
//!
//! 1. **Plan**: map the requested length category onto a page count and a
//!    rotating sequence of section headings ([`planner`])
//! 2. **Synthesize**: produce deterministic placeholder illustrations
//!    ([`illustration`]) and filler body text ([`text`])
//! 3. **Compose**: build the cover and content documents as markup
//!    ([`compose`]), sharing one stylesheet ([`style`])
//! 4. **Assemble**: merge cover and content into a single printable
//!    document with a page break between them ([`document`])
//! 5. **Render**: hand the merged markup to an external collaborator
//!    that produces the paginated PDF ([`render`])
//!
//! The pipeline is purely functional over its inputs: nothing is cached,
//! persisted, or shared between requests, so concurrent invocations are
//! safe by construction. Illustration synthesis is total; its internal
//! retry/fallback loop guarantees a usable image even when the drawing
//! backend fails.

pub mod compose;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod generate;
pub mod illustration;
pub mod logger;
pub mod planner;
pub mod render;
pub mod request;
pub mod style;
pub mod text;

pub use document::{assemble, assemble_checked, Document, PAGE_BREAK, PAGE_MARKER};
pub use error::{Error, Result};
pub use generate::{generate, GeneratedBook};
pub use illustration::{synthesize, Illustration, Synthesis};
pub use planner::Length;
pub use request::{GenerationRequest, GenerationRequestBuilder};
