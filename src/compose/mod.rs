//! Document composition.
//!
//! Each composer turns a [`crate::request::GenerationRequest`] into one
//! self-contained [`crate::document::Document`]: the cover produces a
//! single page block, the content composer a planned sequence of page
//! blocks separated by explicit break markers. Both embed their
//! illustrations inline and rely on the shared stylesheet for layout.

pub mod content;
pub mod cover;
