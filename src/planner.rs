//! Page planning: sizing content from a length category.
//!
//! Maps the request's free-form length label onto a fixed page count and
//! provides the rotating sequence of section headings used by the content
//! composer. Unknown labels degrade to the shortest plan rather than
//! failing the request.

/// The fixed headings assigned to content pages, in order. Repeats
/// cyclically when the page count exceeds the list length.
pub const SECTION_HEADINGS: [&str; 10] = [
    "Introduction",
    "Foundations",
    "Key Concepts",
    "Applications",
    "Case Study",
    "Techniques",
    "Best Practices",
    "Challenges",
    "Future Outlook",
    "Conclusion",
];

/// A length category recognised by the planner.
///
/// Parsing is deliberately permissive: the label only has to *contain* one
/// of the category names, so UI strings like "Short (~5 pages)" still map
/// correctly, and anything unrecognised falls back to [`Length::Short`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    /// Parse a free-form length label by substring match, defaulting to
    /// `Short` for anything unrecognised.
    pub fn parse(label: &str) -> Length {
        if label.contains("Short") {
            Length::Short
        } else if label.contains("Medium") {
            Length::Medium
        } else if label.contains("Long") {
            Length::Long
        } else {
            Length::Short
        }
    }

    /// The number of content pages planned for this category.
    pub fn page_count(self) -> usize {
        match self {
            Length::Short => 5,
            Length::Medium => 10,
            Length::Long => 20,
        }
    }
}

/// The heading for the zero-based page index, cycling through
/// [`SECTION_HEADINGS`].
pub fn heading_for_page(index: usize) -> &'static str {
    SECTION_HEADINGS[index % SECTION_HEADINGS.len()]
}
