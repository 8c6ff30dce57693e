/// Core trait for Markdown conversion.
use super::config::MarkdownOptions;
use crate::common::Result;

/// Core trait for types that can be converted to Markdown.
///
/// Implemented for pitch decks (generated and rendered) and single slides.
///
/// # Examples
///
/// ```rust
/// use launchkit::deck::SlideContent;
/// use launchkit::markdown::ToMarkdown;
///
/// let slide = SlideContent::new(2, "Problem").with_content(["Too many tools"]);
/// let md = slide.to_markdown().unwrap();
/// assert!(md.starts_with("## Slide 2: Problem"));
/// ```
pub trait ToMarkdown {
    /// Convert this item to Markdown with default options.
    fn to_markdown(&self) -> Result<String> {
        self.to_markdown_with_options(&MarkdownOptions::default())
    }

    /// Convert this item to Markdown with custom options.
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String>;
}
