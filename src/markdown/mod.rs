/// Markdown conversion for pitch decks.
///
/// Produces the downloadable text form of a deck: a header with title,
/// subtitle, author and date, then one section per slide with its bullet
/// points and optional speaker notes.
///
/// # Quick Start
///
/// ```rust
/// use launchkit::deck::{PitchDeck, PresentationMetadata, SlideContent};
/// use launchkit::markdown::{MarkdownOptions, ToMarkdown};
///
/// let deck = PitchDeck {
///     slides: vec![SlideContent::new(1, "TaskFlow").with_notes("Smile.")],
///     metadata: PresentationMetadata {
///         title: "TaskFlow".into(),
///         ..Default::default()
///     },
/// };
///
/// let markdown = deck.to_markdown()?;
/// assert!(markdown.contains("**Speaker Notes:**\nSmile."));
///
/// let options = MarkdownOptions::new().with_speaker_notes(false);
/// let markdown = deck.to_markdown_with_options(&options)?;
/// assert!(!markdown.contains("Speaker Notes"));
/// # Ok::<(), launchkit::common::Error>(())
/// ```
mod config;
mod presentation;
mod traits;
mod writer;

pub use config::MarkdownOptions;
pub use traits::ToMarkdown;
