/// Configuration options for Markdown conversion.
///
/// # Examples
///
/// ```rust
/// use launchkit::markdown::MarkdownOptions;
///
/// // Create with defaults
/// let options = MarkdownOptions::default();
/// assert!(options.include_speaker_notes);
///
/// // Or customize
/// let options = MarkdownOptions::new()
///     .with_speaker_notes(false)
///     .with_metadata(true);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MarkdownOptions {
    /// Whether to write a `**Speaker Notes:**` block for slides that have notes
    pub include_speaker_notes: bool,
    /// Whether to write the deck header (title, subtitle, author, date)
    pub include_metadata: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            include_speaker_notes: true,
            include_metadata: true,
        }
    }
}

impl MarkdownOptions {
    /// Create a new `MarkdownOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include speaker notes.
    #[inline]
    pub fn with_speaker_notes(mut self, include: bool) -> Self {
        self.include_speaker_notes = include;
        self
    }

    /// Set whether to include the deck header.
    #[inline]
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }
}
