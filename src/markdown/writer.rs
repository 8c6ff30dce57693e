/// Low-level writer for Markdown generation.
use super::config::MarkdownOptions;
use crate::common::{Error, Result};
use crate::deck::{PresentationMetadata, SlideContent};

/// Buffered Markdown writer for pitch-deck output.
pub(crate) struct MarkdownWriter {
    /// The output buffer
    buffer: String,
    /// Current options
    options: MarkdownOptions,
}

impl MarkdownWriter {
    /// Create a new writer with the given options.
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            buffer: String::with_capacity(4096),
            options,
        }
    }

    /// Write the deck header followed by a rule.
    pub fn write_metadata(&mut self, metadata: &PresentationMetadata) -> Result<()> {
        self.write_fmt(format_args!("# {}\n\n", metadata.title))?;
        self.write_fmt(format_args!("## {}\n\n", metadata.subtitle))?;
        self.write_fmt(format_args!("**Author:** {}\n", metadata.author))?;
        self.write_fmt(format_args!("**Date:** {}\n\n", metadata.date))?;
        self.push_str("---\n\n");
        Ok(())
    }

    /// Write one slide section, terminated by a rule.
    ///
    /// The heading uses the slide's declared number, not its position.
    pub fn write_slide(&mut self, slide: &SlideContent) -> Result<()> {
        self.write_fmt(format_args!(
            "## Slide {}: {}\n\n",
            slide.slide_number, slide.title
        ))?;

        for point in &slide.content {
            self.write_fmt(format_args!("- {}\n", point))?;
        }

        if self.options.include_speaker_notes
            && let Some(notes) = slide.notes()
        {
            self.write_fmt(format_args!("\n**Speaker Notes:**\n{}\n", notes))?;
        }

        self.push_str("\n---\n\n");
        Ok(())
    }

    /// Get the final markdown output.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Append text to the buffer.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Write a formatted string to the buffer.
    pub fn write_fmt(&mut self, args: std::fmt::Arguments) -> Result<()> {
        use std::fmt::Write as FmtWrite;
        self.buffer
            .write_fmt(args)
            .map_err(|e| Error::Other(e.to_string()))
    }
}
