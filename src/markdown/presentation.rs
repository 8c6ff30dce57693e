/// ToMarkdown implementations for pitch decks.
use super::config::MarkdownOptions;
use super::traits::ToMarkdown;
use super::writer::MarkdownWriter;
use crate::common::Result;
use crate::deck::{PitchDeck, PitchDeckOutput, PresentationMetadata, SlideContent};

impl ToMarkdown for SlideContent {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        let mut writer = MarkdownWriter::new(*options);
        writer.write_slide(self)?;
        Ok(writer.finish())
    }
}

impl ToMarkdown for PitchDeck {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        deck_to_markdown(&self.metadata, &self.slides, options)
    }
}

impl ToMarkdown for PitchDeckOutput {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        deck_to_markdown(&self.metadata, &self.slides, options)
    }
}

fn deck_to_markdown(
    metadata: &PresentationMetadata,
    slides: &[SlideContent],
    options: &MarkdownOptions,
) -> Result<String> {
    let mut writer = MarkdownWriter::new(*options);

    if options.include_metadata {
        writer.write_metadata(metadata)?;
    }

    // Slides keep their input order
    for slide in slides {
        writer.write_slide(slide)?;
    }

    Ok(writer.finish())
}
