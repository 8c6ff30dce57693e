//! Downloadable files built from a [`GenerationResult`].
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{Error, Result};
use crate::generation::GenerationResult;
use crate::markdown::ToMarkdown;
use crate::pptx::constants::content_type::PPTX_PACKAGE;

/// What to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    /// The landing page HTML
    LandingPage,
    /// The pitch deck as Markdown
    PitchDeck,
    /// The rendered pitch deck document
    PitchDeckPptx,
    /// The marketing campaign as JSON
    Marketing,
    /// The whole result as JSON
    All,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::LandingPage => "landing-page",
            ExportKind::PitchDeck => "pitch-deck",
            ExportKind::PitchDeckPptx => "pitch-deck-pptx",
            ExportKind::Marketing => "marketing",
            ExportKind::All => "all",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl ExportFile {
    fn new(filename: String, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            filename,
            content_type,
            body: body.into(),
        }
    }

    /// Value for the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Build the file for `kind`.
///
/// Returns [`Error::NoContent`] when the requested part is missing or empty.
pub fn export(kind: ExportKind, result: &GenerationResult) -> Result<ExportFile> {
    let id = &result.project_id;
    let missing = || Error::NoContent(format!("{} for project {}", kind, id));

    match kind {
        ExportKind::LandingPage => {
            let html = result
                .landing_page
                .as_ref()
                .map(|page| page.html_code.as_str())
                .filter(|html| !html.trim().is_empty())
                .ok_or_else(missing)?;
            Ok(ExportFile::new(
                format!("{}-landing-page.html", id),
                "text/html",
                html,
            ))
        },
        ExportKind::PitchDeck => {
            let deck = result.pitch_deck.as_ref().ok_or_else(missing)?;
            Ok(ExportFile::new(
                format!("{}-pitch-deck.md", id),
                "text/markdown",
                deck.to_markdown()?,
            ))
        },
        ExportKind::PitchDeckPptx => {
            let deck = result
                .pitch_deck
                .as_ref()
                .filter(|deck| deck.has_artifact())
                .ok_or_else(missing)?;
            Ok(ExportFile::new(
                format!("{}-pitch-deck.pptx", id),
                PPTX_PACKAGE,
                deck.pptx_bytes()?,
            ))
        },
        ExportKind::Marketing => {
            let marketing = result.marketing.as_ref().ok_or_else(missing)?;
            Ok(ExportFile::new(
                format!("{}-marketing.json", id),
                "application/json",
                serde_json::to_string_pretty(marketing)?,
            ))
        },
        ExportKind::All => Ok(ExportFile::new(
            format!("{}-complete.json", id),
            "application/json",
            serde_json::to_string_pretty(result)?,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{PitchDeck, PresentationMetadata, SlideContent, render_pitch_deck};
    use crate::generation::LandingPage;
    use chrono::Utc;
    use serde_json::json;

    fn landing_page(html: &str) -> LandingPage {
        serde_json::from_value(json!({
            "hero": {"headline": "h", "subheadline": "s", "cta": "c"},
            "features": [], "benefits": [], "howItWorks": [], "testimonials": [],
            "cta": {"headline": "h", "description": "d", "buttonText": "b"},
            "footer": {"links": []},
            "reactCode": "",
            "htmlCode": html
        }))
        .unwrap()
    }

    fn result() -> GenerationResult {
        let deck = PitchDeck {
            slides: vec![SlideContent::new(1, "TaskFlow").with_notes("Hi.")],
            metadata: PresentationMetadata {
                title: "TaskFlow".into(),
                subtitle: "Project management that works".into(),
                author: "TaskFlow Team".into(),
                date: "2026-10-18".into(),
            },
        };
        GenerationResult {
            project_id: "p1".into(),
            landing_page: Some(landing_page("<html></html>")),
            pitch_deck: Some(render_pitch_deck(deck, None)),
            marketing: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_landing_page_html() {
        let file = export(ExportKind::LandingPage, &result()).unwrap();
        assert_eq!(file.filename, "p1-landing-page.html");
        assert_eq!(file.content_type, "text/html");
        assert_eq!(file.body, b"<html></html>");
        assert_eq!(
            file.content_disposition(),
            "attachment; filename=\"p1-landing-page.html\""
        );
    }

    #[test]
    fn test_pitch_deck_markdown() {
        let file = export(ExportKind::PitchDeck, &result()).unwrap();
        assert_eq!(file.filename, "p1-pitch-deck.md");
        assert_eq!(file.content_type, "text/markdown");
        let text = String::from_utf8(file.body).unwrap();
        assert!(text.starts_with("# TaskFlow\n\n## Project management that works\n\n"));
        assert!(text.contains("## Slide 1: TaskFlow\n"));
    }

    #[test]
    fn test_pitch_deck_document() {
        let file = export(ExportKind::PitchDeckPptx, &result()).unwrap();
        assert_eq!(file.filename, "p1-pitch-deck.pptx");
        assert_eq!(file.content_type, PPTX_PACKAGE);
        assert!(file.body.starts_with(b"PK"));
    }

    #[test]
    fn test_missing_parts_are_no_content() {
        let mut result = result();
        assert!(matches!(
            export(ExportKind::Marketing, &result),
            Err(Error::NoContent(_))
        ));

        result.landing_page = Some(landing_page("  "));
        assert!(matches!(
            export(ExportKind::LandingPage, &result),
            Err(Error::NoContent(_))
        ));

        if let Some(deck) = result.pitch_deck.as_mut() {
            deck.pptx_base64.clear();
        }
        assert!(matches!(
            export(ExportKind::PitchDeckPptx, &result),
            Err(Error::NoContent(_))
        ));
        // the Markdown form does not need the artifact
        assert!(export(ExportKind::PitchDeck, &result).is_ok());
    }

    #[test]
    fn test_all_is_the_whole_result() {
        let file = export(ExportKind::All, &result()).unwrap();
        assert_eq!(file.filename, "p1-complete.json");
        let value: serde_json::Value = serde_json::from_slice(&file.body).unwrap();
        assert_eq!(value["projectId"], "p1");
        assert!(value["marketing"].is_null());
    }

    #[test]
    fn test_kind_names() {
        let kind: ExportKind = serde_json::from_str("\"pitch-deck-pptx\"").unwrap();
        assert_eq!(kind, ExportKind::PitchDeckPptx);
        assert_eq!(ExportKind::All.to_string(), "all");
    }
}
