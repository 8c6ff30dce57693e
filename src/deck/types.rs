//! Slide-content records and deck metadata.
//!
//! These are the generic, rendering-target independent structures produced by
//! the pitch-deck content stream. They are read-only input to the layout
//! engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout template of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideLayout {
    /// Centered headline, accent bar, subtitle and author/date footer
    Title,
    /// One marker + text row per entry
    Bullets,
    /// Entries split into two columns around a divider
    TwoColumn,
    /// Image placeholder on the left, entries on the right
    ImageText,
    /// Chart placeholder with a metric strip beneath
    Chart,
}

impl SlideLayout {
    /// All layouts, in declaration order.
    pub const ALL: [SlideLayout; 5] = [
        SlideLayout::Title,
        SlideLayout::Bullets,
        SlideLayout::TwoColumn,
        SlideLayout::ImageText,
        SlideLayout::Chart,
    ];

    /// The wire name of the layout (`"two-column"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Bullets => "bullets",
            Self::TwoColumn => "two-column",
            Self::ImageText => "image-text",
            Self::Chart => "chart",
        }
    }

    /// Parse a layout name.
    ///
    /// Matching ignores case, surrounding whitespace and the separator style
    /// (`two-column`, `two_column` and `Two Column` are the same layout).
    pub fn parse(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "title" => Some(Self::Title),
            "bullets" | "bullet" => Some(Self::Bullets),
            "two-column" | "two-columns" => Some(Self::TwoColumn),
            "image-text" => Some(Self::ImageText),
            "chart" => Some(Self::Chart),
            _ => None,
        }
    }
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slide of a pitch deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    /// Position declared by the generator (1 = title slide)
    pub slide_number: u32,
    /// Slide headline
    pub title: String,
    /// Bullet/point entries; cardinality depends on the layout
    pub content: Vec<String>,
    /// Presenter notes, embedded as the slide's notes page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
    /// Requested layout name as generated; see [`SlideContent::layout`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl SlideContent {
    /// Create a slide with no entries, notes or layout.
    pub fn new(slide_number: u32, title: impl Into<String>) -> Self {
        Self {
            slide_number,
            title: title.into(),
            content: Vec::new(),
            speaker_notes: None,
            layout: None,
        }
    }

    /// Builder method: set the layout.
    pub fn with_layout(mut self, layout: SlideLayout) -> Self {
        self.layout = Some(layout.as_str().to_string());
        self
    }

    /// Builder method: set the entries.
    pub fn with_content<I, S>(mut self, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = content.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set speaker notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = Some(notes.into());
        self
    }

    /// The layout to render.
    ///
    /// Unknown or missing layout names render as [`SlideLayout::Bullets`].
    pub fn layout(&self) -> SlideLayout {
        self.layout
            .as_deref()
            .and_then(SlideLayout::parse)
            .unwrap_or(SlideLayout::Bullets)
    }

    /// Speaker notes, if present and not blank.
    pub fn notes(&self) -> Option<&str> {
        self.speaker_notes
            .as_deref()
            .filter(|notes| !notes.trim().is_empty())
    }
}

/// Document-level information of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationMetadata {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
}

impl PresentationMetadata {
    /// The creation time recorded in the package properties.
    ///
    /// Accepts a plain ISO date (midnight UTC) or a full RFC 3339 timestamp.
    /// Returns `None` when the date cannot be parsed.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let date = self.date.trim();
        if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
        DateTime::parse_from_rfc3339(date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// A generated pitch deck: ordered slides plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchDeck {
    pub slides: Vec<SlideContent>,
    pub metadata: PresentationMetadata,
}
