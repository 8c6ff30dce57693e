//! Test data shared by the generation and server tests.
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};

use super::client::{ChatMessage, CompletionClient, StreamError};
use super::input::{AppInput, FundingStage};
use super::prompt;
use super::schema::ContentKind;

pub(crate) fn taskflow() -> AppInput {
    AppInput {
        app_name: "TaskFlow".into(),
        tagline: "Project management that works".into(),
        target_audience: "Small businesses".into(),
        problem_solved: "Complex project management".into(),
        key_features: vec![
            "Simple boards".into(),
            "Team collaboration".into(),
            "Smart tracking".into(),
        ],
        funding_stage: Some(FundingStage::Seed),
        ..Default::default()
    }
}

pub(crate) fn landing_page_json() -> Value {
    json!({
        "hero": {"headline": "Ship projects, not spreadsheets", "subheadline": "Boards that stay simple", "cta": "Start free"},
        "features": [{"title": "Simple boards", "description": "Drag and drop.", "icon": "Zap"}],
        "benefits": [{"title": "Less overhead", "description": "Fewer meetings."}],
        "howItWorks": [{"step": 1, "title": "Sign up", "description": "One minute."}],
        "testimonials": [{"name": "Ana", "role": "Founder", "content": "Great.", "avatar": "A"}],
        "cta": {"headline": "Try it", "description": "Free for 14 days", "buttonText": "Get started"},
        "footer": {"links": [{"category": "Product", "items": ["Pricing"]}]},
        "reactCode": "export default function Page() { return null }",
        "htmlCode": "<!DOCTYPE html><html><body>TaskFlow</body></html>"
    })
}

pub(crate) fn pitch_deck_json() -> Value {
    json!({
        "slides": [
            {"slideNumber": 1, "title": "TaskFlow", "content": ["Project management that works"], "speakerNotes": "Hello investors.", "layout": "title"},
            {"slideNumber": 2, "title": "Problem", "content": ["Too many tools", "No visibility"], "speakerNotes": "Pain.", "layout": "bullets"},
            {"slideNumber": 3, "title": "Traction", "content": ["1,000 teams", "$20k MRR"], "speakerNotes": "Growth.", "layout": "chart"}
        ],
        "metadata": {"title": "TaskFlow", "subtitle": "Project management that works", "author": "TaskFlow Team", "date": "2026-10-18"}
    })
}

pub(crate) fn marketing_json() -> Value {
    let platform = |name: &str| {
        json!({"platform": name, "posts": [{"content": "Launch!", "hashtags": ["#launch"]}]})
    };
    json!({
        "instagram": platform("Instagram"),
        "twitter": platform("Twitter"),
        "facebook": platform("Facebook"),
        "linkedin": platform("LinkedIn"),
        "googleAds": [{"headline1": "a", "headline2": "b", "headline3": "c", "description1": "d", "description2": "e"}],
        "emailTemplate": {"subject": "We launched", "preheader": "Finally", "body": "<p>Hi</p>"}
    })
}

/// Replies by the system prompt it receives, wrapped in a code fence.
pub(crate) struct FakeClient {
    fail: Option<ContentKind>,
    pub(crate) calls: Mutex<Vec<ContentKind>>,
}

impl FakeClient {
    pub(crate) fn new() -> Self {
        Self {
            fail: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A client whose `kind` stream answers with HTTP 500.
    pub(crate) fn failing(kind: ContentKind) -> Self {
        Self {
            fail: Some(kind),
            ..Self::new()
        }
    }
}

#[async_trait]
impl CompletionClient for FakeClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, StreamError> {
        let kind = match messages[0].content.as_str() {
            prompt::LANDING_PAGE_SYSTEM => ContentKind::LandingPage,
            prompt::PITCH_DECK_SYSTEM => ContentKind::PitchDeck,
            _ => ContentKind::Marketing,
        };
        self.calls.lock().push(kind);
        if self.fail == Some(kind) {
            return Err(StreamError::Status {
                status: 500,
                body: "upstream down".into(),
            });
        }
        let value = match kind {
            ContentKind::LandingPage => landing_page_json(),
            ContentKind::PitchDeck => pitch_deck_json(),
            ContentKind::Marketing => marketing_json(),
        };
        Ok(format!("```json\n{}\n```", value))
    }
}
