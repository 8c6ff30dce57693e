//! Typed content records returned by the model.
//!
//! Every field is required unless marked optional; a reply that leaves one
//! out fails its stream rather than being filled with guesses.
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::input::AppInput;
use super::prompt;
use crate::deck::PitchDeck;

/// The three content streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    LandingPage,
    PitchDeck,
    Marketing,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::LandingPage,
        ContentKind::PitchDeck,
        ContentKind::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::LandingPage => "landing-page",
            ContentKind::PitchDeck => "pitch-deck",
            ContentKind::Marketing => "marketing",
        }
    }

    /// Human-readable name, used as the prefix of stream warnings.
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentKind::LandingPage => "Landing Page",
            ContentKind::PitchDeck => "Pitch Deck",
            ContentKind::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record one content stream produces.
pub trait ContentRecord: DeserializeOwned + Send + 'static {
    const KIND: ContentKind;

    fn system_prompt() -> &'static str;

    fn user_prompt(input: &AppInput, today: NaiveDate) -> String;

    /// Checks that serde cannot express.
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowItWorksStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub headline: String,
    pub description: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLinks {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub links: Vec<FooterLinks>,
}

/// Landing page copy plus ready-to-use React and HTML code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub benefits: Vec<Benefit>,
    pub how_it_works: Vec<HowItWorksStep>,
    pub testimonials: Vec<Testimonial>,
    pub cta: CallToAction,
    pub footer: Footer,
    pub react_code: String,
    pub html_code: String,
}

impl ContentRecord for LandingPage {
    const KIND: ContentKind = ContentKind::LandingPage;

    fn system_prompt() -> &'static str {
        prompt::LANDING_PAGE_SYSTEM
    }

    fn user_prompt(input: &AppInput, _today: NaiveDate) -> String {
        prompt::landing_page_user(input)
    }

    fn validate(&self) -> Result<(), String> {
        if self.hero.headline.trim().is_empty() {
            return Err("hero.headline is empty".to_string());
        }
        Ok(())
    }
}

impl ContentRecord for PitchDeck {
    const KIND: ContentKind = ContentKind::PitchDeck;

    fn system_prompt() -> &'static str {
        prompt::PITCH_DECK_SYSTEM
    }

    fn user_prompt(input: &AppInput, today: NaiveDate) -> String {
        prompt::pitch_deck_user(input, today)
    }

    fn validate(&self) -> Result<(), String> {
        if self.slides.is_empty() {
            return Err("deck has no slides".to_string());
        }
        let mut seen = HashSet::with_capacity(self.slides.len());
        for slide in &self.slides {
            if slide.slide_number == 0 {
                return Err(format!("slide {:?} has number 0", slide.title));
            }
            if !seen.insert(slide.slide_number) {
                return Err(format!("slide number {} is used twice", slide.slide_number));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub content: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformPosts {
    pub platform: String,
    pub posts: Vec<SocialPost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleAd {
    pub headline1: String,
    pub headline2: String,
    pub headline3: String,
    pub description1: String,
    pub description2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub subject: String,
    pub preheader: String,
    /// HTML
    pub body: String,
}

/// Social posts, search ads and a launch email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marketing {
    pub instagram: PlatformPosts,
    pub twitter: PlatformPosts,
    pub facebook: PlatformPosts,
    pub linkedin: PlatformPosts,
    pub google_ads: Vec<GoogleAd>,
    pub email_template: EmailTemplate,
}

impl Marketing {
    pub fn platforms(&self) -> [&PlatformPosts; 4] {
        [&self.instagram, &self.twitter, &self.facebook, &self.linkedin]
    }
}

impl ContentRecord for Marketing {
    const KIND: ContentKind = ContentKind::Marketing;

    fn system_prompt() -> &'static str {
        prompt::MARKETING_SYSTEM
    }

    fn user_prompt(input: &AppInput, _today: NaiveDate) -> String {
        prompt::marketing_user(input)
    }

    fn validate(&self) -> Result<(), String> {
        match self.platforms().iter().find(|p| p.posts.is_empty()) {
            Some(platform) => Err(format!("{} has no posts", platform.platform)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideContent;
    use crate::generation::fixtures::{landing_page_json, marketing_json};
    use serde_json::json;

    #[test]
    fn test_landing_page_parses_and_validates() {
        let page: LandingPage = serde_json::from_value(landing_page_json()).unwrap();
        assert_eq!(page.how_it_works[0].step, 1);
        assert_eq!(page.cta.button_text, "Get started");
        assert!(page.validate().is_ok());

        let mut blank = page.clone();
        blank.hero.headline = " ".into();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut value = landing_page_json();
        value.as_object_mut().unwrap().remove("htmlCode");
        assert!(serde_json::from_value::<LandingPage>(value).is_err());
    }

    #[test]
    fn test_marketing_requires_posts_per_platform() {
        let marketing: Marketing = serde_json::from_value(marketing_json()).unwrap();
        assert!(marketing.validate().is_ok());

        let mut empty = marketing.clone();
        empty.linkedin.posts.clear();
        assert_eq!(empty.validate().unwrap_err(), "LinkedIn has no posts");
    }

    #[test]
    fn test_pitch_deck_slide_numbers() {
        let mut deck = PitchDeck {
            slides: vec![SlideContent::new(1, "TaskFlow"), SlideContent::new(2, "Problem")],
            metadata: Default::default(),
        };
        assert!(deck.validate().is_ok());

        deck.slides.push(SlideContent::new(2, "Solution"));
        assert_eq!(deck.validate().unwrap_err(), "slide number 2 is used twice");

        deck.slides.clear();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(
            serde_json::to_value(ContentKind::PitchDeck).unwrap(),
            json!("pitch-deck")
        );
        assert_eq!(ContentKind::Marketing.display_name(), "Marketing");
        assert_eq!(ContentKind::ALL.len(), 3);
    }
}
