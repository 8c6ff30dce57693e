//! Content generation: turn an [`AppInput`] into a landing page, a pitch
//! deck and a marketing campaign by asking a language model.
//!
//! Each of the three *content streams* builds its prompts, calls a
//! [`CompletionClient`], extracts the JSON from the reply and parses it into
//! a strictly typed record. The [`Orchestrator`] runs the streams
//! concurrently and keeps whatever succeeded.
//!
//! ```no_run
//! use std::sync::Arc;
//! use launchkit::config::CompletionSettings;
//! use launchkit::generation::{AppInput, HttpCompletionClient, Orchestrator};
//! use launchkit::status::InMemoryStatusStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpCompletionClient::new(CompletionSettings::new("sk-..."))?;
//! let orchestrator = Orchestrator::new(Arc::new(client), Arc::new(InMemoryStatusStore::new()));
//!
//! let input: AppInput = serde_json::from_str(r#"{
//!     "appName": "TaskFlow",
//!     "tagline": "Project management that works",
//!     "targetAudience": "Small businesses",
//!     "problemSolved": "Complex project management",
//!     "keyFeatures": ["Simple boards", "Team collaboration", "Smart tracking"]
//! }"#)?;
//!
//! let outcome = orchestrator.generate(&input).await?;
//! for warning in &outcome.warnings {
//!     eprintln!("{}", warning);
//! }
//! # Ok(())
//! # }
//! ```
mod client;
mod content;
mod extract;
#[cfg(test)]
pub(crate) mod fixtures;
mod input;
mod orchestrator;
mod prompt;
mod schema;

pub use client::{
    ChatMessage, CompletionClient, CompletionRequest, HttpCompletionClient, StreamError,
};
pub use content::generate;
pub use extract::{extract_json, parse_reply};
pub use input::{
    AppInput, BrandColors, FieldError, FundingStage, MIN_KEY_FEATURES, StylePreference,
    ValidationErrors,
};
pub use orchestrator::{GenerationError, GenerationOutcome, GenerationResult, Orchestrator};
pub use schema::{
    Benefit, CallToAction, ContentKind, ContentRecord, EmailTemplate, Feature, Footer,
    FooterLinks, GoogleAd, Hero, HowItWorksStep, LandingPage, Marketing, PlatformPosts,
    SocialPost, Testimonial,
};
