//! Launchkit - launch collateral generation with a pitch-deck renderer
//!
//! This library turns a short product description into launch material: a
//! landing page (copy plus React and HTML code), an investor pitch deck and a
//! social media campaign. Content comes from a language model; the pitch deck
//! is then laid out deterministically and written as a PowerPoint (PPTX)
//! document.
//!
//! # Features
//!
//! - **Slide layout engine**: Five layout templates positioned on a 10 × 7.5 inch canvas
//! - **PPTX writer**: Minimal PresentationML packages with theme colours and speaker notes
//! - **Reproducible output**: Identical input renders byte-identical documents
//! - **Content generation**: Three concurrent model calls with partial-failure handling
//! - **Exports**: HTML, Markdown, PPTX and JSON downloads
//! - **HTTP API**: actix-web JSON endpoints (feature `server`)
//!
//! # Example - Rendering a pitch deck
//!
//! ```rust
//! use launchkit::deck::{assemble_bytes, PresentationMetadata, SlideContent, SlideLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let slides = vec![
//!     SlideContent::new(1, "TaskFlow").with_layout(SlideLayout::Title),
//!     SlideContent::new(2, "Problem")
//!         .with_content(["Too many tools", "No visibility"])
//!         .with_notes("Start with the pain."),
//! ];
//! let metadata = PresentationMetadata {
//!     title: "TaskFlow".into(),
//!     subtitle: "Project management that works".into(),
//!     author: "TaskFlow Team".into(),
//!     date: "2026-10-18".into(),
//! };
//!
//! let pptx = assemble_bytes(&slides, &metadata, None)?;
//! assert!(pptx.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Generating content
//!
//! ```no_run
//! use std::sync::Arc;
//! use launchkit::config::Config;
//! use launchkit::generation::{AppInput, HttpCompletionClient, Orchestrator};
//! use launchkit::status::InMemoryStatusStore;
//!
//! # async fn run(input: AppInput) -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let client = HttpCompletionClient::new(config.completion.clone())?;
//! let orchestrator = Orchestrator::new(Arc::new(client), Arc::new(InMemoryStatusStore::new()))
//!     .with_stream_timeout(config.completion.timeout);
//!
//! let outcome = orchestrator.generate(&input).await?;
//! println!("project {}", outcome.result.project_id);
//! # Ok(())
//! # }
//! ```

/// Common types and utilities shared across the crate
pub mod common;

/// Pitch-deck data model, layout engine and presentation assembler
pub mod deck;

/// Low-level PPTX (PresentationML) writer
pub mod pptx;

/// Markdown export of pitch decks
pub mod markdown;

/// Content generation through a language model
pub mod generation;

/// Generation progress records
pub mod status;

/// Downloadable files
pub mod export;

/// Environment configuration
pub mod config;

/// HTTP JSON API
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use deck::{PitchDeck, PitchDeckOutput, SlideContent, assemble, render_pitch_deck};
pub use generation::{AppInput, GenerationResult, Orchestrator};
