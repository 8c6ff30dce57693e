//! Runs the three content streams for one request and aggregates them.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use super::client::{CompletionClient, StreamError};
use super::content::generate;
use super::input::{AppInput, ValidationErrors};
use super::schema::{ContentKind, ContentRecord, LandingPage, Marketing};
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::deck::{PitchDeck, PitchDeckOutput, render_pitch_deck};
use crate::status::{GenerationState, StatusRecord, StatusStore};

const STREAM_COUNT: usize = ContentKind::ALL.len();

/// Everything generated for one project. Failed streams are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub project_id: String,
    pub landing_page: Option<LandingPage>,
    pub pitch_deck: Option<PitchDeckOutput>,
    pub marketing: Option<Marketing>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub result: GenerationResult,
    /// One `"<Stream Name>: <reason>"` entry per failed stream.
    pub warnings: Vec<String>,
}

impl GenerationOutcome {
    /// Some streams failed but not all.
    pub fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("All content streams failed: {}", .0.join("; "))]
    AllStreamsFailed(Vec<String>),
}

pub struct Orchestrator {
    client: Arc<dyn CompletionClient>,
    store: Arc<dyn StatusStore>,
    stream_timeout: Duration,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn CompletionClient>, store: Arc<dyn StatusStore>) -> Self {
        Self {
            client,
            store,
            stream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Upper bound for each stream. A stream that runs longer fails alone.
    pub fn with_stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = timeout;
        self
    }

    pub fn store(&self) -> &Arc<dyn StatusStore> {
        &self.store
    }

    /// Validate `input`, then generate all three records concurrently.
    ///
    /// Invalid input returns before anything is stored or requested. The
    /// streams are settled independently: one failing leaves its slot empty
    /// and adds a warning, and only all three failing is an error.
    pub async fn generate(&self, input: &AppInput) -> Result<GenerationOutcome, GenerationError> {
        input.validate()?;

        let project_id = Uuid::new_v4().to_string();
        log::info!(
            "Starting generation {} for {:?}",
            project_id,
            input.app_name
        );
        self.store.put(
            &project_id,
            StatusRecord::new(GenerationState::Generating, 0).with_message("Generating content"),
        );

        let today = Utc::now().date_naive();
        let settled = AtomicUsize::new(0);
        let (landing_page, pitch_deck, marketing) = tokio::join!(
            self.run_stream::<LandingPage>(&project_id, input, today, &settled),
            self.run_stream::<PitchDeck>(&project_id, input, today, &settled),
            self.run_stream::<Marketing>(&project_id, input, today, &settled),
        );

        let mut warnings = Vec::new();
        let landing_page = settle(landing_page, &mut warnings);
        let pitch_deck = settle(pitch_deck, &mut warnings);
        let marketing = settle(marketing, &mut warnings);

        if warnings.len() == STREAM_COUNT {
            log::error!("Generation {} failed: {}", project_id, warnings.join("; "));
            self.store.put(
                &project_id,
                StatusRecord::new(GenerationState::Error, 100)
                    .with_message("All content streams failed"),
            );
            return Err(GenerationError::AllStreamsFailed(warnings));
        }

        let palette = input.palette();
        let pitch_deck = pitch_deck.map(|deck| render_pitch_deck(deck, Some(&palette)));

        let message = if warnings.is_empty() {
            "Generation complete".to_string()
        } else {
            format!("Generation complete with {} failed stream(s)", warnings.len())
        };
        self.store.put(
            &project_id,
            StatusRecord::new(GenerationState::Completed, 100).with_message(message),
        );
        log::info!(
            "Finished generation {} ({} warning(s))",
            project_id,
            warnings.len()
        );

        Ok(GenerationOutcome {
            result: GenerationResult {
                project_id,
                landing_page,
                pitch_deck,
                marketing,
                created_at: Utc::now(),
            },
            warnings,
        })
    }

    async fn run_stream<T: ContentRecord>(
        &self,
        project_id: &str,
        input: &AppInput,
        today: NaiveDate,
        settled: &AtomicUsize,
    ) -> Result<T, StreamError> {
        let outcome = match tokio::time::timeout(
            self.stream_timeout,
            generate::<T>(self.client.as_ref(), input, today),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(StreamError::Timeout(self.stream_timeout.as_secs())),
        };

        let done = settled.fetch_add(1, Ordering::SeqCst) + 1;
        let progress = (done * 100 / STREAM_COUNT) as u8;
        let message = match &outcome {
            Ok(_) => format!("{} finished", T::KIND.display_name()),
            Err(e) => {
                log::warn!(
                    "{} stream failed for {}: {}",
                    T::KIND.display_name(),
                    project_id,
                    e
                );
                format!("{} failed", T::KIND.display_name())
            }
        };
        self.store.put(
            project_id,
            StatusRecord::new(GenerationState::Generating, progress)
                .with_agent(T::KIND)
                .with_message(message),
        );

        outcome
    }
}

fn settle<T: ContentRecord>(outcome: Result<T, StreamError>, warnings: &mut Vec<String>) -> Option<T> {
    match outcome {
        Ok(record) => Some(record),
        Err(e) => {
            warnings.push(format!("{}: {}", T::KIND.display_name(), e));
            None
        }
    }
}
