//! One content stream: prompt, call, parse, validate.
use chrono::NaiveDate;

use super::client::{ChatMessage, CompletionClient, StreamError};
use super::extract::parse_reply;
use super::input::AppInput;
use super::schema::ContentRecord;

/// Generate one record of type `T` for `input`.
pub async fn generate<T: ContentRecord>(
    client: &dyn CompletionClient,
    input: &AppInput,
    today: NaiveDate,
) -> Result<T, StreamError> {
    log::info!("Generating {} for {:?}", T::KIND, input.app_name);

    let messages = vec![
        ChatMessage::system(T::system_prompt()),
        ChatMessage::user(T::user_prompt(input, today)),
    ];
    let reply = client.complete(messages).await?;

    let record: T = parse_reply(&reply)?;
    record.validate().map_err(StreamError::Schema)?;

    log::info!("Generated {} for {:?}", T::KIND, input.app_name);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::PitchDeck;
    use crate::generation::fixtures::{landing_page_json, taskflow};
    use crate::generation::schema::LandingPage;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    struct Canned {
        reply: String,
        seen: Mutex<Vec<ChatMessage>>,
    }

    #[async_trait]
    impl CompletionClient for Canned {
        async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, StreamError> {
            self.seen.lock().extend(messages);
            Ok(self.reply.clone())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[tokio::test]
    async fn test_fenced_reply_is_parsed() {
        let client = Canned {
            reply: format!("```json\n{}\n```", landing_page_json()),
            seen: Mutex::new(Vec::new()),
        };
        let page: LandingPage = generate(&client, &taskflow(), today()).await.unwrap();
        assert_eq!(page.hero.cta, "Start free");

        let seen = client.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, "system");
        assert!(seen[1].content.contains("**App Name:** TaskFlow"));
    }

    #[tokio::test]
    async fn test_invalid_record_is_a_schema_error() {
        let client = Canned {
            reply: r#"{"slides": [], "metadata": {"title": "", "subtitle": "", "author": "", "date": ""}}"#
                .to_string(),
            seen: Mutex::new(Vec::new()),
        };
        let result = generate::<PitchDeck>(&client, &taskflow(), today()).await;
        assert!(matches!(result, Err(StreamError::Schema(_))));
    }

    #[tokio::test]
    async fn test_prose_reply_is_a_parse_error() {
        let client = Canned {
            reply: "I cannot help with that.".to_string(),
            seen: Mutex::new(Vec::new()),
        };
        let result = generate::<LandingPage>(&client, &taskflow(), today()).await;
        assert!(matches!(result, Err(StreamError::Parse(_))));
    }
}
