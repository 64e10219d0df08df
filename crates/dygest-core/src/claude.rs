use serde::Deserialize;

use crate::error::{DygestError, Result};
use crate::language::Language;

/// Anthropic Messages API endpoint.
pub const API_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

const MODEL: &str = "claude-3-opus-20240229";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const SUMMARY_MAX_TOKENS: u32 = 300;
const TITLE_MAX_TOKENS: u32 = 100;

/// Generated titles are exactly this many characters.
pub const TITLE_LEN: usize = 25;

/// Explicit API configuration, passed into the client instead of read from
/// process-wide state at call time.
#[derive(Clone, Debug)]
pub struct ClaudeConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl ClaudeConfig {
    /// Read the API key from `CLAUDE_API_KEY`. This is the only place the
    /// environment is consulted; absence fails here, before any request.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("CLAUDE_API_KEY").map_err(|_| DygestError::MissingApiKey {
                env_var: "CLAUDE_API_KEY".to_string(),
            })?;

        Ok(Self {
            api_key,
            api_url: API_ENDPOINT.to_string(),
            model: MODEL.to_string(),
        })
    }
}

/// Client for the two model calls the pipeline makes: summarization and
/// title generation.
pub struct ClaudeClient {
    http: reqwest::Client,
    config: ClaudeConfig,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Summarize a transcript in the given language.
    pub async fn summarize(&self, transcript: &str, language: Language) -> Result<String> {
        let prompt = format!(
            "Please summarize the following video transcript in {}:\n\n{}",
            language.name(),
            transcript
        );

        self.complete(prompt, SUMMARY_MAX_TOKENS, |status, body| {
            DygestError::SummaryFailed { status, body }
        })
        .await
    }

    /// Generate a title for the video from its summary.
    ///
    /// The model is asked for exactly 25 characters, but the contract is
    /// enforced here regardless of what comes back: longer output is
    /// truncated, shorter output is right-padded with spaces.
    pub async fn generate_title(&self, summary: &str, language: Language) -> Result<String> {
        let prompt = format!(
            "Based on the following summary, generate a short, descriptive title for the video \
             (EXACTLY 25 characters, including spaces) in {}:\n\n{}",
            language.name(),
            summary
        );

        let raw = self
            .complete(prompt, TITLE_MAX_TOKENS, |status, body| {
                DygestError::TitleFailed { status, body }
            })
            .await?;

        Ok(enforce_title_length(raw.trim()))
    }

    /// Single-message completion against the Messages API.
    ///
    /// Non-2xx responses are mapped through `to_error` so each caller keeps
    /// its own failure variant; the upstream body is carried along when it
    /// can be read.
    async fn complete(
        &self,
        prompt: String,
        max_tokens: u32,
        to_error: fn(u16, String) -> DygestError,
    ) -> Result<String> {
        let response = self
            .http
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&serde_json::json!({
                "model": self.config.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
                "max_tokens": max_tokens,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(to_error(status.as_u16(), body));
        }

        let parsed: MessagesResponse = response.json().await?;
        parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| DygestError::BadResponse {
                reason: "response content array is empty".to_string(),
            })
    }
}

/// Force a title to exactly [`TITLE_LEN`] characters.
///
/// Counted in `char`s, so truncation never splits a code point; grapheme
/// clusters are not considered.
fn enforce_title_length(title: &str) -> String {
    let mut out: String = title.chars().take(TITLE_LEN).collect();
    let have = out.chars().count();
    for _ in have..TITLE_LEN {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_are_padded_to_25() {
        let title = enforce_title_length("Ten chars!");
        assert_eq!(title.chars().count(), TITLE_LEN);
        assert_eq!(title, "Ten chars!               ");
    }

    #[test]
    fn long_titles_are_truncated_to_25() {
        let long = "This title runs to forty characters long";
        assert_eq!(long.chars().count(), 40);
        let title = enforce_title_length(long);
        assert_eq!(title.chars().count(), TITLE_LEN);
        assert_eq!(title, "This title runs to forty ");
    }

    #[test]
    fn exact_titles_pass_through() {
        let exact = "Exactly twenty-five chars";
        assert_eq!(exact.chars().count(), TITLE_LEN);
        assert_eq!(enforce_title_length(exact), exact);
    }

    #[test]
    fn multibyte_titles_count_chars_not_bytes() {
        let title = enforce_title_length("動画の要約タイトル");
        assert_eq!(title.chars().count(), TITLE_LEN);
        assert!(title.starts_with("動画の要約タイトル"));
        assert!(title.ends_with(' '));

        let long = "この動画は長い説明的なタイトルを持っていて二十五文字を超える";
        let truncated = enforce_title_length(long);
        assert_eq!(truncated.chars().count(), TITLE_LEN);
        assert_eq!(truncated, long.chars().take(TITLE_LEN).collect::<String>());
    }
}
