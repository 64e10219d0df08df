use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::error::{DygestError, Result};

/// Fetch the caption transcript for a video in a single language.
///
/// Only the requested language is accepted; there is no fallback negotiation.
/// Caption snippets are joined with single spaces, in provider order.
pub async fn fetch_transcript(video_id: &str, lang_code: &str) -> Result<String> {
    let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
        DygestError::TranscriptFailed {
            video_id: video_id.to_string(),
            reason: e.to_string(),
        }
    })?;

    let transcript = api
        .fetch_transcript(video_id, &[lang_code], false)
        .await
        .map_err(|e| DygestError::TranscriptFailed {
            video_id: video_id.to_string(),
            reason: e.to_string(),
        })?;

    Ok(transcript
        .snippets
        .iter()
        .map(|snippet| snippet.text.as_str())
        .collect::<Vec<_>>()
        .join(" "))
}
