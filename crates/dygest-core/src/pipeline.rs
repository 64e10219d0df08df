use std::path::PathBuf;

use crate::{
    claude::ClaudeClient,
    download::download_video,
    error::Result,
    language::Language,
    transcript::fetch_transcript,
    url::extract_video_id,
};

/// One user submission. Immutable for the lifetime of the run.
#[derive(Clone, Debug)]
pub struct VideoRequest {
    pub url: String,
    pub language: Language,
}

/// The successful outcome of a full pipeline run.
#[derive(Debug)]
pub struct Digest {
    pub video_id: String,
    pub transcript: String,
    pub summary: String,
    pub title: String,
    /// Set when auto-download was enabled and the download succeeded.
    pub video_path: Option<PathBuf>,
}

/// Run the whole pipeline: parse URL, fetch transcript, summarize, generate
/// title, and (optionally) download the video.
///
/// Stages run strictly in order and each consumes only the successful output
/// of its predecessor; the first error ends the run without invoking any
/// later stage.
pub async fn run(
    request: &VideoRequest,
    client: &ClaudeClient,
    auto_download: bool,
) -> Result<Digest> {
    let video_id = extract_video_id(&request.url)?;
    let transcript = fetch_transcript(&video_id, request.language.code()).await?;
    let summary = client.summarize(&transcript, request.language).await?;
    let title = client.generate_title(&summary, request.language).await?;

    let video_path = if auto_download {
        Some(download_video(&request.url, &title).await?)
    } else {
        None
    };

    Ok(Digest {
        video_id,
        transcript,
        summary,
        title,
        video_path,
    })
}
