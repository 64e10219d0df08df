use thiserror::Error;

#[derive(Error, Debug)]
pub enum DygestError {
    #[error("Invalid YouTube URL: {url}")]
    InvalidUrl { url: String },

    #[error("Error getting transcript for {video_id}: {reason}")]
    TranscriptFailed { video_id: String, reason: String },

    #[error("Summary API Error ({status}): {body}")]
    SummaryFailed { status: u16, body: String },

    #[error("Title Generation Error ({status}): {body}")]
    TitleFailed { status: u16, body: String },

    #[error("Error downloading video {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("Invalid API response: {reason}")]
    BadResponse { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, DygestError>;
