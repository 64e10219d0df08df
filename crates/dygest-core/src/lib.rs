//! Dygest Core Library
//!
//! Core functionality for summarizing YouTube videos: caption transcript
//! fetching, Claude-generated summaries and titles, and yt-dlp downloads.

pub mod claude;
pub mod download;
pub mod error;
pub mod format;
pub mod language;
pub mod pipeline;
pub mod transcript;
pub mod url;

// Re-export commonly used items at crate root
pub use claude::{ClaudeClient, ClaudeConfig, TITLE_LEN};
pub use download::{download_video, sanitize_filename};
pub use error::{DygestError, Result};
pub use format::{format_digest_readable, format_transcript_preview};
pub use language::Language;
pub use pipeline::{Digest, VideoRequest};
pub use transcript::fetch_transcript;
pub use url::extract_video_id;
