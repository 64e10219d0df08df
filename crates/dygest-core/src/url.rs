use crate::error::{DygestError, Result};

/// Extract the video id from a YouTube URL.
///
/// Two hostname shapes are recognized: short links (`youtu.be/<id>`) where the
/// id is the path segment after the last slash, and standard links
/// (`youtube.com/watch?v=<id>`) where the id is the `v=` query parameter up to
/// the next `&`. Anything else is rejected.
pub fn extract_video_id(url: &str) -> Result<String> {
    if url.contains("youtu.be") {
        let last = url.rsplit('/').next().unwrap_or_default();
        let id = last.split('?').next().unwrap_or_default();
        if !id.is_empty() {
            return Ok(id.to_string());
        }
    } else if url.contains("youtube.com") {
        if let Some((_, rest)) = url.split_once("v=") {
            let id = rest.split('&').next().unwrap_or_default();
            if !id.is_empty() {
                return Ok(id.to_string());
            }
        }
    }

    Err(DygestError::InvalidUrl {
        url: url.to_string(),
    })
}
