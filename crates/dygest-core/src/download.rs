use std::path::PathBuf;

use tokio::process::Command;

use crate::error::{DygestError, Result};

const MAX_FILENAME_LEN: usize = 200;

/// Make a title safe to use as a filename stem.
///
/// Strips `\ / * ? : " < > |`, replaces spaces with underscores, and caps the
/// result at 200 characters.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .map(|c| if c == ' ' { '_' } else { c })
        .take(MAX_FILENAME_LEN)
        .collect()
}

/// Download a video as MP4 using yt-dlp, named after the generated title.
pub async fn download_video(url: &str, title: &str) -> Result<PathBuf> {
    let stem = sanitize_filename(title);
    let output_template = format!("{stem}.%(ext)s");

    let output = Command::new("yt-dlp")
        .arg(url)
        .arg("-f")
        .arg("mp4")
        .arg("-o")
        .arg(&output_template)
        .output()
        .await?;

    if !output.status.success() {
        return Err(DygestError::DownloadFailed {
            url: url.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(PathBuf::from(format!("{stem}.mp4")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_illegal_characters_and_replaces_spaces() {
        assert_eq!(sanitize_filename("My: Video? <Title>"), "My_Video_Title");
        assert_eq!(sanitize_filename(r#"a\b/c*d?e:f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn truncates_to_200_characters() {
        let long = "x".repeat(300);
        let sanitized = sanitize_filename(&long);
        assert_eq!(sanitized.chars().count(), 200);
    }

    #[test]
    fn plain_titles_are_untouched_apart_from_spaces() {
        assert_eq!(sanitize_filename("rust_in_practice"), "rust_in_practice");
        assert_eq!(sanitize_filename("rust in practice"), "rust_in_practice");
    }
}
