use crate::pipeline::Digest;

const TRANSCRIPT_PREVIEW_CHARS: usize = 1000;

/// Elide a transcript for display. The full text still flows through the
/// pipeline; only the rendered preview is shortened.
pub fn format_transcript_preview(transcript: &str) -> String {
    if transcript.chars().count() <= TRANSCRIPT_PREVIEW_CHARS {
        return transcript.to_string();
    }

    let mut preview: String = transcript.chars().take(TRANSCRIPT_PREVIEW_CHARS).collect();
    preview.push_str("…");
    preview
}

/// Format a finished run as human-readable markdown.
pub fn format_digest_readable(digest: &Digest) -> String {
    let mut output = String::new();

    output.push_str("## Video Transcript\n\n");
    output.push_str(&format_transcript_preview(&digest.transcript));
    output.push_str("\n\n");

    output.push_str("## Video Summary\n\n");
    output.push_str(&digest.summary);
    output.push_str("\n\n");

    output.push_str("## Generated Video Title\n\n");
    output.push_str(&format!("{}\n\n", digest.title));

    output.push_str("## Video Download\n\n");
    match &digest.video_path {
        Some(path) => {
            output.push_str(&format!(
                "Video downloaded successfully as '{}'\n",
                path.display()
            ));
        }
        None => output.push_str("Auto-download is disabled. Video was not downloaded.\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sample_digest(video_path: Option<PathBuf>) -> Digest {
        Digest {
            video_id: "abc123".to_string(),
            transcript: "hello world".to_string(),
            summary: "A short greeting.".to_string(),
            title: "Hello World Greeting     ".to_string(),
            video_path,
        }
    }

    #[test]
    fn short_transcripts_are_not_elided() {
        assert_eq!(format_transcript_preview("hello"), "hello");
    }

    #[test]
    fn long_transcripts_are_elided() {
        let long = "word ".repeat(500);
        let preview = format_transcript_preview(&long);
        assert_eq!(preview.chars().count(), TRANSCRIPT_PREVIEW_CHARS + 1);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn readable_output_reports_download_outcome() {
        let with_video = format_digest_readable(&sample_digest(Some(PathBuf::from(
            "Hello_World_Greeting.mp4",
        ))));
        assert!(with_video.contains("downloaded successfully as 'Hello_World_Greeting.mp4'"));

        let without_video = format_digest_readable(&sample_digest(None));
        assert!(without_video.contains("Auto-download is disabled"));
    }
}
