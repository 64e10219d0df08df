use dygest_core::{
    ClaudeClient, ClaudeConfig, DygestError, Language, VideoRequest, pipeline,
};

fn test_client() -> ClaudeClient {
    ClaudeClient::new(ClaudeConfig {
        api_key: "test-key".to_string(),
        api_url: "http://localhost/unused".to_string(),
        model: "test-model".to_string(),
    })
}

#[tokio::test]
async fn invalid_url_ends_the_run_before_any_stage() {
    let request = VideoRequest {
        url: "https://vimeo.com/12345".to_string(),
        language: Language::English,
    };

    let err = pipeline::run(&request, &test_client(), true)
        .await
        .unwrap_err();

    assert!(matches!(err, DygestError::InvalidUrl { .. }));
}

#[tokio::test]
async fn invalid_url_error_names_the_offending_url() {
    let request = VideoRequest {
        url: "not a url at all".to_string(),
        language: Language::German,
    };

    let err = pipeline::run(&request, &test_client(), false)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not a url at all"));
}

#[test]
fn missing_api_key_is_reported_by_name() {
    // Scoped env mutation would race other tests; this only checks the
    // error's message shape.
    let err = DygestError::MissingApiKey {
        env_var: "CLAUDE_API_KEY".to_string(),
    };
    assert!(err.to_string().contains("CLAUDE_API_KEY"));
}
