//! Integration tests for spendwise-core
//!
//! These tests exercise the full workflow — validate → prompt → generate —
//! with the real `GeminiBackend` talking HTTP to the in-process mock
//! Gemini server.

use spendwise_core::{
    test_utils::{MockGeminiServer, MOCK_API_KEY, MOCK_MODEL, MOCK_REPORT},
    Error, ExpenseAdvisor, GeminiBackend, GenClient, GenerationBackend,
};

fn advisor_for(server: &MockGeminiServer, api_key: &str, model: &str) -> ExpenseAdvisor {
    let backend = GeminiBackend::new(&server.url(), api_key, model);
    ExpenseAdvisor::new(GenClient::Gemini(backend))
}

// =============================================================================
// Workflow Integration Tests
// =============================================================================

#[tokio::test]
async fn test_full_advise_workflow() {
    let server = MockGeminiServer::start().await;
    let advisor = advisor_for(&server, MOCK_API_KEY, MOCK_MODEL);

    let report = advisor
        .advise(10_000_000, "Tiền nhà 5tr, Ăn sáng 30k")
        .await
        .expect("advise should succeed against the mock server");

    // The rendered text is exactly what the service returned
    assert_eq!(report.markdown, MOCK_REPORT);
    assert_eq!(report.model, MOCK_MODEL);
}

#[tokio::test]
async fn test_validation_short_circuits_before_http() {
    // Point at a closed port: if validation ever let the call through,
    // this would come back as a service error instead
    let backend = GeminiBackend::new("http://127.0.0.1:1", MOCK_API_KEY, MOCK_MODEL);
    let advisor = ExpenseAdvisor::new(GenClient::Gemini(backend));

    let err = advisor.advise(10_000_000, "   ").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_invalid_key_surfaces_service_error() {
    let server = MockGeminiServer::start().await;
    let advisor = advisor_for(&server, "expired-key", MOCK_MODEL);

    let err = advisor.advise(10_000_000, "Cà phê 25k").await.unwrap_err();
    match err {
        Error::Service(msg) => {
            assert!(msg.contains("API key not valid"));
            assert!(msg.contains("INVALID_ARGUMENT"));
        }
        other => panic!("expected Service, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_model_surfaces_service_error() {
    let server = MockGeminiServer::start().await;
    let advisor = advisor_for(&server, MOCK_API_KEY, "gemini-0.1-nano");

    let err = advisor.advise(5_000_000, "Xăng xe 100k").await.unwrap_err();
    match err {
        Error::Service(msg) => assert!(msg.contains("not found")),
        other => panic!("expected Service, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_surfaces_service_error() {
    let backend = GeminiBackend::new("http://127.0.0.1:1", MOCK_API_KEY, MOCK_MODEL);
    let advisor = ExpenseAdvisor::new(GenClient::Gemini(backend));

    let err = advisor.advise(10_000_000, "Ăn trưa 50k").await.unwrap_err();
    assert!(matches!(err, Error::Service(_)));
}

#[tokio::test]
async fn test_health_check_and_model_listing() {
    let server = MockGeminiServer::start().await;
    let backend = GeminiBackend::new(&server.url(), MOCK_API_KEY, MOCK_MODEL);

    assert!(backend.health_check().await);

    let models = backend.list_models().await.unwrap();
    assert!(models.iter().any(|m| m == MOCK_MODEL));
}
