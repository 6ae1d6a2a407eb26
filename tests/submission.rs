use bannergen::{
    form::{
        MemoryForm, RecordingView, SubmissionState, BACKGROUND_URL_FIELD, CATEGORY_FIELD,
        KEYWORDS_FIELD, SUBTITLE_FIELD, TITLE_FIELD,
    },
    ClientConfig, FormError, FormHandler, ImageClient, ServiceClient, SubmitEvent,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form() -> MemoryForm {
    MemoryForm::new()
        .with_value(TITLE_FIELD, "Launch Day")
        .with_value(SUBTITLE_FIELD, "Everything you need to know")
        .with_value(CATEGORY_FIELD, "Tech")
        .with_value(BACKGROUND_URL_FIELD, "https://img.example/bg.jpg")
        .with_value(KEYWORDS_FIELD, "a, b ,c")
}

fn handler_for(server: &MockServer) -> FormHandler<ImageClient> {
    let config = ClientConfig::new().with_endpoint(format!("{}/generate-image", server.uri()));
    let client = ServiceClient::new(config).unwrap();
    FormHandler::new(client.image().clone())
}

#[tokio::test]
async fn posts_json_and_displays_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-image"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "Launch Day",
            "subtitle": "Everything you need to know",
            "category": "Tech",
            "background_url": "https://img.example/bg.jpg",
            "keywords": ["a", "b", "c"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image_url": "http://x/y.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let mut event = SubmitEvent::new();
    let mut view = RecordingView::new();

    let outcome = handler.handle_submit(&mut event, &form(), &mut view).await;

    assert!(outcome.is_displayed());
    assert!(event.default_prevented());
    assert_eq!(view.image_source(), Some("http://x/y.png"));
    assert!(view.container_visible());
    assert!(view.alerts().is_empty());
}

#[tokio::test]
async fn server_error_alerts_with_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-image"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to load PSD file"
        })))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let mut event = SubmitEvent::new();
    let mut view = RecordingView::new();

    let outcome = handler.handle_submit(&mut event, &form(), &mut view).await;

    match outcome.error() {
        Some(FormError::Status {
            status,
            status_text,
            server_message,
        }) => {
            assert_eq!(*status, 500);
            assert_eq!(status_text, "Internal Server Error");
            assert_eq!(server_message.as_deref(), Some("Failed to load PSD file"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(event.default_prevented());
    assert_eq!(view.image_source(), None);
    assert!(!view.container_visible());
    assert_eq!(view.alerts().len(), 1);
    assert!(view.alerts()[0].contains("Internal Server Error"));
}

#[tokio::test]
async fn invalid_json_alerts_without_image_update() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let mut event = SubmitEvent::new();
    let mut view = RecordingView::new();

    let outcome = handler.handle_submit(&mut event, &form(), &mut view).await;

    assert!(matches!(outcome.error(), Some(FormError::Parse(_))));
    assert!(event.default_prevented());
    assert_eq!(view.image_source(), None);
    assert_eq!(view.alerts().len(), 1);
    assert!(view.alerts()[0].starts_with("Error: "));
}

#[tokio::test]
async fn json_without_image_url_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let mut view = RecordingView::new();

    let outcome = handler
        .handle_submit(&mut SubmitEvent::new(), &form(), &mut view)
        .await;

    assert!(matches!(outcome.error(), Some(FormError::InvalidResponse(_))));
    assert_eq!(view.image_source(), None);
    assert!(!view.container_visible());
    assert_eq!(view.alerts().len(), 1);
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let config = ClientConfig::new().with_endpoint("http://127.0.0.1:1/generate-image");
    let handler = FormHandler::new(ServiceClient::new(config).unwrap().image().clone());
    let mut event = SubmitEvent::new();
    let mut view = RecordingView::new();

    let outcome = handler.handle_submit(&mut event, &form(), &mut view).await;

    assert!(matches!(outcome.error(), Some(FormError::Network(_))));
    assert!(event.default_prevented());
    assert_eq!(view.alerts().len(), 1);
}

#[tokio::test]
async fn reports_in_flight_while_waiting() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "image_url": "http://x/slow.png" }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let handler = Arc::new(handler_for(&server));
    assert_eq!(handler.state(), SubmissionState::Idle);

    let task = {
        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let mut view = RecordingView::new();
            let outcome = handler
                .handle_submit(&mut SubmitEvent::new(), &form(), &mut view)
                .await;
            (outcome, view)
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(handler.state(), SubmissionState::InFlight);

    let (outcome, view) = task.await.unwrap();
    assert!(outcome.is_displayed());
    assert_eq!(view.image_source(), Some("http://x/slow.png"));
    assert_eq!(handler.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn health_endpoint_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&server)
        .await;

    let config = ClientConfig::new().with_endpoint(format!("{}/generate-image", server.uri()));
    let status = ServiceClient::new(config)
        .unwrap()
        .health()
        .check()
        .await
        .unwrap();

    assert!(status.is_healthy());
}

#[tokio::test]
async fn zero_timeout_waits_for_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "image_url": "http://x/y.png" }))
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .with_endpoint(format!("{}/generate-image", server.uri()))
        .with_timeout(Duration::ZERO);
    let handler = FormHandler::new(ServiceClient::new(config).unwrap().image().clone());
    let mut view = RecordingView::new();

    let outcome = handler
        .handle_submit(&mut SubmitEvent::new(), &form(), &mut view)
        .await;

    assert!(outcome.is_displayed(), "{:?}", outcome);
    assert_eq!(view.image_source(), Some("http://x/y.png"));
    assert!(view.alerts().is_empty());
}

#[tokio::test]
async fn error_status_without_json_body_keeps_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream gone"))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let mut view = RecordingView::new();

    let outcome = handler
        .handle_submit(&mut SubmitEvent::new(), &form(), &mut view)
        .await;

    match outcome.error() {
        Some(FormError::Status {
            status,
            status_text,
            server_message,
        }) => {
            assert_eq!(*status, 502);
            assert_eq!(status_text, "Bad Gateway");
            assert!(server_message.is_none());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(
        view.alerts(),
        ["Error: Network response was not ok: Bad Gateway"]
    );
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("user-agent", "banner-desk/2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image_url": "http://x/ua.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .with_endpoint(format!("{}/generate-image", server.uri()))
        .with_user_agent("banner-desk/2.1");
    let handler = FormHandler::new(ServiceClient::new(config).unwrap().image().clone());
    let mut view = RecordingView::new();

    let outcome = handler
        .handle_submit(&mut SubmitEvent::new(), &form(), &mut view)
        .await;

    assert!(outcome.is_displayed());
    assert_eq!(view.image_source(), Some("http://x/ua.png"));
}
