use std::sync::{Arc, Mutex};

use launchpad_engine::{
    EngineEvent, FailureKind, HttpProvisioner, ProgressSink, ProvisionSettings, Provisioner,
    Stage, GENERIC_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn stages(&self) -> Vec<Stage> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Progress(progress) => Some(progress.stage),
                _ => None,
            })
            .collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn provisioner_for(server: &MockServer) -> HttpProvisioner {
    let settings = ProvisionSettings::new(&server.uri()).expect("valid settings");
    HttpProvisioner::new(settings)
}

#[tokio::test]
async fn success_with_url_yields_outcome_and_stage_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create-repo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"url": "https://x.example/app"})),
        )
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let outcome = provisioner_for(&server)
        .provision(1, &sink)
        .await
        .expect("provision ok");

    assert_eq!(outcome.app_url.as_deref(), Some("https://x.example/app"));
    assert_eq!(
        sink.stages(),
        vec![Stage::CreatingRepository, Stage::AwaitingDeployment]
    );
}

#[tokio::test]
async fn success_without_url_field_leaves_outcome_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create-repo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let outcome = provisioner_for(&server)
        .provision(2, &sink)
        .await
        .expect("provision ok");

    assert_eq!(outcome.app_url, None);
}

#[tokio::test]
async fn rejection_surfaces_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create-repo"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "quota exceeded"})))
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let err = provisioner_for(&server)
        .provision(3, &sink)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "quota exceeded");
}

#[tokio::test]
async fn rejection_with_unparsable_body_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create-repo"))
        .respond_with(
            ResponseTemplate::new(502).set_body_raw("<html>bad gateway</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let err = provisioner_for(&server)
        .provision(4, &sink)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unparsable_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create-repo"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let err = provisioner_for(&server)
        .provision(5, &sink)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    // RFC 2606 reserves .invalid, so resolution always fails.
    let settings = ProvisionSettings::new("http://service.invalid").expect("valid settings");
    let sink = TestSink::new();

    let err = HttpProvisioner::new(settings)
        .provision(6, &sink)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[test]
fn settings_reject_malformed_service_url() {
    assert!(ProvisionSettings::new("not a url").is_err());
}

#[test]
fn settings_resolve_the_fixed_endpoint_path() {
    let settings = ProvisionSettings::new("http://localhost:3000").expect("valid settings");
    assert_eq!(settings.endpoint().path(), "/api/create-repo");
}
