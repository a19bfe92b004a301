use std::time::{Duration, Instant};

use launchpad_engine::{EngineEvent, EngineHandle, ProvisionSettings, Stage};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn drain_until_completed(engine: &EngineHandle) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut events = Vec::new();
    while Instant::now() < deadline {
        if let Some(event) = engine.try_recv() {
            let done = matches!(event, EngineEvent::AttemptCompleted { .. });
            events.push(event);
            if done {
                return events;
            }
        } else {
            std::thread::sleep(Duration::from_millis(10));
        }
    }
    panic!("engine did not complete the attempt in time");
}

#[test]
fn engine_runs_an_attempt_end_to_end() {
    // The handle hosts its own runtime thread; this one only serves wiremock.
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/create-repo"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": "https://x.example/app"})),
            )
            .mount(&server)
            .await;
        server
    });

    let settings = ProvisionSettings::new(&server.uri()).expect("valid settings");
    let engine = EngineHandle::new(settings);
    engine.start(1);

    let events = drain_until_completed(&engine);
    let stages: Vec<Stage> = events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::Progress(progress) => Some(progress.stage),
            _ => None,
        })
        .collect();
    assert_eq!(
        stages,
        vec![Stage::CreatingRepository, Stage::AwaitingDeployment]
    );

    match events.last() {
        Some(EngineEvent::AttemptCompleted { attempt, result }) => {
            assert_eq!(*attempt, 1);
            let outcome = result.as_ref().expect("attempt succeeds");
            assert_eq!(outcome.app_url.as_deref(), Some("https://x.example/app"));
        }
        other => panic!("expected completion event, got {other:?}"),
    }
}
