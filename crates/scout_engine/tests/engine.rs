use std::time::{Duration, Instant};

use scout_core::{SubmissionRequest, TaskStatus};
use scout_engine::{ApiSettings, EngineEvent, EngineHandle, FailureKind};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    scout_logging::initialize_for_tests();
}

fn engine_for(server: &MockServer) -> EngineHandle {
    EngineHandle::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
    .expect("engine starts")
}

async fn next_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no engine event within 5s");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_reports_back_with_session() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "pending",
            "task_id": "t1",
            "message": "queued"
        })))
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    engine.submit(
        7,
        SubmissionRequest {
            url: "https://www.ticketmaster.com/a/event/b".to_string(),
            code: "X".to_string(),
        },
    );

    assert_eq!(
        next_event(&engine).await,
        EngineEvent::Submitted {
            session: 7,
            result: Ok(TaskStatus::Pending {
                task_id: Some("t1".to_string()),
                message: "queued".to_string(),
            }),
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_status_request_reports_transport_error() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/t1"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    engine.fetch_status(2, "t1");

    match next_event(&engine).await {
        EngineEvent::StatusFetched {
            session: 2,
            result: Err(err),
        } => assert_eq!(err.kind, FailureKind::HttpStatus(502)),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn poll_timer_reports_due_and_can_be_cancelled() {
    init_logging();
    let server = MockServer::start().await;
    let engine = engine_for(&server);

    engine.schedule_poll(4, Duration::from_millis(20));
    assert!(engine.has_pending_poll());
    assert_eq!(next_event(&engine).await, EngineEvent::PollDue { session: 4 });

    engine.schedule_poll(5, Duration::from_secs(60));
    assert!(engine.has_pending_poll());
    assert!(engine.cancel_polling());
    assert!(!engine.has_pending_poll());
}
