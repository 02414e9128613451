use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use readlater_client::{
    ClientSettings, GraphqlRequest, GraphqlTransport, PageScrapePayload, SaveArticleError,
    SaveArticleStatus, SaveCommand, SaveHandle, SaveOutcome, SaveService, TransportError,
    TransportFailure,
};
use serde_json::{json, Value};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(readlater_logging::initialize_for_tests);
}

/// Answers each operation with a canned body and records what was sent.
#[derive(Default)]
struct ScriptedTransport {
    sent: Arc<Mutex<Vec<GraphqlRequest>>>,
}

#[async_trait::async_trait]
impl GraphqlTransport for ScriptedTransport {
    async fn send(&self, request: GraphqlRequest) -> Result<Value, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        match request.body["operationName"].as_str() {
            Some("CreateArticleSavingRequest") => Ok(json!({
                "data": {
                    "createArticleSavingRequest": {
                        "__typename": "CreateArticleSavingRequestSuccess",
                        "articleSavingRequest": { "id": "job-1", "status": "PROCESSING" }
                    }
                }
            })),
            Some("ArticleSavingRequest") => Ok(json!({
                "data": {
                    "articleSavingRequest": {
                        "__typename": "ArticleSavingRequestSuccess",
                        "articleSavingRequest": { "id": "job-1", "status": "SUCCEEDED" }
                    }
                }
            })),
            _ => Err(TransportError::new(
                TransportFailure::Network,
                "connection reset",
            )),
        }
    }
}

fn collect(handle: &SaveHandle, count: usize) -> Vec<readlater_client::SaveEvent> {
    let mut events = Vec::new();
    while events.len() < count {
        match handle.recv_timeout(Duration::from_secs(5)) {
            Some(event) => events.push(event),
            None => panic!("timed out after {} of {} events", events.len(), count),
        }
    }
    events.sort_by_key(|event| event.request_id);
    events
}

#[test]
fn each_command_delivers_exactly_one_event() {
    init_logging();
    let transport = ScriptedTransport::default();
    let sent = transport.sent.clone();
    let settings = ClientSettings {
        auth_token: Some("tok".to_string()),
        ..ClientSettings::default()
    };
    let handle = SaveHandle::new(SaveService::new(transport, &settings)).expect("handle");

    let first = handle.submit(SaveCommand::SaveUrl {
        url: "https://example.com/a".to_string(),
    });
    let second = handle.submit(SaveCommand::PollStatus {
        job_id: "job-1".to_string(),
    });
    let third = handle.submit(SaveCommand::SavePage {
        payload: PageScrapePayload::html("https://example.com/a", "<p/>", None),
        upload_file_id: None,
    });

    let events = collect(&handle, 3);
    assert_eq!(
        events.iter().map(|e| e.request_id).collect::<Vec<_>>(),
        vec![first, second, third]
    );
    assert_eq!(
        events[0].outcome,
        SaveOutcome::Status(Ok(SaveArticleStatus::Processing {
            job_id: "job-1".to_string()
        }))
    );
    assert_eq!(
        events[1].outcome,
        SaveOutcome::Status(Ok(SaveArticleStatus::Succeeded))
    );
    assert_eq!(
        events[2].outcome,
        SaveOutcome::PageSaved(Err(SaveArticleError::unknown(
            "network error: connection reset"
        )))
    );

    std::thread::sleep(Duration::from_millis(50));
    assert!(handle.try_recv().is_none());

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
    assert!(sent.iter().all(|request| request.path == "/api/graphql"
        && request
            .headers
            .contains(&("Authorization".to_string(), "tok".to_string()))));
}

#[test]
fn transport_failure_is_delivered_as_unknown() {
    init_logging();
    let handle =
        SaveHandle::new(SaveService::new(ScriptedTransport::default(), &ClientSettings::default()))
            .expect("handle");

    handle.submit(SaveCommand::SavePage {
        payload: PageScrapePayload::url_only("https://example.com/a"),
        upload_file_id: Some("file-1".to_string()),
    });

    let event = handle
        .recv_timeout(Duration::from_secs(5))
        .expect("event delivered");
    assert_eq!(
        event.outcome.error(),
        Some(&SaveArticleError::unknown("network error: connection reset"))
    );
}

/// Panics on status lookups and answers everything else like the scripted transport.
#[derive(Default)]
struct FaultyTransport {
    inner: ScriptedTransport,
}

#[async_trait::async_trait]
impl GraphqlTransport for FaultyTransport {
    async fn send(&self, request: GraphqlRequest) -> Result<Value, TransportError> {
        if request.body["operationName"] == "ArticleSavingRequest" {
            panic!("transport bug");
        }
        self.inner.send(request).await
    }
}

#[test]
fn panicking_request_still_delivers_one_unknown_error() {
    init_logging();
    let handle =
        SaveHandle::new(SaveService::new(FaultyTransport::default(), &ClientSettings::default()))
            .expect("handle");

    let poll = handle.submit(SaveCommand::PollStatus {
        job_id: "job-1".to_string(),
    });
    let save = handle.submit(SaveCommand::SaveUrl {
        url: "https://example.com/a".to_string(),
    });

    let events = collect(&handle, 2);
    assert_eq!(events[0].request_id, poll);
    match &events[0].outcome {
        SaveOutcome::Status(Err(SaveArticleError::Unknown { description })) => {
            assert!(description.contains("panicked"), "{description}");
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    assert_eq!(events[1].request_id, save);
    assert_eq!(
        events[1].outcome,
        SaveOutcome::Status(Ok(SaveArticleStatus::Processing {
            job_id: "job-1".to_string()
        }))
    );

    std::thread::sleep(Duration::from_millis(50));
    assert!(handle.try_recv().is_none());
}
