mod common;

use common::{config_with, spawn_app};
use reqwest::StatusCode;
use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tokio::task::JoinSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_get_independent_responses() {
    let address = spawn_app(config_with(&[("INSTANCE_ID", "node-a")])).await;
    let client = reqwest::Client::new();
    let hostname = gethostname::gethostname().to_string_lossy().into_owned();

    let mut requests = JoinSet::new();
    for i in 0..100 {
        let client = client.clone();
        let url = if i % 10 == 0 {
            format!("{address}/health")
        } else {
            format!("{address}/request/{i}")
        };
        requests.spawn(async move {
            let response = client.get(url).send().await.expect("Failed to execute request");
            let status = response.status();
            let body = response.text().await.expect("Failed to read body");
            (i, status, body)
        });
    }

    let mut identities = 0;
    while let Some(result) = requests.join_next().await {
        let (i, status, body) = result.expect("Request task panicked");
        assert_eq!(status, StatusCode::OK, "request {i}");

        if i % 10 == 0 {
            assert_eq!(body, "OK", "request {i}");
            continue;
        }

        let value: Value = serde_json::from_str(&body).expect("Body should be JSON");
        let object = value.as_object().expect("Body should be a JSON object");
        assert_eq!(object.len(), 3, "request {i}");
        assert_eq!(object["instanceId"], "node-a", "request {i}");
        assert_eq!(object["hostname"], hostname.as_str(), "request {i}");
        let timestamp = object["timestamp"].as_str().unwrap();
        assert!(OffsetDateTime::parse(timestamp, &Rfc3339).is_ok(), "request {i}");
        identities += 1;
    }

    assert_eq!(identities, 90);
}
