use axum::http::StatusCode;
use merge_dns_domain::RecordSet;
use merge_dns_jobs::{JobRunner, SnapshotStore, WatchHandle};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;

#[path = "../common/mod.rs"]
mod common;
use common::{local_document, records_document, remote_document, Pipeline, TestRemote, Workspace};

const POLL: Duration = Duration::from_millis(50);

async fn start_watch(pipeline: &Pipeline, token: CancellationToken) -> WatchHandle {
    let initial = pipeline.update.execute().await.expect("initial merge");
    let store = SnapshotStore::spawn(initial.local, initial.remote);

    JobRunner::new(store, pipeline.merge.clone())
        .with_local_source(pipeline.refresh_local.clone(), POLL)
        .with_remote_source(pipeline.refresh_remote.clone(), POLL)
        .with_cancellation(token)
        .start()
}

async fn wait_for_destination<F>(workspace: &Workspace, predicate: F) -> RecordSet
where
    F: Fn(&RecordSet) -> bool,
{
    timeout(Duration::from_secs(5), async {
        loop {
            if let Some(records) = workspace.read_destination() {
                if predicate(&records) {
                    return records;
                }
            }
            sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("destination did not reach the expected state")
}

fn domains(records: &RecordSet) -> Vec<&str> {
    records.records.iter().map(|r| r.domain()).collect()
}

// ============================================================================
// Watch mode
// ============================================================================

#[tokio::test]
async fn test_watch_rewrites_destination_when_local_changes() {
    // Arrange
    let remote = TestRemote::start(&remote_document(12)).await;
    let workspace = Workspace::new(&local_document(3));
    let pipeline = Pipeline::from_config(&workspace.config(&remote.endpoint(), &["^web$"]));
    let token = CancellationToken::new();
    let watch = start_watch(&pipeline, token.clone()).await;

    // Act
    workspace.write_local(&records_document(
        4,
        &[
            ("l1", "bosh-dns", "10.0.0.1", "local.internal"),
            ("l2", "bosh-dns", "10.0.0.2", "local2.internal"),
        ],
    ));
    let written = wait_for_destination(&workspace, |r| r.len() == 3).await;

    // Assert
    assert_eq!(
        domains(&written),
        vec!["local.internal", "local2.internal", "web.internal"]
    );

    token.cancel();
    watch.wait().await.unwrap();
}

#[tokio::test]
async fn test_watch_rewrites_destination_when_remote_changes() {
    // Arrange
    let remote = TestRemote::start(&remote_document(12)).await;
    let workspace = Workspace::new(&local_document(3));
    let pipeline = Pipeline::from_config(&workspace.config(&remote.endpoint(), &["^web"]));
    let token = CancellationToken::new();
    let watch = start_watch(&pipeline, token.clone()).await;

    // Act - new remote version drops the canary
    remote
        .serve(&records_document(
            13,
            &[
                ("r1", "web", "10.1.0.1", "web.internal"),
                ("r2", "db", "10.1.0.2", "db.internal"),
            ],
        ))
        .await;
    let written = wait_for_destination(&workspace, |r| r.len() == 2).await;

    // Assert
    assert_eq!(domains(&written), vec!["local.internal", "web.internal"]);

    token.cancel();
    watch.wait().await.unwrap();
}

#[tokio::test]
async fn test_watch_survives_remote_outage() {
    // Arrange
    let remote = TestRemote::start(&remote_document(12)).await;
    let workspace = Workspace::new(&local_document(3));
    let pipeline = Pipeline::from_config(&workspace.config(&remote.endpoint(), &[]));
    let token = CancellationToken::new();
    let watch = start_watch(&pipeline, token.clone()).await;
    let before = workspace.read_destination().unwrap();

    // Act - several failed polls, no rewrite
    remote.fail_with(Some(StatusCode::SERVICE_UNAVAILABLE)).await;
    let hits = remote.hits();
    timeout(Duration::from_secs(5), async {
        while remote.hits() < hits + 3 {
            sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .unwrap();
    assert_eq!(workspace.read_destination().unwrap(), before);

    // Recovery with a new version triggers a merge
    remote
        .serve(&records_document(13, &[("r9", "web", "10.1.0.9", "new.internal")]))
        .await;
    remote.fail_with(None).await;
    let written = wait_for_destination(&workspace, |r| r.len() == 2).await;

    // Assert
    assert_eq!(domains(&written), vec!["local.internal", "new.internal"]);

    token.cancel();
    watch.wait().await.unwrap();
}

#[tokio::test]
async fn test_watch_unchanged_sources_do_not_rewrite() {
    // Arrange
    let remote = TestRemote::start(&remote_document(12)).await;
    let workspace = Workspace::new(&local_document(3));
    let pipeline = Pipeline::from_config(&workspace.config(&remote.endpoint(), &[]));
    let token = CancellationToken::new();
    let watch = start_watch(&pipeline, token.clone()).await;

    // Replace the destination out of band; only a merge would overwrite it
    workspace.write_destination(&records_document(0, &[]));

    // Act
    sleep(POLL * 6).await;

    // Assert
    assert!(workspace.read_destination().unwrap().is_empty());

    token.cancel();
    watch.wait().await.unwrap();
}

#[tokio::test]
async fn test_watch_stops_on_schema_mismatch() {
    // Arrange
    let remote = TestRemote::start(&remote_document(12)).await;
    let workspace = Workspace::new(&local_document(3));
    let pipeline = Pipeline::from_config(&workspace.config(&remote.endpoint(), &[]));
    let watch = start_watch(&pipeline, CancellationToken::new()).await;

    // Act - remote switches to a different key layout
    remote
        .serve(r#"{"record_keys": ["id"], "record_infos": [["r1"]], "version": 13,
                   "records": [["10.1.0.1", "web.internal"]]}"#)
        .await;
    let result = timeout(Duration::from_secs(5), watch.wait()).await.unwrap();

    // Assert
    assert!(result.unwrap_err().is_fatal());
}
