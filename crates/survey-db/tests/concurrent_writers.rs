//! Overlapping writers on one handle and across handles on one file.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::Barrier;

use survey_db::SurveyDb;
use survey_db::error::DatabaseError;
use survey_db::service::SurveyService;

const TASKS: usize = 16;

async fn file_service(path: &str) -> SurveyService {
    SurveyService::new(SurveyDb::open_local(path).await.unwrap())
}

/// Spawn `TASKS` assigns of the same pair, released together, round-robin
/// over `services`, and return how many reported a fresh assignment.
async fn race_assign(services: &[Arc<SurveyService>], user_id: i64, form_id: i64) -> usize {
    let barrier = Arc::new(Barrier::new(TASKS));
    let handles: Vec<_> = (0..TASKS)
        .map(|i| {
            let svc = Arc::clone(&services[i % services.len()]);
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                svc.assign_form_to_user(user_id, form_id, None).await
            })
        })
        .collect();

    let mut assigned = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            assigned += 1;
        }
    }
    assigned
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_assigns_on_one_handle_insert_once() {
    let svc = Arc::new(SurveyService::new_local(":memory:").await.unwrap());
    let user = svc.create_user("Ann", "staff").await.unwrap();
    let form = svc
        .create_form("Q1", "desc", &json!({}), "survey")
        .await
        .unwrap();

    let assigned = race_assign(&[Arc::clone(&svc)], user.id, form.id).await;

    assert_eq!(assigned, 1);
    assert_eq!(svc.list_assignments_for_user(user.id).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_assigns_across_handles_insert_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.db");
    let path = path.to_str().unwrap();

    let a = Arc::new(file_service(path).await);
    let b = Arc::new(file_service(path).await);
    let user = a.create_user("Ann", "staff").await.unwrap();
    let form = a
        .create_form("Q1", "desc", &json!({}), "survey")
        .await
        .unwrap();

    let assigned = race_assign(&[Arc::clone(&a), Arc::clone(&b)], user.id, form.id).await;

    assert_eq!(assigned, 1);
    assert_eq!(a.list_assignments_for_user(user.id).await.unwrap().len(), 1);
    assert_eq!(b.list_assignments_for_user(user.id).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn writer_waits_for_lock_held_by_other_handle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.db");
    let path = path.to_str().unwrap();

    let a = file_service(path).await;
    let b = Arc::new(file_service(path).await);
    let user = a.create_user("Ann", "staff").await.unwrap();
    let form = a
        .create_form("Q1", "desc", &json!({}), "survey")
        .await
        .unwrap();

    let held = a.db().begin().await.unwrap();
    let waiting = {
        let b = Arc::clone(&b);
        tokio::spawn(async move { b.assign_form_to_user(user.id, form.id, None).await })
    };

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!waiting.is_finished(), "second handle should block on the write lock");

    held.finish(Ok::<(), DatabaseError>(())).await.unwrap();
    assert!(waiting.await.unwrap().unwrap());
    assert!(a.get_assignment(user.id, form.id).await.unwrap().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn busy_timeout_bounds_the_wait() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.db");
    let path = path.to_str().unwrap();

    let a = file_service(path).await;
    let b = SurveyService::new(
        SurveyDb::open_local_with_timeout(path, Duration::from_millis(50))
            .await
            .unwrap(),
    );

    let held = a.db().begin().await.unwrap();
    let err = b.create_user("Bob", "staff").await.unwrap_err();
    assert!(!err.is_conflict(), "lock timeout is not a uniqueness conflict: {err}");
    held.finish(Ok::<(), DatabaseError>(())).await.unwrap();

    assert!(b.create_user("Bob", "staff").await.is_ok());
}
