//! Drives a task through its whole lifecycle via the services, checking
//! that every step refetches through the cache and that disallowed
//! transitions never reach the transport.

use serde_json::{json, Value};
use taskboard_atoms::tasks::model::TaskStatus;
use taskboard_atoms::tasks::service::{change_status, get_task, load_tasks};
use taskboard_client::{Error, QueryCache, QueryKey};
use taskboard_test_utils::FakeApi;

fn task_json(status: &str) -> Value {
    json!({
        "id": 10,
        "project_id": 1,
        "title": "Launch checklist",
        "description": null,
        "priority": "high",
        "status": status,
        "due_date": "2026-09-01",
        "assigned_to": 2,
        "created_at": "2026-08-29T08:00:00Z",
    })
}

#[tokio::test]
async fn full_lifecycle_with_cache_refetch_at_every_step() {
    let api = FakeApi::new();
    let cache = QueryCache::default();
    api.on("GET", "/projects/1/tasks", json!([task_json("to_do")]));
    api.on("GET", "/projects/1/tasks/10", task_json("to_do"));

    let tasks = load_tasks(&api, &cache, 1).await.unwrap();
    assert_eq!(tasks.len(), 1);
    let mut task = get_task(&api, &cache, 1, 10).await.unwrap();
    assert_eq!(task.status, TaskStatus::ToDo);

    // Forward through the whole flow, reopening at the end.
    let steps = [
        ("in_progress", TaskStatus::InProgress),
        ("under_review", TaskStatus::UnderReview),
        ("completed", TaskStatus::Completed),
        ("under_review", TaskStatus::UnderReview),
    ];
    for (wire, next) in steps {
        api.on("PUT", "/projects/1/tasks/10", task_json(wire));
        task = change_status(&api, &cache, &task, next).await.unwrap();
        assert_eq!(task.status, next);

        // The write dirtied both task keys; a fresh read must refetch.
        assert!(!cache.contains(&QueryKey::Tasks(1)).await);
        assert!(!cache.contains(&QueryKey::Task(10)).await);
        api.on("GET", "/projects/1/tasks/10", task_json(wire));
        let refetched = get_task(&api, &cache, 1, 10).await.unwrap();
        assert_eq!(refetched.status, next);
    }
}

#[tokio::test]
async fn reopened_task_cannot_jump_back_to_to_do() {
    let api = FakeApi::new();
    let cache = QueryCache::default();
    api.on("GET", "/projects/1/tasks/10", task_json("completed"));

    let task = get_task(&api, &cache, 1, 10).await.unwrap();
    let calls_before = api.call_count();

    let err = change_status(&api, &cache, &task, TaskStatus::ToDo)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));

    // No write was attempted and the cached entry survived.
    assert_eq!(api.call_count(), calls_before);
    assert!(cache.contains(&QueryKey::Task(10)).await);
}
