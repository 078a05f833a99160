use taskboard_client::{Api, Error, QueryCache, QueryKey};

use super::model::{CreateTaskPayload, Task, TaskStatus, UpdateTaskPayload};

/// Cache keys a task write dirties: the project's task list plus, when the
/// task id is known, the single-task entry.
fn write_invalidates(project_id: i64, task_id: Option<i64>) -> Vec<QueryKey> {
    let mut keys = vec![QueryKey::Tasks(project_id)];
    if let Some(task_id) = task_id {
        keys.push(QueryKey::Task(task_id));
    }
    keys
}

/// Load all tasks for a project.
pub async fn load_tasks(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
) -> Result<Vec<Task>, Error> {
    let path = format!("/projects/{}/tasks", project_id);
    cache
        .fetch_as(QueryKey::Tasks(project_id), api.get(&path))
        .await
}

/// Get a single task.
pub async fn get_task(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    task_id: i64,
) -> Result<Task, Error> {
    let path = format!("/projects/{}/tasks/{}", project_id, task_id);
    cache.fetch_as(QueryKey::Task(task_id), api.get(&path)).await
}

/// Create a task in a project. Validation runs before any request; the
/// dependent cache keys are invalidated only once the server confirms.
pub async fn create_task(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    payload: CreateTaskPayload,
) -> Result<Task, Error> {
    payload.validate()?;

    let path = format!("/projects/{}/tasks", project_id);
    let created = api.post(&path, serde_json::to_value(&payload)?).await?;
    let task: Task = serde_json::from_value(created)?;

    cache
        .invalidate_many(write_invalidates(project_id, Some(task.id)))
        .await;
    tracing::info!("created task {} in project {}", task.id, project_id);
    Ok(task)
}

/// Update a task. A failed request leaves every cache entry untouched.
pub async fn update_task(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    task_id: i64,
    payload: UpdateTaskPayload,
) -> Result<Task, Error> {
    payload.validate()?;

    let path = format!("/projects/{}/tasks/{}", project_id, task_id);
    let updated = api.put(&path, serde_json::to_value(&payload)?).await?;
    let task: Task = serde_json::from_value(updated)?;

    cache
        .invalidate_many(write_invalidates(project_id, Some(task_id)))
        .await;
    Ok(task)
}

/// Move a task to `next` if the lifecycle table allows it. A disallowed
/// transition is rejected here and never reaches the network.
pub async fn change_status(
    api: &dyn Api,
    cache: &QueryCache,
    task: &Task,
    next: TaskStatus,
) -> Result<Task, Error> {
    if !task.status.can_transition_to(next) {
        return Err(Error::InvalidTransition {
            from: task.status.to_string(),
            to: next.to_string(),
        });
    }

    let payload = UpdateTaskPayload {
        status: Some(next),
        ..Default::default()
    };
    let updated = update_task(api, cache, task.project_id, task.id, payload).await?;
    tracing::info!("task {} moved {} -> {}", task.id, task.status, next);
    Ok(updated)
}

/// Delete a task.
pub async fn delete_task(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    task_id: i64,
) -> Result<(), Error> {
    let path = format!("/projects/{}/tasks/{}", project_id, task_id);
    api.delete(&path).await?;

    cache
        .invalidate_many(write_invalidates(project_id, Some(task_id)))
        .await;
    tracing::info!("deleted task {} from project {}", task_id, project_id);
    Ok(())
}
