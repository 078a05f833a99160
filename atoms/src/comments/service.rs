use taskboard_client::{Api, Error, QueryCache, QueryKey};

use super::model::{Comment, CreateCommentPayload};
use crate::users::model::{Role, User};

fn write_invalidates(task_id: i64) -> Vec<QueryKey> {
    vec![QueryKey::Comments(task_id)]
}

/// Author-or-admin rule for removing a comment. Evaluated client-side so the
/// delete action can be hidden and rejected without a round trip; the server
/// enforces the same rule authoritatively.
pub fn can_delete_comment(comment: &Comment, user: &User) -> bool {
    comment.user_id == user.id || user.role == Role::Admin
}

/// Load all comments on a task.
pub async fn load_comments(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    task_id: i64,
) -> Result<Vec<Comment>, Error> {
    let path = format!("/projects/{}/tasks/{}/comments", project_id, task_id);
    cache
        .fetch_as(QueryKey::Comments(task_id), api.get(&path))
        .await
}

/// Append a comment to a task.
pub async fn create_comment(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    task_id: i64,
    payload: CreateCommentPayload,
) -> Result<Comment, Error> {
    payload.validate()?;

    let path = format!("/projects/{}/tasks/{}/comments", project_id, task_id);
    let created = api.post(&path, serde_json::to_value(&payload)?).await?;
    let comment: Comment = serde_json::from_value(created)?;

    cache.invalidate_many(write_invalidates(task_id)).await;
    Ok(comment)
}

/// Delete a comment on behalf of `requester`. Callers that fail the
/// author-or-admin check are rejected before any request is issued.
pub async fn delete_comment(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    comment: &Comment,
    requester: &User,
) -> Result<(), Error> {
    if !can_delete_comment(comment, requester) {
        return Err(Error::PermissionDenied(
            "only the author or an admin can delete a comment".to_string(),
        ));
    }

    let path = format!(
        "/projects/{}/tasks/{}/comments/{}",
        project_id, comment.task_id, comment.id
    );
    api.delete(&path).await?;

    cache.invalidate_many(write_invalidates(comment.task_id)).await;
    tracing::info!("deleted comment {} on task {}", comment.id, comment.task_id);
    Ok(())
}
