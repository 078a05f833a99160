use taskboard_client::{Api, Error, QueryCache, QueryKey};

use super::model::{AddMemberPayload, Project};
use crate::users::model::{Role, User};

/// Member writes dirty the project-with-members entry and the project list.
fn member_write_invalidates(project_id: i64) -> Vec<QueryKey> {
    vec![QueryKey::Project(project_id), QueryKey::Projects]
}

/// Load all projects visible to the current user.
pub async fn load_projects(api: &dyn Api, cache: &QueryCache) -> Result<Vec<Project>, Error> {
    cache.fetch_as(QueryKey::Projects, api.get("/projects")).await
}

/// Get a single project including its member list.
pub async fn get_project(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
) -> Result<Project, Error> {
    let path = format!("/projects/{}", project_id);
    cache
        .fetch_as(QueryKey::Project(project_id), api.get(&path))
        .await
}

/// Add a user to a project's member list.
pub async fn add_member(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    user_id: i64,
) -> Result<(), Error> {
    let path = format!("/projects/{}/members", project_id);
    let payload = AddMemberPayload { user_id };
    api.post(&path, serde_json::to_value(&payload)?).await?;

    cache
        .invalidate_many(member_write_invalidates(project_id))
        .await;
    tracing::info!("added user {} to project {}", user_id, project_id);
    Ok(())
}

/// Remove a user from a project's member list. Confirmation is the caller's
/// responsibility; this performs the mutation directly.
pub async fn remove_member(
    api: &dyn Api,
    cache: &QueryCache,
    project_id: i64,
    user_id: i64,
) -> Result<(), Error> {
    let path = format!("/projects/{}/members/{}", project_id, user_id);
    api.delete(&path).await?;

    cache
        .invalidate_many(member_write_invalidates(project_id))
        .await;
    tracing::info!("removed user {} from project {}", user_id, project_id);
    Ok(())
}

/// Users that can still be added to the project: the global list minus
/// current members. Both lists must already be loaded, which the signature
/// makes explicit.
pub fn available_users(all_users: &[User], project: &Project) -> Vec<User> {
    all_users
        .iter()
        .filter(|u| !project.members.iter().any(|m| m.user_id == u.id))
        .cloned()
        .collect()
}

/// Only admins may change a project's member list.
pub fn can_manage_members(user: &User) -> bool {
    user.role == Role::Admin
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use taskboard_test_utils::FakeApi;

    fn user(id: i64, role: Role) -> User {
        User {
            id,
            username: Some(format!("user{}", id)),
            email: format!("user{}@example.com", id),
            role,
        }
    }

    fn project_with_members(member_user_ids: &[i64]) -> Project {
        serde_json::from_value(json!({
            "id": 1,
            "title": "Website relaunch",
            "description": null,
            "members": member_user_ids.iter().enumerate().map(|(i, uid)| json!({
                "id": i + 1,
                "user_id": uid,
                "username": format!("user{}", uid),
                "email": null,
                "role": "member",
            })).collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    #[test]
    fn available_users_excludes_current_members() {
        let users = vec![
            user(1, Role::Admin),
            user(2, Role::Member),
            user(3, Role::Member),
        ];
        let project = project_with_members(&[2]);

        let available = available_users(&users, &project);
        let ids: Vec<i64> = available.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn available_users_is_empty_when_everyone_is_a_member() {
        let users = vec![user(1, Role::Member), user(2, Role::Member)];
        let project = project_with_members(&[1, 2]);
        assert!(available_users(&users, &project).is_empty());
    }

    #[test]
    fn only_admins_manage_members() {
        assert!(can_manage_members(&user(1, Role::Admin)));
        assert!(!can_manage_members(&user(2, Role::Member)));
    }

    #[tokio::test]
    async fn get_project_caches_under_the_project_key() {
        let api = FakeApi::new();
        let cache = QueryCache::default();
        api.on(
            "GET",
            "/projects/1",
            json!({"id": 1, "title": "Website relaunch", "members": []}),
        );

        let project = get_project(&api, &cache, 1).await.unwrap();
        assert_eq!(project.title, "Website relaunch");

        get_project(&api, &cache, 1).await.unwrap();
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn add_member_invalidates_project_and_list_keys() {
        let api = FakeApi::new();
        let cache = QueryCache::default();
        api.on("GET", "/projects", json!([{"id": 1, "title": "Website relaunch"}]));
        api.on(
            "GET",
            "/projects/1",
            json!({"id": 1, "title": "Website relaunch", "members": []}),
        );
        api.on("POST", "/projects/1/members", Value::Null);

        load_projects(&api, &cache).await.unwrap();
        get_project(&api, &cache, 1).await.unwrap();

        add_member(&api, &cache, 1, 3).await.unwrap();
        assert!(!cache.contains(&QueryKey::Project(1)).await);
        assert!(!cache.contains(&QueryKey::Projects).await);

        // The mutation carried the selected user id.
        let calls = api.calls();
        let post = calls.iter().find(|c| c.method == "POST").unwrap();
        assert_eq!(post.body, Some(json!({"user_id": 3})));
    }

    #[tokio::test]
    async fn failed_remove_leaves_the_cache_alone() {
        let api = FakeApi::new();
        let cache = QueryCache::default();
        api.on(
            "GET",
            "/projects/1",
            json!({"id": 1, "title": "Website relaunch", "members": []}),
        );
        api.on_error(
            "DELETE",
            "/projects/1/members/3",
            Error::Api {
                status: 403,
                message: "admin role required".to_string(),
            },
        );

        get_project(&api, &cache, 1).await.unwrap();

        let err = remove_member(&api, &cache, 1, 3).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 403, .. }));
        assert!(cache.contains(&QueryKey::Project(1)).await);
    }

    #[tokio::test]
    async fn remove_member_invalidates_project_and_list_keys() {
        let api = FakeApi::new();
        let cache = QueryCache::default();
        api.on(
            "GET",
            "/projects/1",
            json!({"id": 1, "title": "Website relaunch", "members": []}),
        );
        api.on("DELETE", "/projects/1/members/3", Value::Null);

        get_project(&api, &cache, 1).await.unwrap();

        remove_member(&api, &cache, 1, 3).await.unwrap();
        assert!(!cache.contains(&QueryKey::Project(1)).await);
    }
}
