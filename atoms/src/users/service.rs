use taskboard_client::{Api, Error, QueryCache, QueryKey};

use super::model::User;

/// Global user list, shared by assignee pickers and member management.
pub async fn load_users(api: &dyn Api, cache: &QueryCache) -> Result<Vec<User>, Error> {
    cache.fetch_as(QueryKey::Users, api.get("/users")).await
}
