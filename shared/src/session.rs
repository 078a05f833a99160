use taskboard_atoms::comments::model::Comment;
use taskboard_atoms::comments::service::can_delete_comment;
use taskboard_atoms::projects::service::can_manage_members;
use taskboard_atoms::users::model::{Role, User};

/// Current signed-in user, as resolved by the host app's auth layer.
///
/// Bundles the permission predicates the views need so they don't have to
/// thread the raw `User` around.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    pub fn can_manage_members(&self) -> bool {
        can_manage_members(&self.user)
    }

    pub fn can_delete_comment(&self, comment: &Comment) -> bool {
        can_delete_comment(comment, &self.user)
    }
}
