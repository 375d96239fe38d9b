use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    Admin,
}

/// Resolves the session to an authenticated user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user if they hold every permission in `permissions`.
    ///
    /// An empty slice only requires a valid login.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with the required permissions
    /// - `Err(AuthError::UserNotInSession)` - No login in this session (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists (401)
    /// - `Err(AuthError::AccountInactive)` - Account disabled since login (403)
    /// - `Err(AuthError::AccessDenied)` - Missing permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.active {
            return Err(AuthError::AccountInactive(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin-only action without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
