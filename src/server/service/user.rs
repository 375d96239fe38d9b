//! Profile reads and updates for accounts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        page::PageRequest,
        user::{PaginatedUsers, UpdateUserParams, User},
    },
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Applies an allow-listed partial update to the user's profile.
    ///
    /// An empty update returns the current profile unchanged.
    ///
    /// # Returns
    /// - `Ok(User)` - Profile after the update
    /// - `Err(AuthError::UserNotInDatabase)` - User was deleted mid-session
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = if params.is_empty() {
            user_repo.find_by_id(user_id).await?
        } else {
            user_repo.update_profile(user_id, params).await?
        };

        user.ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Retrieves one page of accounts ordered by email.
    pub async fn list(&self, request: PageRequest) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(&request)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: request.total_pages(total),
        })
    }
}
