//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It converts
//! entity models to `User` domain models at the boundary and never returns password
//! hashes except through `find_credentials`.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::PageRequest,
    user::{CreateUserParams, UpdateUserParams, User, UserCredentials, DEFAULT_LANGUAGE, DEFAULT_TIMEZONE},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            hashed_password: ActiveValue::Set(params.hashed_password),
            language: ActiveValue::Set(DEFAULT_LANGUAGE.to_string()),
            timezone: ActiveValue::Set(DEFAULT_TIMEZONE.to_string()),
            is_admin: ActiveValue::Set(params.is_admin),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a user and their password hash by (normalized) email.
    pub async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hashed_password = e.hashed_password.clone();
            UserCredentials {
                user: User::from_entity(e),
                hashed_password,
            }
        }))
    }

    /// Counts all accounts. Used to grant admin to the very first registration.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::LastLoginAt, Expr::value(Some(Utc::now())))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies the allow-listed profile fields that are present.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();

        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(language) = params.language {
            active.language = ActiveValue::Set(language);
        }
        if let Some(timezone) = params.timezone {
            active.timezone = ActiveValue::Set(timezone);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Gets a page of users ordered by email, optionally filtered on email or first name.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Page of users and the total matching the filter
    pub async fn get_all_paginated(&self, request: &PageRequest) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(pattern) = request.like_pattern() {
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::Email)))
                            .like(LikeExpr::new(pattern.clone()).escape('\\')),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::FirstName)))
                            .like(LikeExpr::new(pattern).escape('\\')),
                    ),
            );
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Email)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(request.index()).await?;

        Ok((users.into_iter().map(User::from_entity).collect(), total))
    }
}
