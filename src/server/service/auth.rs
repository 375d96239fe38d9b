//! Account registration and password login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{normalize_email, CreateUserParams, RegisterParams, User},
};

/// Service for password based authentication.
///
/// Hashing and verification run on the blocking pool.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account.
    ///
    /// The very first account becomes an admin so a fresh deployment can be managed
    /// without touching the database.
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created account
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.email).await? {
            return Err(email_taken());
        }

        let is_admin = user_repo.count().await? == 0;
        let hashed_password = hash_password(params.password).await?;

        let result = user_repo
            .create(CreateUserParams {
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                hashed_password,
                is_admin,
            })
            .await;

        let user = match result {
            Ok(user) => user,
            // Lost a race with a concurrent registration for the same email
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(email_taken())
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(user_id = user.id, admin = user.admin, "Registered new account");

        Ok(user)
    }

    /// Verifies credentials and records the login time.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with `last_login_at` updated
    /// - `Err(AuthError::InvalidCredentials)` - Email unknown or password mismatch
    /// - `Err(AuthError::AccountInactive)` - Account has been disabled
    pub async fn login(&self, email: &str, password: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = normalize_email(email).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(credentials) = user_repo.find_credentials(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, credentials.hashed_password).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user_id = credentials.user.id;
        if !credentials.user.active {
            return Err(AuthError::AccountInactive(user_id).into());
        }

        user_repo.touch_last_login(user_id).await?;

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}

fn email_taken() -> AppError {
    AppError::Conflict("An account with this email already exists".to_string())
}

async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(InternalError::from)??;

    Ok(hashed)
}

async fn verify_password(password: String, hashed_password: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hashed_password)
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Ok::<_, InternalError>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await
    .map_err(InternalError::from)??;

    Ok(matches)
}
