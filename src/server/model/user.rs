//! User domain models and parameters.
//!
//! Provides the account model returned by repositories along with the parameter types
//! used for registration, login and allow-listed profile updates.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{PaginatedUsersDto, RegisterDto, UpdateProfileDto, UserDto},
    server::{error::AppError, util::normalize::optional_text},
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub language: String,
    pub timezone: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// Inactive accounts cannot log in.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            language: self.language,
            timezone: self.timezone,
            admin: self.admin,
            active: self.active,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            language: entity.language,
            timezone: entity.timezone,
            admin: entity.is_admin,
            active: entity.is_active,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }
}

/// A user together with the stored password hash, only used by login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub hashed_password: String,
}

/// Lowercases and trims an email, rejecting anything without a local part and domain.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::Validation("A valid email address is required".to_string())),
    }
}

/// Validated registration input. The password is still plain text at this point.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let first_name = dto.first_name.trim().to_string();
        if first_name.is_empty() {
            return Err(AppError::Validation("First name is required".to_string()));
        }

        if dto.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(Self {
            first_name,
            last_name: optional_text(dto.last_name),
            email: normalize_email(&dto.email)?,
            password: dto.password,
        })
    }
}

/// Row values for a new account, password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
}

/// Allow-listed profile fields. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub first_name: Option<String>,
    /// `Some(None)` clears the last name.
    pub last_name: Option<Option<String>>,
    pub language: Option<String>,
    pub timezone: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        let first_name = match dto.first_name {
            Some(name) if name.trim().is_empty() => {
                return Err(AppError::Validation("First name cannot be empty".to_string()))
            }
            Some(name) => Some(name.trim().to_string()),
            None => None,
        };

        Ok(Self {
            first_name,
            last_name: dto.last_name.map(|name| optional_text(Some(name))),
            language: optional_text(dto.language),
            timezone: optional_text(dto.timezone),
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto(email: &str, password: &str) -> RegisterDto {
        RegisterDto {
            first_name: " Nadia ".to_string(),
            last_name: Some("  ".to_string()),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn normalizes_registration_input() {
        let params = RegisterParams::from_dto(register_dto(" Nadia@Example.COM ", "longenough")).unwrap();

        assert_eq!(params.first_name, "Nadia");
        assert_eq!(params.last_name, None);
        assert_eq!(params.email, "nadia@example.com");
    }

    #[test]
    fn rejects_short_password_and_bad_email() {
        assert!(matches!(
            RegisterParams::from_dto(register_dto("nadia@example.com", "short")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            RegisterParams::from_dto(register_dto("not-an-email", "longenough")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn profile_update_keeps_absent_fields_untouched() {
        let params = UpdateUserParams::from_dto(UpdateProfileDto {
            timezone: Some("Asia/Dhaka".to_string()),
            last_name: Some(String::new()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.first_name, None);
        assert_eq!(params.last_name, Some(None));
        assert_eq!(params.timezone.as_deref(), Some("Asia/Dhaka"));
        assert!(UpdateUserParams::default().is_empty());
    }
}
