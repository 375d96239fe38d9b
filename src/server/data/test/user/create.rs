use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        first_name: "Nadia".to_string(),
        last_name: None,
        email: email.to_string(),
        hashed_password: "hash".to_string(),
        is_admin: false,
    }
}

/// Tests creating a user with defaults for language and timezone.
///
/// Expected: Ok(User) that is active, not admin, never logged in
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("nadia@example.com")).await?;

    assert_eq!(user.email, "nadia@example.com");
    assert_eq!(user.language, "en");
    assert_eq!(user.timezone, "UTC");
    assert!(user.active);
    assert!(!user.admin);
    assert!(user.last_login_at.is_none());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests credentials lookup returns the stored hash.
///
/// Expected: Some(UserCredentials) for a known email, None otherwise
#[tokio::test]
async fn finds_credentials_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("rafi@example.com")).await?;

    let credentials = repo.find_credentials("rafi@example.com").await?.unwrap();
    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.hashed_password, "hash");

    assert!(repo.find_credentials("nobody@example.com").await?.is_none());
    assert!(repo.email_exists("rafi@example.com").await?);

    Ok(())
}

/// Tests the last login timestamp is recorded.
///
/// Expected: last_login_at is set after touch_last_login
#[tokio::test]
async fn records_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.touch_last_login(user.id).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert!(reloaded.last_login_at.is_some());

    Ok(())
}
