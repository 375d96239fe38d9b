use super::*;
use crate::server::{model::user::UpdateUserParams, service::user::UserService};

/// Tests a partial profile update that clears the last name.
///
/// Expected: first name and timezone changed, last name cleared, language kept
#[tokio::test]
async fn updates_allow_listed_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update_profile(
            user.id,
            UpdateUserParams {
                first_name: Some("Rafi".to_string()),
                last_name: Some(None),
                language: None,
                timezone: Some("Asia/Dhaka".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Rafi");
    assert_eq!(updated.last_name, None);
    assert_eq!(updated.timezone, "Asia/Dhaka");
    assert_eq!(updated.language, user.language);

    Ok(())
}

/// Tests an empty update.
///
/// Expected: Ok with the unchanged profile
#[tokio::test]
async fn empty_update_returns_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let unchanged = UserService::new(db)
        .update_profile(user.id, UpdateUserParams::default())
        .await?;

    assert_eq!(unchanged.first_name, user.first_name);

    Ok(())
}

/// Tests the page metadata of the user listing.
///
/// Expected: 3 users over pages of 2 gives 2 pages, 1 on the last
#[tokio::test]
async fn lists_users_with_page_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let page = UserService::new(db)
        .list(PageRequest::new(2, 2, None)?)
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.users.len(), 1);

    Ok(())
}
