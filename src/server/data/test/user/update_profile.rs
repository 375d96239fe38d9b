use super::*;

/// Tests that only the supplied profile fields change.
///
/// Expected: Ok(Some(User)) with timezone updated and first name untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Tanvir")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateUserParams {
                timezone: Some("Asia/Dhaka".to_string()),
                last_name: Some(Some("Ahmed".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Tanvir");
    assert_eq!(updated.last_name.as_deref(), Some("Ahmed"));
    assert_eq!(updated.timezone, "Asia/Dhaka");
    assert_eq!(updated.language, "en");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(4242, UpdateUserParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
