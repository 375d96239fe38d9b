use super::*;

/// Tests pagination across multiple pages.
///
/// Expected: Ok with page-sized chunks ordered by email and the full total
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 1..=5 {
        factory::user::UserFactory::new(db)
            .email(format!("member{}@example.com", i))
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo
        .get_all_paginated(&PageRequest::new(1, 2, None).unwrap())
        .await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);
    assert_eq!(users[0].email, "member1@example.com");

    let (users, _) = repo
        .get_all_paginated(&PageRequest::new(3, 2, None).unwrap())
        .await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "member5@example.com");

    Ok(())
}

/// Tests searching by email or first name, case-insensitively.
///
/// Expected: Ok with only matching users counted
#[tokio::test]
async fn filters_by_email_or_first_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .first_name("Farhana")
        .email("f.k@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .first_name("Imran")
        .email("farhan.guest@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .first_name("Sadia")
        .email("sadia@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(&PageRequest::new(1, 10, Some("FARHAN".to_string())).unwrap())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(users.len(), 2);

    Ok(())
}
