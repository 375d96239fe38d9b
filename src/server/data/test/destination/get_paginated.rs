use super::*;

/// Tests ordering by name with id as the tie breaker.
///
/// Expected: Ok with names ascending and equal names by id
#[tokio::test]
async fn orders_by_name_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sylhet = factory::destination::DestinationFactory::new(db)
        .name("Sylhet")
        .build()
        .await?;
    let bandarban_a = factory::destination::DestinationFactory::new(db)
        .name("Bandarban")
        .build()
        .await?;
    let bandarban_b = factory::destination::DestinationFactory::new(db)
        .name("Bandarban")
        .build()
        .await?;

    let repo = DestinationRepository::new(db);
    let (page, total) = repo
        .get_paginated(&PageRequest::new(1, 10, None).unwrap())
        .await?;

    let ids: Vec<i32> = page.iter().map(|s| s.destination.id).collect();
    assert_eq!(total, 3);
    assert_eq!(ids, vec![bandarban_a.id, bandarban_b.id, sylhet.id]);

    Ok(())
}

/// Tests case-insensitive substring search with a matching total.
///
/// Expected: Ok with only names containing the term
#[tokio::test]
async fn searches_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Cox's Bazar", "Bazar Road", "Sajek Valley"] {
        factory::destination::DestinationFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = DestinationRepository::new(db);
    let (page, total) = repo
        .get_paginated(&PageRequest::new(1, 10, Some("BAZAR".to_string())).unwrap())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|s| s.destination.name.contains("Bazar")));

    Ok(())
}

/// Tests that wildcard characters in the search term match literally.
///
/// Expected: `%` only matches names containing a percent sign
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::destination::DestinationFactory::new(db)
        .name("100% Green")
        .build()
        .await?;
    factory::destination::DestinationFactory::new(db)
        .name("Srimangal")
        .build()
        .await?;

    let repo = DestinationRepository::new(db);
    let (_, total) = repo
        .get_paginated(&PageRequest::new(1, 10, Some("%".to_string())).unwrap())
        .await?;

    assert_eq!(total, 1);

    Ok(())
}

/// Tests that a page past the end is empty rather than an error.
///
/// Expected: Ok with no items and the full total
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_destination(db).await?;
    factory::create_destination(db).await?;

    let repo = DestinationRepository::new(db);
    let (page, total) = repo
        .get_paginated(&PageRequest::new(5, 10, None).unwrap())
        .await?;

    assert!(page.is_empty());
    assert_eq!(total, 2);

    Ok(())
}

/// Tests that summaries carry their destination images.
///
/// Expected: images attached to the right summary only
#[tokio::test]
async fn includes_destination_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let with_image = factory::destination::DestinationFactory::new(db)
        .name("A Destination")
        .build()
        .await?;
    factory::destination::DestinationFactory::new(db)
        .name("B Destination")
        .build()
        .await?;
    factory::create_destination_image(db, with_image.id).await?;

    let repo = DestinationRepository::new(db);
    let (page, _) = repo
        .get_paginated(&PageRequest::new(1, 10, None).unwrap())
        .await?;

    assert_eq!(page[0].images.len(), 1);
    assert!(page[1].images.is_empty());

    Ok(())
}
