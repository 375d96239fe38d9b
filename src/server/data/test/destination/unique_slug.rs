use super::*;

/// Tests slug derivation for an unused name.
///
/// Expected: Ok with the plain slug
#[tokio::test]
async fn derives_plain_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);

    assert_eq!(repo.unique_slug("Cox's Bazar").await?, "coxs-bazar");

    Ok(())
}

/// Tests that taken slugs get a numeric suffix starting at 2.
///
/// Expected: Ok with `-2`, then `-3` once `-2` is taken
#[tokio::test]
async fn appends_suffix_on_collision() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::destination::DestinationFactory::new(db)
        .slug("sylhet")
        .build()
        .await?;

    let repo = DestinationRepository::new(db);
    assert_eq!(repo.unique_slug("Sylhet").await?, "sylhet-2");

    factory::destination::DestinationFactory::new(db)
        .slug("sylhet-2")
        .build()
        .await?;
    assert_eq!(repo.unique_slug("  SYLHET ").await?, "sylhet-3");

    Ok(())
}
