use super::*;

/// Tests that only ids absent from the registry are reported.
///
/// Expected: Ok with the unknown ids in input order
#[tokio::test]
async fn reports_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bus = factory::create_transport_type(db).await?;

    let repo = CatalogRepository::new(db);
    let missing = repo
        .find_missing(CatalogKind::Transport, &[9999, bus.id, 8888])
        .await?;

    assert_eq!(missing, vec![9999, 8888]);

    Ok(())
}

/// Tests that an empty request does not query anything.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_request_reports_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);

    assert!(repo.find_missing(CatalogKind::Activity, &[]).await?.is_empty());

    Ok(())
}
