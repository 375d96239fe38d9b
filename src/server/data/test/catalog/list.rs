use super::*;

/// Tests listing returns entries in insertion order.
///
/// Expected: Ok with all entries ordered by id
#[tokio::test]
async fn lists_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zeta = factory::catalog::TypeRefFactory::new(db)
        .name("Zeta Resort")
        .accommodation()
        .await?;
    let alpha = factory::catalog::TypeRefFactory::new(db)
        .name("Alpha Hostel")
        .accommodation()
        .await?;
    factory::create_transport_type(db).await?;

    let repo = CatalogRepository::new(db);
    let list = repo.list(CatalogKind::Accommodation).await?;

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, zeta.id);
    assert_eq!(list[1].id, alpha.id);

    Ok(())
}

/// Tests finding by id is scoped to the requested registry.
///
/// Expected: Some for the right kind, None for another kind with no such id
#[tokio::test]
async fn finds_by_id_within_registry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hiking = factory::catalog::TypeRefFactory::new(db)
        .name("Hiking")
        .category("Outdoor")
        .activity()
        .await?;

    let repo = CatalogRepository::new(db);

    let found = repo.find_by_id(CatalogKind::Activity, hiking.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().category.as_deref(), Some("Outdoor"));

    assert!(repo
        .find_by_id(CatalogKind::Transport, hiking.id)
        .await?
        .is_none());

    Ok(())
}
