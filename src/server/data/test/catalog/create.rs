use super::*;

fn params(kind: CatalogKind, name: &str) -> CreateTypeRefParams {
    CreateTypeRefParams {
        kind,
        name: name.to_string(),
        description: Some("Description".to_string()),
        category: Some("Outdoor".to_string()),
    }
}

/// Tests creating one entry in each registry.
///
/// Expected: Ok with the kind set and category only kept for activities
#[tokio::test]
async fn creates_type_in_each_registry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);

    let hotel = repo.create(params(CatalogKind::Accommodation, "Hotel")).await?;
    let bus = repo.create(params(CatalogKind::Transport, "Bus")).await?;
    let mut hiking = params(CatalogKind::Activity, "Hiking");
    hiking.category = Some("Outdoor".to_string());
    let hiking = repo.create(hiking).await?;

    assert_eq!(hotel.kind, CatalogKind::Accommodation);
    assert_eq!(hotel.category, None);
    assert_eq!(bus.kind, CatalogKind::Transport);
    assert_eq!(bus.name, "Bus");
    assert_eq!(hiking.category.as_deref(), Some("Outdoor"));

    Ok(())
}

/// Tests that a duplicate name surfaces as a unique constraint violation.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);
    repo.create(params(CatalogKind::Transport, "Ferry")).await?;

    let result = repo.create(params(CatalogKind::Transport, "Ferry")).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that the same name may exist in different registries.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_name_across_registries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);

    assert!(repo.create(params(CatalogKind::Transport, "Boat")).await.is_ok());
    assert!(repo.create(params(CatalogKind::Activity, "Boat")).await.is_ok());

    Ok(())
}
