use super::*;

/// Tests batch inserting into both image tables.
///
/// Expected: one row per input in the matching table
#[tokio::test]
async fn inserts_rows_into_matching_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (destination, attraction) =
        factory::helpers::create_destination_with_attraction(db).await?;

    let repo = ImageRepository::new(db);
    repo.insert_destination_images(&[
        row(ImageTarget::Destination, destination.id, "beach"),
        row(ImageTarget::Destination, destination.id, "sunset"),
    ])
    .await?;
    repo.insert_attraction_images(&[row(ImageTarget::Attraction, attraction.id, "pier")])
        .await?;

    let images = repo.get_destination_images(destination.id).await?;
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].public_id, "tourtoise/beach");
    assert_eq!(images[0].alt_text.as_deref(), Some("beach"));
    assert_eq!(entity::prelude::AttractionImage::find().count(db).await?, 1);

    Ok(())
}

/// Tests that empty batches are skipped.
///
/// Expected: Ok with nothing written
#[tokio::test]
async fn skips_empty_batches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageRepository::new(db);
    repo.insert_destination_images(&[]).await?;
    repo.insert_attraction_images(&[]).await?;

    assert_eq!(entity::prelude::DestinationImage::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a row for a missing parent violates the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn rejects_rows_for_missing_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageRepository::new(db);
    let result = repo
        .insert_destination_images(&[row(ImageTarget::Destination, 4242, "ghost")])
        .await;

    assert!(result.is_err());

    Ok(())
}
