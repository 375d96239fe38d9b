use super::*;

/// Tests that missing destinations and attractions are reported per table.
///
/// Expected: Ok with sorted, deduplicated missing ids
#[tokio::test]
async fn reports_missing_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (destination, attraction) =
        factory::helpers::create_destination_with_attraction(db).await?;

    let repo = ImageRepository::new(db);

    let missing = repo
        .find_missing_targets(ImageTarget::Destination, &[500, destination.id, 400, 500])
        .await?;
    assert_eq!(missing, vec![400, 500]);

    let missing = repo
        .find_missing_targets(ImageTarget::Attraction, &[attraction.id])
        .await?;
    assert!(missing.is_empty());

    // A destination id is not a valid attraction target.
    let missing = repo
        .find_missing_targets(ImageTarget::Attraction, &[attraction.id + 1000])
        .await?;
    assert_eq!(missing, vec![attraction.id + 1000]);

    Ok(())
}
