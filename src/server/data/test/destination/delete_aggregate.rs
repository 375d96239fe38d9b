use super::*;

/// Tests that deleting removes every owned row and reports image public ids.
///
/// Expected: Ok with both public ids and every owned table empty
#[tokio::test]
async fn removes_owned_rows_and_returns_public_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_accommodation_type(db).await?;

    let repo = DestinationRepository::new(db);
    let destination = repo
        .insert_destination(&new_destination("Saint Martin"), "saint-martin".to_string())
        .await?;
    let link_ids = repo
        .insert_accommodation_types(
            destination.id,
            &[NewAccommodationTypeLink {
                type_ref_id: hotel.id,
                price_range: "$$".to_string(),
                availability: None,
                description: None,
            }],
        )
        .await?;
    repo.insert_accommodations(
        destination.id,
        &[new_accommodation("Blue Marine", Some(hotel.id))],
        &link_ids,
    )
    .await?;
    let attraction = factory::create_attraction(db, destination.id).await?;
    let attraction_image = factory::create_attraction_image(db, attraction.id).await?;
    let destination_image = factory::create_destination_image(db, destination.id).await?;

    let public_ids = repo.delete_aggregate(destination.id).await?;

    assert_eq!(public_ids.len(), 2);
    assert!(public_ids.contains(&attraction_image.public_id));
    assert!(public_ids.contains(&destination_image.public_id));

    assert!(!repo.exists(destination.id).await?);
    assert_eq!(entity::prelude::Attraction::find().count(db).await?, 0);
    assert_eq!(entity::prelude::AttractionImage::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Accommodation::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::DestinationAccommodationType::find()
            .count(db)
            .await?,
        0
    );
    assert_eq!(entity::prelude::DestinationImage::find().count(db).await?, 0);
    // Reference catalogs are shared and survive.
    assert_eq!(entity::prelude::AccommodationTypeRef::find().count(db).await?, 1);

    Ok(())
}

/// Tests that other destinations are untouched.
///
/// Expected: the sibling destination and its attraction remain
#[tokio::test]
async fn leaves_other_destinations_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, _) = factory::helpers::create_destination_with_attraction(db).await?;
    let (kept, _) = factory::helpers::create_destination_with_attraction(db).await?;

    let repo = DestinationRepository::new(db);
    repo.delete_aggregate(doomed.id).await?;

    assert!(repo.exists(kept.id).await?);
    assert_eq!(entity::prelude::Attraction::find().count(db).await?, 1);

    Ok(())
}
