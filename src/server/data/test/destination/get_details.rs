use super::*;
use std::collections::HashMap;

/// Tests that every collection is read back with reference names joined in.
///
/// Expected: Ok(Some(DestinationDetails)) with links, accommodations and images
#[tokio::test]
async fn assembles_all_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::catalog::TypeRefFactory::new(db)
        .name("Hotel")
        .accommodation()
        .await?;
    let bus = factory::catalog::TypeRefFactory::new(db)
        .name("Bus")
        .transport()
        .await?;
    let surfing = factory::catalog::TypeRefFactory::new(db)
        .name("Surfing")
        .activity()
        .await?;

    let repo = DestinationRepository::new(db);
    let destination = repo
        .insert_destination(&new_destination("Cox's Bazar"), "coxs-bazar".to_string())
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
    repo.insert_transport_options(
        destination.id,
        &[NewTransportOption {
            transport_ref_id: bus.id,
            price_range: "$".to_string(),
            availability: Some("Daily".to_string()),
            description: None,
        }],
    )
    .await?;
    repo.insert_activities(
        destination.id,
        &[NewActivity {
            activity_ref_id: surfing.id,
            price_range: None,
            duration: None,
            difficulty: Some("Easy".to_string()),
            best_season: None,
            booking_required: false,
            is_popular: true,
            description: None,
        }],
    )
    .await?;
    repo.insert_accommodations(
        destination.id,
        &[new_accommodation("Sayeman", Some(hotel.id))],
        &link_ids,
    )
    .await?;
    repo.insert_attractions(destination.id, &[new_attraction("Inani Beach")])
        .await?;

    factory::create_destination_image(db, destination.id).await?;

    let details = repo.get_details(destination.id).await?.unwrap();

    assert_eq!(details.destination.slug, "coxs-bazar");
    assert_eq!(details.images.len(), 1);
    assert_eq!(details.accommodation_types.len(), 1);
    assert_eq!(details.accommodation_types[0].1.name, "Hotel");
    assert_eq!(details.transport_options[0].1.name, "Bus");
    assert_eq!(details.activities[0].1.name, "Surfing");
    assert_eq!(details.attractions.len(), 1);
    assert!(details.attractions[0].1.is_empty());

    let accommodation = &details.accommodations[0];
    assert_eq!(accommodation.accommodation.region, "Kolatoli");
    let (link, type_ref) = accommodation.link.as_ref().unwrap();
    assert_eq!(Some(link.id), link_ids.get(&hotel.id).copied());
    assert_eq!(type_ref.name, "Hotel");

    Ok(())
}

/// Tests that an accommodation whose type was not linked stores a null link.
///
/// Expected: accommodation link is None
#[tokio::test]
async fn unlinked_accommodation_type_is_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);
    let destination = repo
        .insert_destination(&new_destination("Kuakata"), "kuakata".to_string())
        .await?;

    repo.insert_accommodations(
        destination.id,
        &[new_accommodation("Guest House", Some(77))],
        &HashMap::new(),
    )
    .await?;

    let details = repo.get_details(destination.id).await?.unwrap();

    assert_eq!(details.accommodations.len(), 1);
    assert!(details.accommodations[0].link.is_none());
    assert_eq!(details.accommodations[0].accommodation.accommodation_type_id, None);

    Ok(())
}

/// Tests reading a destination that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);

    assert!(repo.get_details(99999).await?.is_none());
    assert!(repo.find_id_by_slug("nowhere").await?.is_none());

    Ok(())
}

/// Tests that attraction images are grouped under their attraction.
///
/// Expected: each attraction carries only its own images
#[tokio::test]
async fn groups_attraction_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_destination_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (destination, first) = factory::helpers::create_destination_with_attraction(db).await?;
    let second = factory::create_attraction(db, destination.id).await?;
    factory::create_attraction_image(db, first.id).await?;
    factory::create_attraction_image(db, first.id).await?;
    factory::create_attraction_image(db, second.id).await?;

    let repo = DestinationRepository::new(db);
    let details = repo.get_details(destination.id).await?.unwrap();

    assert_eq!(details.attractions.len(), 2);
    assert_eq!(details.attractions[0].0.id, first.id);
    assert_eq!(details.attractions[0].1.len(), 2);
    assert_eq!(details.attractions[1].1.len(), 1);

    Ok(())
}
