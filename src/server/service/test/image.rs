use super::*;
use crate::server::{
    error::upload::UploadError,
    image_host::{ImageHost, UploadedImage},
    service::image::{upload_all, ImageService},
};
use std::time::Duration;

fn upload(target: ImageTarget, target_id: i32, file_name: &str) -> PendingUpload {
    PendingUpload {
        target,
        target_id,
        image: pending_image(file_name),
    }
}

/// Tests that uploads come back in input order regardless of completion order.
///
/// Expected: one stored image per input, same order, alt text kept
#[tokio::test]
async fn upload_all_keeps_input_order() {
    let host = MockImageHost::new();
    let images = (0..6).map(|i| pending_image(&format!("{}.jpg", i))).collect();

    let stored = upload_all(&host, upload_settings(), images).await.unwrap();

    assert_eq!(stored.len(), 6);
    for (i, image) in stored.iter().enumerate() {
        assert!(image.url.ends_with(&format!("/{}.jpg", i)));
        assert_eq!(image.alt_text, Some(format!("{}.jpg alt", i)));
    }
    assert_eq!(host.upload_count(), 6);
}

/// Tests an empty batch.
///
/// Expected: Ok(empty) without calling the host
#[tokio::test]
async fn upload_all_skips_empty_batch() {
    let host = MockImageHost::new();

    let stored = upload_all(&host, upload_settings(), Vec::new()).await.unwrap();

    assert!(stored.is_empty());
    assert_eq!(host.upload_count(), 0);
}

/// Tests a batch where one upload is rejected.
///
/// Expected: Err(AppError::UploadErr) and every other upload deleted from the host
#[tokio::test]
async fn upload_all_discards_partial_batch() {
    let host = MockImageHost::failing_on("2.jpg");
    let images = (0..4).map(|i| pending_image(&format!("{}.jpg", i))).collect();

    let result = upload_all(&host, upload_settings(), images).await;

    assert!(matches!(result, Err(AppError::UploadErr(_))));
    assert_eq!(host.upload_count(), 4);
    assert_eq!(host.deleted().len(), 3);
    assert!(!host.deleted().iter().any(|id| id.ends_with("2.jpg")));
}

struct SlowHost;

#[async_trait::async_trait]
impl ImageHost for SlowHost {
    async fn upload(&self, _file: ImageFile) -> Result<UploadedImage, UploadError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(UploadError::InvalidResponse("never answered".to_string()))
    }

    async fn delete(&self, _public_id: &str) -> Result<bool, UploadError> {
        Ok(true)
    }
}

/// Tests an upload that exceeds the per-file timeout.
///
/// Expected: Err(UploadError::Timeout) naming the file
#[tokio::test(start_paused = true)]
async fn upload_all_times_out_slow_uploads() {
    let settings = UploadSettings {
        timeout: Duration::from_secs(1),
        concurrency: 1,
    };

    let result = upload_all(&SlowHost, settings, vec![pending_image("slow.jpg")]).await;

    assert!(matches!(
        result,
        Err(AppError::UploadErr(UploadError::Timeout { file_name, secs: 1 }))
            if file_name == "slow.jpg"
    ));
}

/// Tests attaching images to a destination and an attraction in one request.
///
/// Expected: records in request order, one row in each image table
#[tokio::test]
async fn attaches_images_to_both_targets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_destination_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let host = MockImageHost::new();

    let (destination, attraction) =
        factory::helpers::create_destination_with_attraction(db).await?;

    let records = ImageService::new(db, &host, upload_settings())
        .upload_images(vec![
            upload(ImageTarget::Attraction, attraction.id, "fort.jpg"),
            upload(ImageTarget::Destination, destination.id, "skyline.jpg"),
        ])
        .await?;

    assert_eq!(records.len(), 2);
    assert!(records[0].url.ends_with("fort.jpg"));
    assert_eq!(records[1].alt_text.as_deref(), Some("skyline.jpg alt"));

    assert_eq!(entity::prelude::DestinationImage::find().count(db).await?, 1);
    assert_eq!(entity::prelude::AttractionImage::find().count(db).await?, 1);

    Ok(())
}

/// Tests a request naming a target that does not exist.
///
/// Expected: Err(AppError::Validation) before anything is uploaded
#[tokio::test]
async fn rejects_unknown_target_before_upload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_destination_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let host = MockImageHost::new();

    let destination = factory::create_destination(db).await?;

    let result = ImageService::new(db, &host, upload_settings())
        .upload_images(vec![
            upload(ImageTarget::Destination, destination.id, "ok.jpg"),
            upload(ImageTarget::Attraction, 777, "missing.jpg"),
        ])
        .await;

    assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("777")));
    assert_eq!(host.upload_count(), 0);
    assert_eq!(entity::prelude::DestinationImage::find().count(db).await?, 0);

    Ok(())
}

/// Tests a request with no images.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_empty_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_destination_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let host = MockImageHost::new();

    let result = ImageService::new(db, &host, upload_settings())
        .upload_images(Vec::new())
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a failed upload in the batch leaves both image tables empty.
///
/// Expected: Err(AppError::UploadErr), zero image rows
#[tokio::test]
async fn writes_nothing_when_an_upload_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_destination_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let host = MockImageHost::failing_on("bad.jpg");

    let (destination, attraction) =
        factory::helpers::create_destination_with_attraction(db).await?;

    let result = ImageService::new(db, &host, upload_settings())
        .upload_images(vec![
            upload(ImageTarget::Destination, destination.id, "good.jpg"),
            upload(ImageTarget::Attraction, attraction.id, "bad.jpg"),
        ])
        .await;

    assert!(matches!(result, Err(AppError::UploadErr(_))));
    assert_eq!(entity::prelude::DestinationImage::find().count(db).await?, 0);
    assert_eq!(entity::prelude::AttractionImage::find().count(db).await?, 0);

    Ok(())
}
