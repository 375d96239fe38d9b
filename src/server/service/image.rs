//! Image upload fan-out and attachment.
//!
//! Uploads run concurrently against the image host with a bounded number in flight
//! and a timeout per file. The batch is all-or-nothing: if any upload fails, the ones
//! that succeeded are deleted again and nothing is written to the database.

use futures::{future::join_all, stream, StreamExt};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    config::UploadSettings,
    data::image::ImageRepository,
    error::{upload::UploadError, AppError},
    image_host::ImageHost,
    model::image::{ImageRecord, ImageTarget, NewImageRow, PendingImage, PendingUpload, StoredImage},
};

/// Uploads every image and returns them in input order.
///
/// # Returns
/// - `Ok(Vec<StoredImage>)` - All uploads confirmed by the host
/// - `Err(AppError::UploadErr)` - First failure by input position; earlier successes
///   have been removed from the host
pub async fn upload_all(
    host: &dyn ImageHost,
    settings: UploadSettings,
    images: Vec<PendingImage>,
) -> Result<Vec<StoredImage>, AppError> {
    if images.is_empty() {
        return Ok(Vec::new());
    }

    let timeout = settings.timeout;

    let mut results: Vec<(usize, Result<StoredImage, UploadError>)> =
        stream::iter(images.into_iter().enumerate())
            .map(|(index, image)| async move {
                let file_name = image.file.file_name.clone();

                let result = match tokio::time::timeout(timeout, host.upload(image.file)).await {
                    Ok(Ok(uploaded)) => Ok(StoredImage {
                        url: uploaded.url,
                        public_id: uploaded.public_id,
                        alt_text: image.alt_text,
                    }),
                    Ok(Err(err)) => Err(err),
                    Err(_) => Err(UploadError::Timeout {
                        file_name,
                        secs: timeout.as_secs(),
                    }),
                };

                (index, result)
            })
            .buffer_unordered(settings.concurrency.max(1))
            .collect()
            .await;

    results.sort_by_key(|(index, _)| *index);

    let mut stored = Vec::with_capacity(results.len());
    let mut first_error = None;

    for (_, result) in results {
        match result {
            Ok(image) => stored.push(image),
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        None => Ok(stored),
        Some(err) => {
            tracing::warn!(
                uploaded = stored.len(),
                "Image batch failed, removing uploads that succeeded: {}",
                err
            );
            discard_uploads(host, &stored).await;
            Err(err.into())
        }
    }
}

/// Best-effort removal of uploaded objects. Failures are logged only.
async fn discard_uploads(host: &dyn ImageHost, images: &[StoredImage]) {
    let results = join_all(images.iter().map(|image| host.delete(&image.public_id))).await;

    for (image, result) in images.iter().zip(results) {
        match result {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(public_id = %image.public_id, "Image host did not delete upload")
            }
            Err(err) => {
                tracing::warn!(public_id = %image.public_id, "Failed to delete upload: {}", err)
            }
        }
    }
}

/// Logs remote objects that no database row refers to.
pub(crate) fn log_orphaned(images: &[StoredImage], err: &DbErr) {
    if images.is_empty() {
        return;
    }

    let public_ids: Vec<&str> = images.iter().map(|i| i.public_id.as_str()).collect();
    tracing::warn!(
        ?public_ids,
        "Uploaded images orphaned after failed write: {}",
        err
    );
}

pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
    host: &'a dyn ImageHost,
    upload: UploadSettings,
}

impl<'a> ImageService<'a> {
    pub fn new(db: &'a DatabaseConnection, host: &'a dyn ImageHost, upload: UploadSettings) -> Self {
        Self { db, host, upload }
    }

    /// Uploads images and attaches them to existing destinations or attractions.
    ///
    /// Targets are checked before anything is uploaded. Both image tables are written
    /// in one transaction; if that fails the remote objects stay on the host and are
    /// logged.
    ///
    /// # Returns
    /// - `Ok(Vec<ImageRecord>)` - Persisted images in request order
    /// - `Err(AppError::Validation)` - Empty batch or unknown target ids
    /// - `Err(AppError::UploadErr)` - Image host failure or timeout
    /// - `Err(AppError::DbErr)` - Write failed after upload
    pub async fn upload_images(
        &self,
        uploads: Vec<PendingUpload>,
    ) -> Result<Vec<ImageRecord>, AppError> {
        if uploads.is_empty() {
            return Err(AppError::Validation(
                "At least one image is required".to_string(),
            ));
        }

        self.validate_targets(&uploads).await?;

        let (targets, images): (Vec<_>, Vec<_>) = uploads
            .into_iter()
            .map(|u| ((u.target, u.target_id), u.image))
            .unzip();

        let stored = upload_all(self.host, self.upload, images).await?;

        let rows: Vec<NewImageRow> = targets
            .into_iter()
            .zip(stored)
            .map(|((target, target_id), image)| NewImageRow {
                target,
                target_id,
                image,
            })
            .collect();

        if let Err(err) = self.persist(&rows).await {
            let images: Vec<StoredImage> = rows.iter().map(|r| r.image.clone()).collect();
            log_orphaned(&images, &err);
            return Err(err.into());
        }

        tracing::info!(count = rows.len(), "Attached uploaded images");

        Ok(rows
            .into_iter()
            .map(|row| ImageRecord {
                url: row.image.url,
                alt_text: row.image.alt_text,
            })
            .collect())
    }

    async fn validate_targets(&self, uploads: &[PendingUpload]) -> Result<(), AppError> {
        let image_repo = ImageRepository::new(self.db);

        for (target, label) in [
            (ImageTarget::Destination, "Destination"),
            (ImageTarget::Attraction, "Attraction"),
        ] {
            let ids: Vec<i32> = uploads
                .iter()
                .filter(|u| u.target == target)
                .map(|u| u.target_id)
                .collect();

            let missing = image_repo.find_missing_targets(target, &ids).await?;
            if !missing.is_empty() {
                return Err(AppError::Validation(format!(
                    "{} id(s) not found: {}",
                    label,
                    join_ids(&missing)
                )));
            }
        }

        Ok(())
    }

    async fn persist(&self, rows: &[NewImageRow]) -> Result<(), DbErr> {
        let (destination_rows, attraction_rows): (Vec<NewImageRow>, Vec<NewImageRow>) = rows
            .iter()
            .cloned()
            .partition(|row| row.target == ImageTarget::Destination);

        let txn = self.db.begin().await?;
        let image_repo = ImageRepository::new(&txn);

        let staged = async {
            image_repo
                .insert_destination_images(&destination_rows)
                .await?;
            image_repo.insert_attraction_images(&attraction_rows).await
        }
        .await;

        match staged {
            Ok(()) => txn.commit().await,
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back image insert: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}

pub(crate) fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
