//! Destination aggregate writes and reads.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::{
    model::catalog::CatalogKind,
    server::{
        config::UploadSettings,
        data::{catalog::CatalogRepository, destination::DestinationRepository, image::ImageRepository},
        error::{destination::DestinationError, internal::InternalError, AppError},
        image_host::ImageHost,
        model::{
            destination::{CreateDestinationParams, DestinationDetails, PaginatedDestinations},
            image::{ImageTarget, NewImageRow, StoredImage},
            page::PageRequest,
        },
        service::image::{join_ids, log_orphaned, upload_all},
    },
};

pub struct DestinationService<'a> {
    db: &'a DatabaseConnection,
    host: &'a dyn ImageHost,
    upload: UploadSettings,
}

impl<'a> DestinationService<'a> {
    pub fn new(db: &'a DatabaseConnection, host: &'a dyn ImageHost, upload: UploadSettings) -> Self {
        Self { db, host, upload }
    }

    /// Creates a destination together with every nested collection.
    ///
    /// Referenced type ids are checked before anything is uploaded or written. Images
    /// are uploaded next, then all rows are inserted in one transaction. Any insert
    /// failure rolls back the whole aggregate.
    ///
    /// # Returns
    /// - `Ok(DestinationDetails)` - The committed aggregate, read back from the database
    /// - `Err(AppError::Validation)` - Unknown type reference id
    /// - `Err(AppError::UploadErr)` - Image host failure, nothing was written
    /// - `Err(DestinationError::CreateFailed)` - Write failed and was rolled back
    pub async fn create(
        &self,
        mut params: CreateDestinationParams,
    ) -> Result<DestinationDetails, AppError> {
        self.validate_references(&params).await?;

        let images = std::mem::take(&mut params.images);
        let stored = upload_all(self.host, self.upload, images).await?;

        let destination = match self.write_aggregate(&params, &stored).await {
            Ok(destination) => destination,
            Err(source) => {
                log_orphaned(&stored, &source);
                return Err(DestinationError::CreateFailed { source }.into());
            }
        };

        tracing::info!(
            destination_id = destination.id,
            slug = %destination.slug,
            "Created destination"
        );

        DestinationRepository::new(self.db)
            .get_details(destination.id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "Destination",
                    id: destination.id,
                }
                .into()
            })
    }

    async fn validate_references(&self, params: &CreateDestinationParams) -> Result<(), AppError> {
        let catalog_repo = CatalogRepository::new(self.db);
        let ids = params.referenced_type_ids();

        for (kind, ids) in [
            (CatalogKind::Accommodation, &ids.accommodation),
            (CatalogKind::Transport, &ids.transport),
            (CatalogKind::Activity, &ids.activity),
        ] {
            let missing = catalog_repo.find_missing(kind, ids).await?;
            if !missing.is_empty() {
                return Err(AppError::Validation(format!(
                    "{} id(s) not found: {}",
                    kind.label(),
                    join_ids(&missing)
                )));
            }
        }

        Ok(())
    }

    async fn write_aggregate(
        &self,
        params: &CreateDestinationParams,
        images: &[StoredImage],
    ) -> Result<entity::destination::Model, DbErr> {
        let txn = self.db.begin().await?;

        match stage_aggregate(&txn, params, images).await {
            Ok(destination) => {
                txn.commit().await?;
                Ok(destination)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back destination insert: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Gets one page of destinations ordered by name.
    pub async fn list(&self, request: PageRequest) -> Result<PaginatedDestinations, AppError> {
        let (destinations, total) = DestinationRepository::new(self.db)
            .get_paginated(&request)
            .await?;

        Ok(PaginatedDestinations {
            destinations,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: request.total_pages(total),
        })
    }

    pub async fn get_detail(&self, id: i32) -> Result<DestinationDetails, AppError> {
        DestinationRepository::new(self.db)
            .get_details(id)
            .await?
            .ok_or_else(|| DestinationError::NotFound(id).into())
    }

    pub async fn get_detail_by_slug(&self, slug: &str) -> Result<DestinationDetails, AppError> {
        let destination_repo = DestinationRepository::new(self.db);

        let Some(id) = destination_repo.find_id_by_slug(slug).await? else {
            return Err(DestinationError::SlugNotFound(slug.to_string()).into());
        };

        destination_repo
            .get_details(id)
            .await?
            .ok_or_else(|| DestinationError::SlugNotFound(slug.to_string()).into())
    }

    /// Deletes a destination and every row it owns in one transaction.
    ///
    /// Images on the remote host are not removed; their public ids are logged.
    ///
    /// # Returns
    /// - `Ok(())` - Destination deleted
    /// - `Err(DestinationError::NotFound)` - No destination with this id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let destination_repo = DestinationRepository::new(&txn);

        let deleted = async {
            if !destination_repo.exists(id).await? {
                return Ok(None);
            }
            destination_repo.delete_aggregate(id).await.map(Some)
        }
        .await;

        let public_ids = match deleted {
            Ok(Some(public_ids)) => public_ids,
            Ok(None) => {
                txn.rollback().await?;
                return Err(DestinationError::NotFound(id).into());
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back destination delete: {}", rollback_err);
                }
                return Err(err.into());
            }
        };

        txn.commit().await?;

        if !public_ids.is_empty() {
            tracing::warn!(
                destination_id = id,
                ?public_ids,
                "Deleted destination left images on the image host"
            );
        }

        tracing::info!(destination_id = id, "Deleted destination");

        Ok(())
    }
}

/// Inserts the aggregate in dependency order on an open transaction.
async fn stage_aggregate(
    txn: &DatabaseTransaction,
    params: &CreateDestinationParams,
    images: &[StoredImage],
) -> Result<entity::destination::Model, DbErr> {
    let destination_repo = DestinationRepository::new(txn);

    let slug = destination_repo.unique_slug(&params.destination.name).await?;
    let destination = destination_repo
        .insert_destination(&params.destination, slug)
        .await?;
    let id = destination.id;

    let link_ids = destination_repo
        .insert_accommodation_types(id, &params.accommodation_types)
        .await?;
    destination_repo
        .insert_transport_options(id, &params.transport_options)
        .await?;
    destination_repo
        .insert_activities(id, &params.activities)
        .await?;
    destination_repo
        .insert_signature_dishes(id, &params.signature_dishes)
        .await?;
    destination_repo
        .insert_accommodations(id, &params.accommodations, &link_ids)
        .await?;
    destination_repo
        .insert_attractions(id, &params.attractions)
        .await?;
    destination_repo
        .insert_restaurants(id, &params.restaurants)
        .await?;

    let rows: Vec<NewImageRow> = images
        .iter()
        .map(|image| NewImageRow {
            target: ImageTarget::Destination,
            target_id: id,
            image: image.clone(),
        })
        .collect();
    ImageRepository::new(txn)
        .insert_destination_images(&rows)
        .await?;

    Ok(destination)
}
