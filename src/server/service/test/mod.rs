use bytes::Bytes;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::destination::CreateDestinationDto,
    server::{
        config::UploadSettings,
        error::AppError,
        image_host::{mock::MockImageHost, ImageFile},
        model::{
            destination::CreateDestinationParams,
            image::{ImageTarget, PendingImage, PendingUpload},
            page::PageRequest,
        },
    },
};

mod image;
mod user;

fn pending_image(file_name: &str) -> PendingImage {
    PendingImage {
        file: ImageFile {
            file_name: file_name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: Bytes::from_static(b"\xff\xd8\xff"),
        },
        alt_text: Some(format!("{} alt", file_name)),
    }
}

fn create_params(payload: serde_json::Value) -> CreateDestinationParams {
    let dto: CreateDestinationDto = serde_json::from_value(payload).unwrap();
    CreateDestinationParams::from_dto(dto, Vec::new()).unwrap()
}

fn upload_settings() -> UploadSettings {
    UploadSettings {
        concurrency: 2,
        ..UploadSettings::default()
    }
}

/// Row counts for every table a destination creation writes to.
async fn aggregate_row_count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Ok(entity::prelude::Destination::find().count(db).await?
        + entity::prelude::DestinationAccommodationType::find().count(db).await?
        + entity::prelude::DestinationTransportOption::find().count(db).await?
        + entity::prelude::DestinationActivity::find().count(db).await?
        + entity::prelude::DestinationSignatureDish::find().count(db).await?
        + entity::prelude::Accommodation::find().count(db).await?
        + entity::prelude::Attraction::find().count(db).await?
        + entity::prelude::Restaurant::find().count(db).await?
        + entity::prelude::DestinationImage::find().count(db).await?
        + entity::prelude::AttractionImage::find().count(db).await?)
}
