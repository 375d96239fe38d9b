use crate::server::{
    data::image::ImageRepository,
    model::image::{ImageTarget, NewImageRow, StoredImage},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_missing_targets;
mod insert_images;

fn row(target: ImageTarget, target_id: i32, name: &str) -> NewImageRow {
    NewImageRow {
        target,
        target_id,
        image: StoredImage {
            url: format!("https://images.test/{}.jpg", name),
            public_id: format!("tourtoise/{}", name),
            alt_text: Some(name.to_string()),
        },
    }
}
