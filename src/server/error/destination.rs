use thiserror::Error;

#[derive(Error, Debug)]
pub enum DestinationError {
    /// No destination with this id.
    #[error("Destination {0} not found")]
    NotFound(i32),

    /// No destination with this slug.
    #[error("Destination '{0}' not found")]
    SlugNotFound(String),

    /// The aggregate write failed and was rolled back.
    ///
    /// Results in a 500 Internal Server Error; the chained cause is logged.
    #[error("Failed to create destination")]
    CreateFailed {
        #[source]
        source: sea_orm::DbErr,
    },
}
