use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        catalog::{self, CATALOG_TAG},
        destination::{self, DESTINATION_TAG},
        health::{self, HEALTH_TAG},
        image::{self, IMAGE_TAG},
    },
    state::AppState,
};

const OPENAPI_JSON: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Tourtoise API", description = "Travel destination catalog"),
    tags(
        (name = AUTH_TAG, description = "Accounts and sessions"),
        (name = CATALOG_TAG, description = "Accommodation, transport and activity types"),
        (name = DESTINATION_TAG, description = "Destinations and their nested collections"),
        (name = IMAGE_TAG, description = "Image uploads"),
        (name = HEALTH_TAG, description = "Service health")
    )
)]
struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_profile, auth::update_profile))
        .routes(routes!(auth::list_users))
        .routes(routes!(catalog::create_type, catalog::list_types))
        .routes(routes!(catalog::get_type))
        .routes(routes!(
            destination::create_destination,
            destination::list_destinations
        ))
        .routes(routes!(
            destination::get_destination,
            destination::delete_destination
        ))
        .routes(routes!(destination::get_destination_by_slug))
        .routes(routes!(image::upload_images))
        .routes(routes!(health::health))
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url(OPENAPI_JSON, api))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let (_, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
            .routes(routes!(destination::create_destination, destination::list_destinations))
            .routes(routes!(catalog::get_type))
            .split_for_parts();

        assert!(api.paths.paths.contains_key("/api/destinations"));
        assert!(api.paths.paths.contains_key("/api/catalog/{kind}/{id}"));
    }
}
