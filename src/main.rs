mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, image_host::cloudinary::CloudinaryClient, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.log_format);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let image_host = Arc::new(CloudinaryClient::new(
        http_client,
        config.cloudinary.clone(),
    ));
    let state = AppState::new(db, image_host, config.upload);

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.app_addr).await?;
    tracing::info!("Listening on http://{}", config.app_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
