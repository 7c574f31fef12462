mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use store::CourseStore;

fn app_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::COURSE_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-mongo-courses starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = CourseStore::connect(&config).await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
