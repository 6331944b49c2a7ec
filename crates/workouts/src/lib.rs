pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod persistence;
pub mod request_id;
pub mod storage;
pub mod store;
pub mod types;
pub mod validation;

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tokio::sync::Mutex;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;

use crate::{
    config::AppConfig,
    errors::WorkoutError,
    handlers::{
        SharedStore, begin_edit, cancel_edit, commit_edit, create_workout, delete_workout,
        get_pending_edit, get_workout, health_check, list_workouts, reset_workouts,
    },
    persistence::JsonPersistence,
    request_id::request_id_middleware,
    storage::KeyValueStore,
    store::{TracingObserver, WorkoutStore},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::stats::health_check,
        handlers::workouts::list_workouts,
        handlers::workouts::create_workout,
        handlers::workouts::get_workout,
        handlers::workouts::delete_workout,
        handlers::workouts::reset_workouts,
        handlers::edit::begin_edit,
        handlers::edit::get_pending_edit,
        handlers::edit::commit_edit,
        handlers::edit::cancel_edit,
    ),
    tags(
        (name = "workouts", description = "Logged running and cycling workouts"),
        (name = "edit", description = "The single pending workout edit"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(store: WorkoutStore) -> Router {
    let store: SharedStore = Arc::new(Mutex::new(store));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .route(
            "/workouts",
            get(list_workouts).post(create_workout).delete(reset_workouts),
        )
        .route("/workouts/{id}", get(get_workout).delete(delete_workout))
        .route("/workouts/{id}/edit", post(begin_edit))
        .route(
            "/edit",
            get(get_pending_edit).patch(commit_edit).delete(cancel_edit),
        )
        .layer(Extension(store))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

/// Opens the configured on-disk store, loading any saved workouts.
pub async fn open_store(config: &AppConfig) -> Result<WorkoutStore, WorkoutError> {
    let kv = KeyValueStore::new_local(&config.store_path)?;
    let persistence = JsonPersistence::with_key(kv, config.store_key.clone());
    let store = WorkoutStore::open(persistence)
        .await?
        .with_observer(TracingObserver);
    Ok(store)
}

pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    tracing::info!(
        path = %config.store_path,
        workouts = store.len(),
        "Workout store opened"
    );

    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
