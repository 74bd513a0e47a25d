use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handler::uploads::upload_handler, AppState};

const GREETING: &str = "Hello, Microservice on Go!";

// Liveness probe
async fn root_greeting() -> &'static str {
    GREETING
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Stored artifacts are served back from the same tree they are written to.
    let artifacts = ServeDir::new(app_state.store.root());

    Router::new()
        .route("/", get(root_greeting))
        .merge(upload_handler())
        .fallback_service(artifacts)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(app_state.env.max_upload_bytes))
                .layer(Extension(app_state)),
        )
}
