use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{AppState, handlers};

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 5173, 8000, 8080, 8081];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

fn activity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(handlers::v1::activities::list))
        .route(
            "/activities/{activity_name}",
            get(handlers::v1::activities::get),
        )
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::v1::activities::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::v1::activities::unregister),
        )
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn setup_routes(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health::get))
        .merge(activity_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
