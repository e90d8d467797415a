use axum::{
    http::{Method, Uri},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod offers;
pub mod state;

pub use state::AppState;

use error::AppError;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(offers::index))
        .route("/submit_offer", post(offers::submit_offer))
        .route("/offer_statistics", get(offers::offer_statistics))
        // Routing misses wear the same JSON error envelope as everything else
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
