use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::web::handlers::{download, index, lookup};
use crate::web::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/lookup", post(lookup))
        .route("/download", get(download))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
