use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::notification::{
        get_notification, get_notifications, preview_audience, send_broadcast,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notifications", get(get_notifications))
        .route("/api/notifications/broadcast", post(send_broadcast))
        .route("/api/notifications/audience", get(preview_audience))
        .route("/api/notifications/{id}", get(get_notification))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
