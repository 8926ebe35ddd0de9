use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json,
    Router,
};
use core_sim::SessionSnapshot;
use runtime::SessionError;
use tracing::warn;

use crate::{state::AppState, ws};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_html))
        .route("/static/styles.css", get(styles_css))
        .route("/static/app.js", get(app_js))
        .route("/api/session", get(session_snapshot))
        .route("/api/stocks/:index/buy", post(buy_stock))
        .route("/api/stocks/:index/sell", post(sell_stock))
        .route("/ws/events", get(ws::events_socket))
        .with_state(state)
}

async fn session_snapshot(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = state.session().snapshot().await.map_err(unavailable)?;
    Ok(Json(snapshot))
}

// A trade that cannot execute still answers 200 with the unchanged snapshot.
async fn buy_stock(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = state.session().buy(index).await.map_err(unavailable)?;
    Ok(Json(snapshot))
}

async fn sell_stock(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let snapshot = state.session().sell(index).await.map_err(unavailable)?;
    Ok(Json(snapshot))
}

fn unavailable(err: SessionError) -> StatusCode {
    warn!(%err, "session command failed");
    StatusCode::SERVICE_UNAVAILABLE
}

async fn index_html() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        ui::index_html(),
    )
}

async fn styles_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], ui::styles_css())
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        ui::app_js(),
    )
}
