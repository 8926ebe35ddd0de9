pub mod routes;
pub mod state;
mod ws;

use axum::Router;
use runtime::SessionHandle;

pub fn app(session: SessionHandle) -> Router {
    routes::router(state::AppState::new(session))
}
