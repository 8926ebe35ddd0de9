use axum::{routing::get, Router};
use core_sim::{Session, SimConfig};
use rand::{rngs::StdRng, SeedableRng};
use runtime::{SessionEngine, SessionHandle};
use tracing::info;

/// Builds the session and starts its tick scheduler. Must run inside a tokio
/// runtime.
pub fn start_session(seed: Option<u64>) -> SessionHandle {
    let rng = match seed {
        Some(seed) => {
            info!(seed, "using seeded price simulation");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    SessionEngine::new(Session::new(SimConfig::default(), rng)).start()
}

pub fn build_app(session: SessionHandle) -> Router {
    api::app(session).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}
