use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Generation is stateless, so only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
