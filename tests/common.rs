use axum::Router;
use seminars::{create_app, AppState, Config};

/// Config used by the tests, independent of the host environment
pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        default_room: "B 12".to_string(),
    }
}

/// Create the application router for testing
pub fn create_test_app() -> Router {
    create_app(AppState::new(test_config()))
}
