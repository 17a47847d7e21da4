use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::handlers;
use crate::models::{Author, Citation, Seminar, SeminarSummary, Talk, TalkSummary};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::new_seminar,
        handlers::normalize_seminar,
        handlers::summarize_seminar,
        handlers::web::seminar_page,
        handlers::new_talk,
        handlers::summarize_talk,
    ),
    components(schemas(Seminar, Talk, Author, Citation, SeminarSummary, TalkSummary)),
    tags(
        (name = "seminars", description = "Seminar records and their derived views"),
        (name = "talks", description = "Talk records"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Build the application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Seminar routes
        .route("/seminars/new", get(handlers::new_seminar))
        .route("/seminars/normalize", post(handlers::normalize_seminar))
        .route("/seminars/summary", post(handlers::summarize_seminar))
        .route("/seminars/page", post(handlers::web::seminar_page))
        // Talk routes
        .route("/talks/new", get(handlers::new_talk))
        .route("/talks/summary", post(handlers::summarize_talk))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
