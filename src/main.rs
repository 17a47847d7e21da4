use seminars::{create_app, AppState, Config};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let bind_addr = config.bind_addr.clone();
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Server is running on http://{}", bind_addr);
    info!("API docs at http://{}/swagger-ui", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
