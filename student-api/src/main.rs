use std::net::SocketAddr;

use axum::{
    http::Method,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};

mod domain;
mod rest;
mod storage;

use domain::student_service::StudentService;
use rest::AppState;
use storage::group_repository::GroupRepository;
use storage::DbConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up database");
    let db = DbConnection::init().await?;

    // Groups are owned elsewhere; a fresh database still gets a starter
    // set so the API is usable out of the box.
    GroupRepository::new(db.clone()).seed_default_groups().await?;

    let state = AppState::new(StudentService::new(db));

    // CORS setup so browser clients can reach the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", rest::api_routes())
        .layer(cors)
        .with_state(state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
