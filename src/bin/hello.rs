use axum::{routing::any, Router};
use std::net::SocketAddr;
use tracing::info;

// Root endpoint with a fixed greeting
async fn root() -> &'static str {
    "Hello from Rust Backend!"
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let app = Router::new().route("/", any(root));

    let addr = SocketAddr::from(([0, 0, 0, 0], 8081));
    info!("Hello server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
