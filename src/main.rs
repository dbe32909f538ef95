use banking_ledger_demo::build_app;
use dotenv::dotenv;
use tracing_appender::non_blocking;

#[tokio::main]
async fn main() {
    let (non_blocking, _guard) = non_blocking(std::io::stdout());
    tracing_subscriber::fmt().with_writer(non_blocking).init();
    tracing::info!("Initialized tracing subscriber with async writer");
    dotenv().ok();
    let port = std::env::var("PORT").unwrap_or("3000".to_string());
    tracing::info!("Starting server on port {}", port);
    let tcp_listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    tracing::info!("Server started");
    axum::serve(tcp_listener, build_app()).await.unwrap();
}
