#[tokio::main]
async fn main() {
    provet_observability::init();

    // The scoring credential is optional: without it every submission lands
    // in review instead of failing.
    let gemini_key = std::env::var("GEMINI_API_KEY").ok();
    if gemini_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; brand-fit analysis will be skipped");
    }

    let app = provet_api::app::build_app(gemini_key);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
