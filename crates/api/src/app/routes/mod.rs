use axum::Router;

pub mod dashboard;
pub mod products;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/dashboard", dashboard::router())
}
