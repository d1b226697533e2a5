//! HTTP surface: two read-only endpoints over [`CountryService`].

pub mod handlers;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::CountryService;
use crate::utils::error::Result;

#[derive(Clone)]
pub struct AppState {
    pub service: CountryService,
}

pub fn build_router(service: CountryService) -> Router {
    Router::new()
        .route("/api/countries", get(handlers::list_countries))
        .route("/api/countries/:country_name", get(handlers::get_country))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(AppState { service })
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🚀 Listening on http://{}", addr);
    }
    axum::serve(listener, router).await?;
    Ok(())
}
