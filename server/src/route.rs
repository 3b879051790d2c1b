use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::AppModule;

pub use self::book::*;

mod book;

pub fn router(module: AppModule) -> Router {
    Router::<AppModule>::new()
        .route_book()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(module)
}
