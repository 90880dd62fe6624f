use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod error;
pub mod extract;
pub mod hotels;
pub mod navigation;
pub mod search;
pub mod sessions;
pub mod state;
pub mod steps;
pub mod worker;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ])
        .expose_headers([axum::http::header::LOCATION]);

    Router::new()
        .merge(sessions::routes())
        .merge(navigation::routes())
        .merge(steps::routes())
        .merge(search::routes())
        .merge(bookings::routes())
        .merge(hotels::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
