//! Web API module for Hitlog
//!
//! Provides HTTP endpoints for:
//! - Event log append and summary
//! - Service information and health
//! - A periodic server-sent event stream

pub mod error;
pub mod events;
pub mod health;
pub mod info;
pub mod stream;

use axum::Router;

pub use events::events_routes;
pub use health::health_routes;
pub use info::info_routes;
pub use stream::{stream_routes, StreamSettings};

/// Create the API router with all endpoints
pub fn api_router() -> Router {
    Router::new()
        .merge(info_routes())
        .merge(health_routes())
        .merge(events_routes())
        .merge(stream_routes())
}
