//! Server-sent event stream
//!
//! GET /stream - emits the current local time every `interval` until
//! `duration` has elapsed, then closes.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    response::sse::{Event, Sse},
    routing::get,
    Extension, Router,
};
use chrono::Local;
use futures::{stream, Stream, StreamExt};
use tokio::time::Instant;

/// Timing for the event stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    pub interval: Duration,
    pub duration: Duration,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            duration: Duration::from_secs(60),
        }
    }
}

/// Formatted local times, one per tick, ending at the deadline
fn clock_ticks(settings: StreamSettings) -> impl Stream<Item = String> {
    let deadline = Instant::now() + settings.duration;

    stream::unfold(true, move |first| async move {
        if !first {
            tokio::time::sleep(settings.interval).await;
        }
        if Instant::now() >= deadline {
            return None;
        }
        Some((Local::now().format("%Y-%m-%d %H:%M:%S").to_string(), false))
    })
}

async fn date_stream(
    Extension(settings): Extension<StreamSettings>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    Sse::new(clock_ticks(settings).map(|now| Ok(Event::default().data(now))))
}

/// Create stream routes
pub fn stream_routes() -> Router {
    Router::new().route("/stream", get(date_stream))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_stop_at_deadline() {
        let ticks: Vec<String> = clock_ticks(StreamSettings {
            interval: Duration::from_secs(2),
            duration: Duration::from_secs(5),
        })
        .collect()
        .await;

        // t = 0, 2, 4
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|t| t.len() == "2025-01-01 00:00:00".len()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_settings_emit_thirty_events() {
        let count = clock_ticks(StreamSettings::default()).count().await;
        assert_eq!(count, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_endpoint() {
        let app = stream_routes().layer(Extension(StreamSettings {
            interval: Duration::from_secs(1),
            duration: Duration::from_millis(2500),
        }));

        let response = app
            .oneshot(Request::builder().uri("/stream").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(body.matches("data:").count(), 3);
    }
}
