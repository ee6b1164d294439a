//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: one route per scenario plus listing and health
//! - Wire up middleware (request ID, tracing, timeout, panic recovery)
//! - Serve on a bound listener until shutdown

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::CallerConfig;
use crate::http::handlers;
use crate::http::request::{request_span, MakeRequestUuid};
use crate::lifecycle::Shutdown;
use crate::scenario::SCENARIOS;
use crate::service::{CallerService, ServiceError};

/// Prefix every scenario route is mounted under.
pub const CALLER_PREFIX: &str = "/caller";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CallerService>,
}

/// HTTP server for the caller service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: CallerConfig) -> Result<Self, ServiceError> {
        let state = AppState {
            service: Arc::new(CallerService::new(&config)?),
        };
        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &CallerConfig, state: AppState) -> Router {
        let mut caller = Router::new().route("/scenarios", get(handlers::list_scenarios));
        for scenario in SCENARIOS {
            caller = caller.route(
                scenario.route,
                get(move |State(state): State<AppState>| handlers::run_scenario(state, scenario)),
            );
        }

        Router::new()
            .nest(CALLER_PREFIX, caller)
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            scenarios = SCENARIOS.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.signalled())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
