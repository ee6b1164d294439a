//! Caller service library.
//!
//! Calls a downstream receiver service once per scenario and reports each
//! result in a uniform [`envelope::Envelope`].

pub mod client;
pub mod config;
pub mod envelope;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod scenario;
pub mod service;

pub use config::CallerConfig;
pub use envelope::Envelope;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
