//! Downstream calling subsystem.
//!
//! # Data Flow
//! ```text
//! Scenario + endpoint template
//!     → template.rs (path variables, query string)
//!     → receiver.rs (auth header, body, send, read body)
//!     → DownstreamResponse | CallError
//! ```
//!
//! # Design Decisions
//! - One outbound request per call, no retries
//! - Error statuses are data, not errors
//! - Upload files are streamed from disk on every call

pub mod error;
pub mod receiver;
pub mod template;

pub use error::CallError;
pub use receiver::{DownstreamResponse, ReceiverClient};
