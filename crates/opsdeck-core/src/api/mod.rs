//! Authenticated API gateway over the platform's REST surface.

pub mod client;
pub mod endpoints;
pub mod errors;
pub mod transport;

pub use client::ApiClient;
pub use endpoints::{ControlAction, ControlOutcome};
pub use errors::ApiError;
pub use transport::{ApiRequest, HttpExec, Method, RawResponse, ReqwestExec};
