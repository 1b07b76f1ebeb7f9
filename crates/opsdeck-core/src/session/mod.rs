//! Session lifecycle: token, phase, persistence and login throttling.

pub mod context;
pub mod errors;
pub mod handler;
pub mod lockout;
pub mod store;
pub mod types;

pub use context::Session;
pub use errors::SessionError;
pub use handler::{login, logout};
pub use lockout::LoginGuard;
pub use store::TokenStore;
pub use types::{LoginRequest, LoginResponse, SessionPhase};
