//! HTTP API module.
//!
//! Two endpoints: `POST /enhance-idea` runs a submitted idea through the
//! agent and the summarizer, `GET /` returns a static welcome message.

mod enhance;
mod error;
mod routes;
mod types;

pub use error::ApiError;
pub use routes::{router, serve, AppState};
pub use types::{EnhanceResponse, IdeaRequest, WelcomeResponse};
