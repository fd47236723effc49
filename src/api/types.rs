//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to evaluate an idea.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeaRequest {
    /// The idea description
    pub text: String,

    /// Whether to add web research
    #[serde(default = "default_enhance_with_search")]
    pub enhance_with_search: bool,
}

fn default_enhance_with_search() -> bool {
    true
}

/// Response for an evaluated idea.
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResponse {
    /// Concise summary of the submitted idea
    pub summary: String,

    /// The agent's final, investor-facing opinion
    pub opinion: String,

    /// Echo of the request's search flag
    pub search_performed: bool,
}

/// Static welcome message for the root endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}
