//! Route registration and server startup.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::Agent;
use crate::config::Config;
use crate::llm::{LlmClient, OpenAiClient};
use crate::tools::{SummarizeIdea, ToolRegistry, WebSearch};

use super::enhance;
use super::types::WelcomeResponse;

/// Shared state handed to every request handler.
///
/// The capability clients are constructed once at startup and hold no
/// per-request state, so a single instance serves all concurrent requests.
pub struct AppState {
    pub agent: Agent,
    pub summarizer: Arc<SummarizeIdea>,
}

impl AppState {
    pub fn new(agent: Agent, summarizer: Arc<SummarizeIdea>) -> Self {
        Self { agent, summarizer }
    }

    /// Wire up the capability clients from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
        ));

        let summarizer = Arc::new(SummarizeIdea::new(
            llm.clone(),
            config.default_model.clone(),
        ));

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(WebSearch::new()?));
        tools.register(summarizer.clone());

        let agent = Agent::new(
            llm,
            tools,
            config.default_model.clone(),
            config.max_iterations,
        );

        Ok(Self::new(agent, summarizer))
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/enhance-idea", post(enhance::enhance_idea))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// `GET /` - static welcome message.
async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Idea Enhancer API! Use /enhance-idea to enhance your ideas."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatMessage, Role, ToolSchema};
    use async_trait::async_trait;

    /// LLM double that always replies with the same text.
    struct CannedLlm {
        reply: &'static str,
    }

    #[async_trait]
    impl LlmClient for CannedLlm {
        async fn chat_completion(
            &self,
            _model: &str,
            _messages: &[ChatMessage],
            _tools: Option<&[ToolSchema]>,
        ) -> anyhow::Result<ChatMessage> {
            Ok(ChatMessage {
                role: Role::Assistant,
                content: Some(self.reply.to_string()),
                tool_calls: None,
                tool_call_id: None,
            })
        }
    }

    /// LLM double that always fails.
    struct FailingLlm;

    #[async_trait]
    impl LlmClient for FailingLlm {
        async fn chat_completion(
            &self,
            _model: &str,
            _messages: &[ChatMessage],
            _tools: Option<&[ToolSchema]>,
        ) -> anyhow::Result<ChatMessage> {
            Err(anyhow::anyhow!("provider unavailable"))
        }
    }

    fn test_state(
        agent_llm: Arc<dyn LlmClient>,
        summarizer_llm: Arc<dyn LlmClient>,
    ) -> Arc<AppState> {
        let summarizer = Arc::new(SummarizeIdea::new(summarizer_llm, "test-model".to_string()));

        let mut tools = ToolRegistry::new();
        tools.register(summarizer.clone());

        let agent = Agent::new(agent_llm, tools, "test-model".to_string(), 5);

        Arc::new(AppState::new(agent, summarizer))
    }

    /// Serve the router on an ephemeral port and return its base URL.
    async fn spawn_app(state: Arc<AppState>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_root_returns_welcome_message() {
        let base = spawn_app(test_state(
            Arc::new(CannedLlm { reply: "opinion" }),
            Arc::new(CannedLlm { reply: "summary" }),
        ))
        .await;

        let response = reqwest::get(&base).await.unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("Idea Enhancer API"));
    }

    #[tokio::test]
    async fn test_enhance_idea_defaults_search_flag_to_true() {
        let base = spawn_app(test_state(
            Arc::new(CannedLlm { reply: "Solid niche with real demand." }),
            Arc::new(CannedLlm { reply: "An app that reminds users to water plants." }),
        ))
        .await;

        let response = reqwest::Client::new()
            .post(format!("{}/enhance-idea", base))
            .json(&serde_json::json!({"text": "A mobile app for plant care reminders"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(body["search_performed"], true);
        assert!(!body["summary"].as_str().unwrap().is_empty());
        assert!(!body["opinion"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_enhance_idea_echoes_disabled_search_flag() {
        let base = spawn_app(test_state(
            Arc::new(CannedLlm { reply: "opinion" }),
            Arc::new(CannedLlm { reply: "summary" }),
        ))
        .await;

        let response = reqwest::Client::new()
            .post(format!("{}/enhance-idea", base))
            .json(&serde_json::json!({
                "text": "A podcast about local history",
                "enhance_with_search": false
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["search_performed"], false);
    }

    #[tokio::test]
    async fn test_enhance_idea_summarizer_failure_returns_500() {
        let base = spawn_app(test_state(
            Arc::new(CannedLlm { reply: "opinion" }),
            Arc::new(FailingLlm),
        ))
        .await;

        let response = reqwest::Client::new()
            .post(format!("{}/enhance-idea", base))
            .json(&serde_json::json!({"text": "A podcast about local history"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);

        let body: serde_json::Value = response.json().await.unwrap();
        assert!(!body["detail"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_enhance_idea_rejects_empty_text() {
        let base = spawn_app(test_state(
            Arc::new(CannedLlm { reply: "opinion" }),
            Arc::new(CannedLlm { reply: "summary" }),
        ))
        .await;

        let response = reqwest::Client::new()
            .post(format!("{}/enhance-idea", base))
            .json(&serde_json::json!({"text": "   "}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let body: serde_json::Value = response.json().await.unwrap();
        assert!(!body["detail"].as_str().unwrap().is_empty());
    }
}
