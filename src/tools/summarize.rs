//! Idea summarization tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::llm::{ChatMessage, LlmClient, Role};

use super::Tool;

/// Summarize an idea description in a few sentences.
///
/// Used two ways: the agent may call it as a tool during its loop, and the
/// API handler calls [`SummarizeIdea::summarize`] directly on the raw idea
/// text to produce the response's `summary` field.
pub struct SummarizeIdea {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl SummarizeIdea {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }

    /// Ask the LLM for a 2-3 sentence summary of the given text.
    pub async fn summarize(&self, text: &str) -> anyhow::Result<String> {
        let messages = vec![ChatMessage {
            role: Role::User,
            content: Some(format!("Summarize this idea in 2-3 sentences:\n\n{}", text)),
            tool_calls: None,
            tool_call_id: None,
        }];

        let reply = self.llm.chat_completion(&self.model, &messages, None).await?;

        reply
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Summarizer returned an empty response"))
    }
}

#[async_trait]
impl Tool for SummarizeIdea {
    fn name(&self) -> &str {
        "summarize_idea"
    }

    fn description(&self) -> &str {
        "Generate a concise summary of an idea description."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The idea description to summarize"
                }
            },
            "required": ["text"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let text = args["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'text' argument"))?;

        self.summarize(text).await
    }
}
