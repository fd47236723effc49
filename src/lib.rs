//! # Idea Enhancer
//!
//! A minimal HTTP service that evaluates business and content ideas.
//!
//! This library provides:
//! - An HTTP API for submitting ideas and receiving an investor-facing opinion
//! - A tool-based agent loop that can research ideas on the web
//! - Integration with OpenAI-compatible chat completion providers
//!
//! ## Architecture
//!
//! The service follows the "tools in a loop" pattern:
//! 1. Receive an idea via the API
//! 2. Build a prompt asking for a viability opinion
//! 3. Call the LLM with the available tools (web search, summarization)
//! 4. Feed tool results back to the LLM, repeat until it produces a final answer
//!
//! The summarizer doubles as a direct capability: the API handler calls it on
//! the raw idea text to produce the `summary` field of the response, while the
//! agent may also invoke it as a tool during its loop.
//!
//! ## Example
//!
//! ```rust,ignore
//! use idea_enhancer::{api, config::Config};
//!
//! let config = Config::from_env()?;
//! api::serve(config).await?;
//! ```

pub mod api;
pub mod agent;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
