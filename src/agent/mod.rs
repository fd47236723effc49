//! Agent module - the idea evaluation loop.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Build the enhancement prompt from the submitted idea
//! 2. Call the LLM with the available tools
//! 3. If the LLM requests tool calls, execute them and feed results back
//! 4. Repeat until the LLM produces a final response or the iteration
//!    bound is reached

mod agent_loop;
mod prompt;

pub use agent_loop::Agent;
pub use prompt::build_enhance_prompt;
