//! LLM client used by the plan generator.
//!
//! `LlmChat` is the seam: production code talks to [`AnthropicClient`],
//! tests substitute a mock.

pub mod anthropic;
pub mod config;
pub mod tools;
pub mod types;

pub use anthropic::AnthropicClient;
use config::LlmConfig;
pub use types::LlmChat;
use types::LlmError;

impl AnthropicClient {
    /// Build a client from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        Self::new(config.api_key, config.model, config.timeouts)
    }
}
