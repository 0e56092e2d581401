//! Prompt source trait for the MCP server.
//!
//! The catalog is also exposed through the MCP prompt operations
//! (`prompts/list`, `prompts/get`) as a read-only view over the same
//! registry. `PromptSource` mirrors the shape of
//! [`ToolRegistry`](crate::registry::ToolRegistry): listing is synchronous,
//! resolution returns a boxed future, and an unrecognized name is `None` so
//! the server owns the not-found error.

use rmcp::model::{ErrorData, GetPromptResult, Prompt};
use std::future::Future;
use std::pin::Pin;

/// Type alias for async prompt resolution results.
pub type PromptResult = Pin<Box<dyn Future<Output = Result<GetPromptResult, ErrorData>> + Send>>;

/// Trait for listing and resolving MCP prompts.
pub trait PromptSource: Send + Sync {
    /// Returns all available prompts.
    fn prompts(&self) -> Vec<Prompt>;

    /// Resolves a prompt by name.
    ///
    /// Returns `None` if the name is not recognized by this source.
    fn get(&self, name: &str) -> Option<PromptResult>;

    /// Returns the number of available prompts.
    fn prompt_count(&self) -> usize {
        self.prompts().len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::{PromptMessage, PromptMessageRole};

    struct SinglePrompt;

    impl PromptSource for SinglePrompt {
        fn prompts(&self) -> Vec<Prompt> {
            vec![Prompt::new(
                "analyze-app",
                Some("Analyze application structure"),
                None,
            )]
        }

        fn get(&self, name: &str) -> Option<PromptResult> {
            if name != "analyze-app" {
                return None;
            }
            Some(Box::pin(async {
                Ok(GetPromptResult::new(vec![PromptMessage::new_text(
                    PromptMessageRole::User,
                    "step content",
                )]))
            }))
        }
    }

    #[test]
    fn test_prompt_count() {
        assert_eq!(SinglePrompt.prompt_count(), 1);
    }

    #[tokio::test]
    async fn test_get_known_prompt() {
        let result = SinglePrompt.get("analyze-app").unwrap().await.unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_get_unknown_prompt_returns_none() {
        assert!(SinglePrompt.get("not-a-real-tool").is_none());
    }

    #[test]
    fn test_trait_object_safety() {
        fn _assert_object_safe(_: &dyn PromptSource) {}
    }
}
