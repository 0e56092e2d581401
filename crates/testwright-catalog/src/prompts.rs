//! The catalog as MCP prompts.
//!
//! A read-only view over the same registry the tools expose. Prompt
//! payloads carry the raw backing content without the workflow directive:
//! a prompt is shown to the user's agent as conversation input, not
//! executed as a tool result.

use std::sync::Arc;

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use testwright_mcp::{McpErrorExt, PromptResult, PromptSource};

use crate::service::CapabilityService;

/// MCP prompts backed by the capability catalog.
pub struct CatalogPrompts {
    service: Arc<CapabilityService>,
}

impl CatalogPrompts {
    /// Create a prompt view over a shared capability service.
    pub fn new(service: Arc<CapabilityService>) -> Self {
        Self { service }
    }
}

impl PromptSource for CatalogPrompts {
    fn prompts(&self) -> Vec<Prompt> {
        self.service
            .catalog()
            .list_all()
            .map(|(name, description)| Prompt::new(name, Some(description), None))
            .collect()
    }

    fn get(&self, name: &str) -> Option<PromptResult> {
        let entry = self.service.catalog().lookup(name)?;
        let description = entry.description().to_string();

        let service = Arc::clone(&self.service);
        let name = name.to_string();
        Some(Box::pin(async move {
            let content = service.fetch(&name).await.map_err(|e| e.to_mcp_error())?;
            Ok(
                GetPromptResult::new(vec![PromptMessage::new_text(
                    PromptMessageRole::User,
                    content,
                )])
                .with_description(description),
            )
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================
