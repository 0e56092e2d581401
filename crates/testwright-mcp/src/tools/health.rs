//! Health check tool.
//!
//! Provides a built-in `health` tool that reports server status, version,
//! and the number of registered capabilities.

use crate::registry::{ToolRegistry, ToolResult};
use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Number of registered capabilities, the health tool included.
    pub capability_count: usize,
}

/// A tool registry that provides the `health` tool.
///
/// Captures server metadata at construction time and reports it when the
/// tool is called.
pub struct HealthTools {
    server_name: String,
    version: String,
    capability_count: usize,
}

impl HealthTools {
    /// Create health tools with server metadata.
    ///
    /// `capability_count` should include the health tool itself.
    pub fn new(
        server_name: impl Into<String>,
        version: impl Into<String>,
        capability_count: usize,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            version: version.into(),
            capability_count,
        }
    }
}

impl ToolRegistry for HealthTools {
    fn tools(&self) -> Vec<Tool> {
        vec![Tool::new(
            "health",
            "Check server health and status",
            serde_json::Map::new(),
        )]
    }

    fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
        if name != "health" {
            return None;
        }

        let response = HealthResponse {
            status: "healthy".to_string(),
            server_name: self.server_name.clone(),
            version: self.version.clone(),
            capability_count: self.capability_count,
        };

        Some(Box::pin(async move {
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[test]
    fn test_health_tools_creation() {
        let tools = HealthTools::new("testwright", "0.1.0", 14);
        assert_eq!(tools.tool_count(), 1);
        assert!(tools.has_tool("health"));
        assert!(!tools.has_tool("analyze-app"));
    }

    #[tokio::test]
    async fn test_health_tools_call() {
        let tools = HealthTools::new("testwright", "0.1.0", 14);
        let future = tools.call("health", json!({})).unwrap();
        let result = future.await.unwrap();

        assert_eq!(result.is_error, Some(false));
        let text = match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => panic!("expected text content"),
        };
        let response: HealthResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(response.status, "healthy");
        assert_eq!(response.server_name, "testwright");
        assert_eq!(response.capability_count, 14);
    }

    #[test]
    fn test_health_tools_unknown_tool() {
        let tools = HealthTools::new("testwright", "0.1.0", 1);
        assert!(tools.call("not-a-real-tool", json!({})).is_none());
    }

    #[test]
    fn test_health_response_roundtrip() {
        let json = r#"{"status":"healthy","server_name":"testwright","version":"0.1.0","capability_count":3}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "healthy");
        assert_eq!(response.capability_count, 3);
    }
}
