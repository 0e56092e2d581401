//! Generic MCP server over a tool registry and an optional prompt source.
//!
//! `TestwrightMcpServer` implements `rmcp::ServerHandler` by delegating
//! `tools/list` and `tools/call` to its [`ToolRegistry`] and
//! `prompts/list`/`prompts/get` to its [`PromptSource`]. The server itself is
//! stateless across requests; every request is an independent transaction
//! against the immutable registry.

use crate::error::{Error, Result};
use crate::prompts::PromptSource;
use crate::registry::ToolRegistry;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, GetPromptRequestParams, GetPromptResult,
    Implementation, ListPromptsResult, ListToolsResult, PaginatedRequestParams, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;
use std::sync::Arc;

/// Server metadata reported during the MCP handshake.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Optional usage instructions shown to connecting clients.
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "testwright".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: None,
        }
    }
}

/// Stdio MCP server for Testwright capabilities.
#[derive(Clone)]
pub struct TestwrightMcpServer {
    config: ServerConfig,
    registry: Arc<dyn ToolRegistry>,
    prompts: Option<Arc<dyn PromptSource>>,
}

impl TestwrightMcpServer {
    /// Create a server over a tool registry with default metadata.
    pub fn new<R: ToolRegistry + 'static>(registry: R) -> Self {
        Self {
            config: ServerConfig::default(),
            registry: Arc::new(registry),
            prompts: None,
        }
    }

    /// Set the server name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the client-facing usage instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.config.instructions = Some(instructions.into());
        self
    }

    /// Attach a prompt source.
    pub fn with_prompts<P: PromptSource + 'static>(mut self, prompts: P) -> Self {
        self.prompts = Some(Arc::new(prompts));
        self
    }

    /// Serve over stdio until the client disconnects.
    ///
    /// Transport failures here are startup-fatal; everything after the
    /// handshake flows through the per-request error channel.
    pub async fn serve_stdio(self) -> Result<()> {
        tracing::info!(
            server = %self.config.name,
            tools = self.registry.tool_count(),
            "starting MCP server on stdio"
        );
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        service
            .waiting()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Dispatch a tool call against a registry.
///
/// A registry miss is the protocol's unknown-capability error, distinct from
/// any failure the tool handler itself produces.
async fn dispatch_tool(
    registry: &dyn ToolRegistry,
    name: &str,
    args: Value,
) -> std::result::Result<CallToolResult, ErrorData> {
    match registry.call(name, args) {
        Some(handler) => handler.await,
        None => Err(ErrorData::invalid_params(
            format!("Unknown capability: {name}"),
            None,
        )),
    }
}

/// Resolve a prompt against an optional prompt source.
async fn dispatch_prompt(
    prompts: Option<&Arc<dyn PromptSource>>,
    name: &str,
) -> std::result::Result<GetPromptResult, ErrorData> {
    match prompts.and_then(|source| source.get(name)) {
        Some(handler) => handler.await,
        None => Err(ErrorData::invalid_params(
            format!("Unknown capability: {name}"),
            None,
        )),
    }
}

impl ServerHandler for TestwrightMcpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.registry.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        tracing::debug!(tool = %request.name, "dispatching tool call");
        let args = Value::Object(request.arguments.unwrap_or_default());
        dispatch_tool(self.registry.as_ref(), &request.name, args).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, ErrorData> {
        let prompts = self
            .prompts
            .as_ref()
            .map(|source| source.prompts())
            .unwrap_or_default();
        Ok(ListPromptsResult::with_all_items(prompts))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, ErrorData> {
        tracing::debug!(prompt = %request.name, "resolving prompt");
        dispatch_prompt(self.prompts.as_ref(), &request.name).await
    }

    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
        )
        .with_protocol_version(ProtocolVersion::LATEST)
        .with_server_info(Implementation::new(
            self.config.name.clone(),
            self.config.version.clone(),
        ));
        info.instructions = self.config.instructions.clone();
        info
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::PromptResult;
    use crate::registry::ToolResult;
    use rmcp::model::{Content, ErrorCode, Prompt, PromptMessage, PromptMessageRole, Tool};
    use serde_json::json;

    struct EchoRegistry;

    impl ToolRegistry for EchoRegistry {
        fn tools(&self) -> Vec<Tool> {
            vec![Tool::new(
                "analyze-app",
                "Analyze application structure",
                serde_json::Map::new(),
            )]
        }

        fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
            if name != "analyze-app" {
                return None;
            }
            Some(Box::pin(async {
                Ok(CallToolResult::success(vec![Content::text("step one")]))
            }))
        }
    }

    struct EchoPrompts;

    impl PromptSource for EchoPrompts {
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
                    "step one",
                )]))
            }))
        }
    }

    #[tokio::test]
    async fn test_dispatch_tool_known() {
        let result = dispatch_tool(&EchoRegistry, "analyze-app", json!({}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_dispatch_tool_unknown_is_protocol_error() {
        let err = dispatch_tool(&EchoRegistry, "not-a-real-tool", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Unknown capability: not-a-real-tool");
    }

    #[tokio::test]
    async fn test_dispatch_prompt_known() {
        let source: Arc<dyn PromptSource> = Arc::new(EchoPrompts);
        let result = dispatch_prompt(Some(&source), "analyze-app").await.unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_prompt_without_source() {
        let err = dispatch_prompt(None, "analyze-app").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Unknown capability: analyze-app");
    }

    #[test]
    fn test_get_info_reports_config() {
        let server = TestwrightMcpServer::new(EchoRegistry)
            .with_name("testwright")
            .with_instructions("run the steps in order")
            .with_prompts(EchoPrompts);
        let info = server.get_info();
        assert_eq!(info.server_info.name, "testwright");
        assert_eq!(
            info.instructions.as_deref(),
            Some("run the steps in order")
        );
    }

    #[test]
    fn test_default_config_uses_crate_version() {
        let config = ServerConfig::default();
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert!(config.instructions.is_none());
    }
}
