//! The catalog as MCP tools.
//!
//! `CatalogTools` implements `ToolRegistry` with one no-argument tool per
//! catalog entry, dispatching calls through the `CapabilityService`.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;
use testwright_mcp::{McpErrorExt, ToolRegistry, ToolResult};

use crate::service::CapabilityService;

fn empty_schema() -> Arc<serde_json::Map<String, Value>> {
    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert(
        "properties".to_string(),
        Value::Object(serde_json::Map::new()),
    );
    Arc::new(schema)
}

fn make_tool(name: &str, description: &str) -> Tool {
    Tool::new(name.to_string(), description.to_string(), empty_schema())
}

/// MCP tools backed by the capability catalog.
pub struct CatalogTools {
    service: Arc<CapabilityService>,
}

impl CatalogTools {
    /// Create catalog tools over a shared capability service.
    pub fn new(service: Arc<CapabilityService>) -> Self {
        Self { service }
    }
}

impl ToolRegistry for CatalogTools {
    fn tools(&self) -> Vec<Tool> {
        self.service
            .catalog()
            .list_all()
            .map(|(name, description)| make_tool(name, description))
            .collect()
    }

    fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
        // Content units take no parameters; arguments are ignored.
        self.service.catalog().lookup(name)?;

        let service = Arc::clone(&self.service);
        let name = name.to_string();
        Some(Box::pin(async move {
            let payload = service
                .invoke(&name)
                .await
                .map_err(|e| e.to_mcp_error())?;
            Ok(CallToolResult::success(vec![Content::text(payload)]))
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogEntry};
    use crate::envelope::WORKFLOW_DIRECTIVE;
    use crate::store::ContentStore;
    use rmcp::model::{ErrorCode, RawContent};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_tools() -> (TempDir, CatalogTools) {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("steps")).unwrap();
        fs::create_dir_all(root.path().join("docs")).unwrap();
        fs::write(root.path().join("steps/one.md"), "## Step One\n").unwrap();
        fs::write(root.path().join("docs/guide.md"), "## Guide\n").unwrap();

        let catalog = Catalog::new(vec![
            CatalogEntry::workflow("step-one", "steps/one.md", "First step"),
            CatalogEntry::workflow("step-missing", "steps/missing.md", "Absent step"),
            CatalogEntry::reference("guide", "docs/guide.md", "The guide"),
        ]);
        let store = ContentStore::new(vec![root.path().to_path_buf()]);
        let service = CapabilityService::shared(catalog, store);
        (root, CatalogTools::new(service))
    }

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_one_tool_per_entry() {
        let (_root, tools) = fixture_tools();
        let listed = tools.tools();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].name, "step-one");
        assert_eq!(listed[2].name, "reference-guide");
    }

    #[test]
    fn test_tools_carry_descriptions_and_empty_contracts() {
        let (_root, tools) = fixture_tools();
        for tool in tools.tools() {
            assert!(tool.description.is_some());
            let schema = tool.input_schema.as_ref();
            assert_eq!(schema.get("type"), Some(&json!("object")));
            assert_eq!(schema.get("properties"), Some(&json!({})));
        }
    }

    #[tokio::test]
    async fn test_call_workflow_tool_returns_wrapped_payload() {
        let (_root, tools) = fixture_tools();
        let result = tools.call("step-one", json!({})).unwrap().await.unwrap();
        assert_eq!(result.is_error, Some(false));
        let text = result_text(&result);
        assert!(text.starts_with(WORKFLOW_DIRECTIVE));
        assert!(text.contains("## Step One\n"));
    }

    #[tokio::test]
    async fn test_call_reference_tool_returns_raw_payload() {
        let (_root, tools) = fixture_tools();
        let result = tools
            .call("reference-guide", json!({}))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(result_text(&result), "## Guide\n");
    }

    #[test]
    fn test_call_unknown_tool_returns_none() {
        let (_root, tools) = fixture_tools();
        assert!(tools.call("not-a-real-tool", json!({})).is_none());
    }

    #[tokio::test]
    async fn test_call_missing_file_surfaces_internal_error() {
        let (_root, tools) = fixture_tools();
        let err = tools
            .call("step-missing", json!({}))
            .unwrap()
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("steps/missing.md"));
    }

    #[tokio::test]
    async fn test_arguments_are_ignored() {
        let (_root, tools) = fixture_tools();
        let result = tools
            .call("step-one", json!({"unexpected": true}))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }
}
