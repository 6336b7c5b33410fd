//! The `send_webhook` tool.
//!
//! Forwarder failures are reported inside the tool result (`is_error` set,
//! `{"error": ...}` text) so the client always receives a value rather than
//! a protocol error.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::server::WebhookMcpServer;
use crate::webhook::{ForwardError, ForwardResponse};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SendWebhookParams {
    /// Data to send; forwarded unchanged as the JSON request body.
    pub payload: serde_json::Value,
}

fn mcp_err(msg: impl std::fmt::Display) -> McpError {
    McpError::internal_error(msg.to_string(), None)
}

#[tool_router]
impl WebhookMcpServer {
    pub(crate) fn create_tool_router() -> ToolRouter<Self> {
        Self::tool_router()
    }

    /// POST the payload to the configured webhook and report the response.
    #[tool(
        description = "Send a POST request to the configured webhook URL. The payload is sent as the JSON request body; the result holds status_code, headers and content, or error."
    )]
    async fn send_webhook(
        &self,
        Parameters(p): Parameters<SendWebhookParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.forwarder.forward(&p.payload).await;
        tool_result(&outcome)
    }
}

/// Render a forward outcome as tool output.
pub(crate) fn tool_result(
    outcome: &Result<ForwardResponse, ForwardError>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(response) => {
            let json = serde_json::to_string(response).map_err(mcp_err)?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }
        Err(e) => {
            let json = serde_json::json!({ "error": e.to_string() }).to_string();
            Ok(CallToolResult::error(vec![Content::text(json)]))
        }
    }
}
