//! MCP server handler.

use rmcp::{
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool_handler, ServerHandler,
};

use crate::webhook::WebhookForwarder;

/// Exposes the forwarder as the `send_webhook` MCP tool.
#[derive(Clone)]
pub struct WebhookMcpServer {
    pub(crate) forwarder: WebhookForwarder,
    tool_router: ToolRouter<Self>,
}

impl WebhookMcpServer {
    pub fn new(forwarder: WebhookForwarder) -> Self {
        Self {
            forwarder,
            tool_router: Self::create_tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for WebhookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: crate::config::resolver::SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Webhook MCP Server".into()),
                description: Some(
                    "Forwards JSON payloads to the webhook configured as WEBHOOK_URL.".into(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Use send_webhook to POST a JSON payload to the configured webhook. \
                 The result carries the webhook's status_code, headers and content, \
                 or an error message."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigResolver, ForwardConfig};

    #[test]
    fn advertises_tools_under_server_name() {
        let forwarder = WebhookForwarder::new(
            ConfigResolver::new("/nonexistent/mcp_config.json"),
            &ForwardConfig::default(),
        )
        .unwrap();
        let info = WebhookMcpServer::new(forwarder).get_info();

        assert_eq!(info.server_info.name, "webhook-mcp-server");
        assert!(info.capabilities.tools.is_some());
    }
}
