//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes bracket checking over the MCP protocol, making it
//! available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library that
//! the CLI commands use. Each `#[tool]` method delegates to
//! [`bracket_lint_core`] rather than implementing business logic directly.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use bracket_lint_core::{Config, ConfigResult, MatchStrategy};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `check_brackets` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckBracketsParams {
    /// The text to check.
    pub text: String,
    /// Bracket pairs such as "()" and "{}". Omit for the server's configuration.
    pub pairs: Option<Vec<String>>,
    /// Characters to ignore. Omit for the server's configuration.
    pub ignorable_symbols: Option<Vec<char>>,
    /// Balance algorithm: "stack" or "removal".
    pub strategy: Option<MatchStrategy>,
}

/// MCP server exposing bracket checking to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    config: Config,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with default bracket settings.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            config: Config::default(),
        }
    }

    /// Create a server whose tools default to `config`.
    ///
    /// Fails if the configured brackets cannot build a validator.
    pub fn with_config(config: Config) -> ConfigResult<Self> {
        config.validator()?;
        Ok(Self {
            tool_router: Self::tool_router(),
            config,
        })
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Check whether brackets in text are balanced.
    #[tool(
        description = "Check that brackets in text are balanced and properly nested. Returns a JSON report with `balanced`, `bracket_count`, and `unmatched`."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_brackets(
        &self,
        Parameters(params): Parameters<CheckBracketsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_brackets",
            pairs = ?params.pairs,
            strategy = ?params.strategy,
            "executing MCP tool"
        );

        let mut config = self.config.clone();
        if params.pairs.is_some() {
            config.bracket_pairs = params.pairs;
        }
        if params.ignorable_symbols.is_some() {
            config.ignorable_symbols = params.ignorable_symbols;
        }
        if params.strategy.is_some() {
            config.strategy = params.strategy;
        }

        if let Some(max) = config.input_limit()
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", params.text.len()),
                None,
            ));
        }

        let validator = config
            .validator()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let report = validator
            .report(&params.text)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "check_brackets",
            balanced = report.balanced,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use check_brackets to validate bracket balance.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
