//! MCP server implementation for Voyage
//!
//! Exposes one trip-planning session to AI assistants over the Model Context
//! Protocol. Every tool answers with the screen the session is on afterwards,
//! so the assistant always sees what a person at the terminal would see.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use voyage_core::Session;

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{
    Browse, ExportItinerary, McpResult, NavigateBack, SelectDay, StartPlanning, ToggleItem, UpdatePlanning,
};

/// MCP server for Voyage
#[derive(Clone)]
pub struct VoyageMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VoyageMcpServer {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.session.clone())
    }

    #[tool(
        name = "start_planning",
        description = "Start planning a trip from the landing screen. Requires a destination; travelers (1-10, default 2) is optional. The form always opens with the default budget of 1000 per day; set another budget with update_planning. Opens step 1 of the planning form."
    )]
    async fn start_planning(&self, params: Parameters<StartPlanning>) -> McpResult {
        self.handlers().start_planning(params).await
    }

    #[tool(
        name = "update_planning",
        description = "Edit the planning form. All fields are optional: check_in and check_out as YYYY-MM-DD (check-out may not be before check-in), toggle_interests as a list of interest ids (food, culture, nightlife, adventure, shopping, nature), budget as a daily amount (500, 1000, 2000, 3000), travelers (clamped to 1-10). If any field is invalid nothing is changed."
    )]
    async fn update_planning(&self, params: Parameters<UpdatePlanning>) -> McpResult {
        self.handlers().update_planning(params).await
    }

    #[tool(
        name = "advance_planning",
        description = "Move to the next planning step. Step 1 needs both dates, step 2 at least one interest. Advancing from step 3 loads the catalog and opens discovery. Reports 'Blocked' without changing anything when the current step is incomplete."
    )]
    async fn advance_planning(&self) -> McpResult {
        self.handlers().advance_planning().await
    }

    #[tool(
        name = "retreat_planning",
        description = "Go back one planning step. From step 1 this returns to the landing screen and discards the trip."
    )]
    async fn retreat_planning(&self) -> McpResult {
        self.handlers().retreat_planning().await
    }

    #[tool(
        name = "browse",
        description = "Show a catalog tab while discovering: places, dining or events. Without a category the current tab is shown again. Each item is listed with its id, price and duration."
    )]
    async fn browse(&self, params: Parameters<Browse>) -> McpResult {
        self.handlers().browse(params).await
    }

    #[tool(
        name = "toggle_item",
        description = "Select a catalog item by id, or deselect it if already selected. The reply includes the running totals of cost and hours against the group's daily budget."
    )]
    async fn toggle_item(&self, params: Parameters<ToggleItem>) -> McpResult {
        self.handlers().toggle_item(params).await
    }

    #[tool(
        name = "complete_discovery",
        description = "Build an itinerary from the selected items and show it. Reports 'Blocked' when nothing is selected. If generation fails the selection is kept and the call can be retried."
    )]
    async fn complete_discovery(&self) -> McpResult {
        self.handlers().complete_discovery().await
    }

    #[tool(
        name = "autoplan",
        description = "Let the generator choose everything for the trip, ignoring and clearing the current selection, and show the itinerary."
    )]
    async fn autoplan(&self) -> McpResult {
        self.handlers().autoplan().await
    }

    #[tool(
        name = "regenerate_plan",
        description = "Ask for a fresh itinerary with the same trip and selection. On failure the previous itinerary stays in place."
    )]
    async fn regenerate_plan(&self) -> McpResult {
        self.handlers().regenerate_plan().await
    }

    #[tool(
        name = "select_day",
        description = "Show one day of the itinerary by its 1-based day number."
    )]
    async fn select_day(&self, params: Parameters<SelectDay>) -> McpResult {
        self.handlers().select_day(params).await
    }

    #[tool(
        name = "export_itinerary",
        description = "Export the itinerary shown on the results screen as a document to save or share. format is 'markdown' (default, every day in order) or 'json' (trip parameters, selection and itinerary). Replies with the document only; the session is unchanged."
    )]
    async fn export_itinerary(&self, params: Parameters<ExportItinerary>) -> McpResult {
        self.handlers().export_itinerary(params).await
    }

    #[tool(
        name = "navigate_back",
        description = "Jump back to an earlier stage: 'hero' starts over, 'planning' reopens the form with the trip filled in (the selection is dropped), 'discovery' returns to the catalog with the selection kept."
    )]
    async fn navigate_back(&self, params: Parameters<NavigateBack>) -> McpResult {
        self.handlers().navigate_back(params).await
    }

    #[tool(
        name = "reset",
        description = "Discard the whole session and return to the landing screen."
    )]
    async fn reset(&self) -> McpResult {
        self.handlers().reset().await
    }

    #[tool(
        name = "show_stage",
        description = "Show the current screen without changing anything."
    )]
    async fn show_stage(&self) -> McpResult {
        self.handlers().show_stage().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for VoyageMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "voyage".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Voyage plans a trip in four stages: landing screen, planning form, discovery and itinerary.

## Workflow
1. `start_planning` with a destination
2. `update_planning` to set dates and interests, then `advance_planning` through the three steps (dates, interests, budget and travelers)
3. `browse` the places, dining and events tabs and `toggle_item` the ones to include
4. `complete_discovery` to build the itinerary from the selection, or `autoplan` to let the generator choose
5. `select_day` to read each day, `regenerate_plan` for a different take, `export_itinerary` to save or share the trip

## Going back
- `retreat_planning` moves back one planning step
- `navigate_back` jumps to 'planning', 'discovery' or 'hero'
- `reset` starts over

Every tool replies with the current screen. A tool that is not valid in the current stage fails without changing anything."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: VoyageMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Voyage MCP server on stdio");
    debug!("Server created with {} tools", server.tool_router.list_all().len());

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
