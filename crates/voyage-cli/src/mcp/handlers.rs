//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use voyage_core::{
    display::{Notice, StageView},
    params as core, Session, Toggle, Transition,
};

use super::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// `#[serde(transparent)]` passes deserialization straight through to the
/// wrapped core type, so the core parameter structs need no MCP-specific
/// code.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type StartPlanning = McpParams<core::StartPlanning>;
pub type UpdatePlanning = McpParams<core::UpdatePlanning>;
pub type Browse = McpParams<core::Browse>;
pub type ToggleItem = McpParams<core::ToggleItem>;
pub type SelectDay = McpParams<core::SelectDay>;
pub type NavigateBack = McpParams<core::NavigateBack>;
pub type ExportItinerary = McpParams<core::ExportItinerary>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Every tool answers with an optional notice followed by the current screen.
fn screen(session: &Session, notice: Option<Notice>) -> CallToolResult {
    let mut text = notice.map(|notice| format!("{notice}\n")).unwrap_or_default();
    text.push_str(&StageView(session).to_string());
    CallToolResult::success(vec![Content::text(text)])
}

fn transition_notice(transition: Transition) -> Option<Notice> {
    match transition {
        Transition::Blocked => Some(Notice::info(
            "Blocked: the current step is incomplete. Nothing changed.",
        )),
        Transition::Step(step) => Some(Notice::info(format!("Now on: {step}"))),
        Transition::Stage(stage) => Some(Notice::success(format!("Moved to the {stage} stage"))),
    }
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    pub async fn start_planning(&self, Parameters(params): Parameters<StartPlanning>) -> McpResult {
        debug!("start_planning: {:?}", params);

        let mut session = self.session.lock().await;
        session
            .start_planning(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to start planning", &e))?;
        Ok(screen(&session, None))
    }

    pub async fn update_planning(&self, Parameters(params): Parameters<UpdatePlanning>) -> McpResult {
        debug!("update_planning: {:?}", params);

        let mut session = self.session.lock().await;
        session
            .update_planning(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update the planning form", &e))?;
        Ok(screen(&session, None))
    }

    pub async fn advance_planning(&self) -> McpResult {
        debug!("advance_planning");

        let mut session = self.session.lock().await;
        let transition = session
            .advance_planning()
            .await
            .map_err(|e| to_mcp_error("Failed to advance", &e))?;
        Ok(screen(&session, transition_notice(transition)))
    }

    pub async fn retreat_planning(&self) -> McpResult {
        debug!("retreat_planning");

        let mut session = self.session.lock().await;
        let transition = session
            .retreat_planning()
            .map_err(|e| to_mcp_error("Failed to go back", &e))?;
        Ok(screen(&session, transition_notice(transition)))
    }

    pub async fn browse(&self, Parameters(params): Parameters<Browse>) -> McpResult {
        debug!("browse: {:?}", params);

        let mut session = self.session.lock().await;
        session
            .browse(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to browse", &e))?;
        Ok(screen(&session, None))
    }

    pub async fn toggle_item(&self, Parameters(params): Parameters<ToggleItem>) -> McpResult {
        debug!("toggle_item: {:?}", params);

        let mut session = self.session.lock().await;
        let toggle = session
            .toggle_item(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to toggle item", &e))?;
        let id = params.as_ref().id.trim();
        let notice = match toggle {
            Toggle::Added => Notice::success(format!("Added {id}")),
            Toggle::Removed => Notice::success(format!("Removed {id}")),
        };
        Ok(screen(&session, Some(notice)))
    }

    pub async fn complete_discovery(&self) -> McpResult {
        debug!("complete_discovery");

        let mut session = self.session.lock().await;
        let transition = session
            .complete_discovery()
            .await
            .map_err(|e| to_mcp_error("Failed to generate the itinerary", &e))?;
        Ok(screen(&session, transition_notice(transition)))
    }

    pub async fn autoplan(&self) -> McpResult {
        debug!("autoplan");

        let mut session = self.session.lock().await;
        session
            .autoplan()
            .await
            .map_err(|e| to_mcp_error("Failed to generate the itinerary", &e))?;
        Ok(screen(&session, None))
    }

    pub async fn regenerate_plan(&self) -> McpResult {
        debug!("regenerate_plan");

        let mut session = self.session.lock().await;
        session
            .regenerate_plan()
            .await
            .map_err(|e| to_mcp_error("Failed to regenerate the itinerary", &e))?;
        Ok(screen(&session, Some(Notice::success("Generated a new itinerary"))))
    }

    pub async fn select_day(&self, Parameters(params): Parameters<SelectDay>) -> McpResult {
        debug!("select_day: {:?}", params);

        let mut session = self.session.lock().await;
        session
            .select_day(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to select day", &e))?;
        Ok(screen(&session, None))
    }

    /// Answers with the exported document itself rather than the screen.
    pub async fn export_itinerary(&self, Parameters(params): Parameters<ExportItinerary>) -> McpResult {
        debug!("export_itinerary: {:?}", params);

        let session = self.session.lock().await;
        let document = session
            .export_itinerary(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to export the itinerary", &e))?;
        Ok(CallToolResult::success(vec![Content::text(document)]))
    }

    pub async fn navigate_back(&self, Parameters(params): Parameters<NavigateBack>) -> McpResult {
        debug!("navigate_back: {:?}", params);

        let mut session = self.session.lock().await;
        let transition = session
            .navigate_back(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to navigate back", &e))?;
        Ok(screen(&session, transition_notice(transition)))
    }

    pub async fn reset(&self) -> McpResult {
        debug!("reset");

        let mut session = self.session.lock().await;
        session.reset();
        Ok(screen(&session, Some(Notice::info("Started over"))))
    }

    pub async fn show_stage(&self) -> McpResult {
        let session = self.session.lock().await;
        Ok(screen(&session, None))
    }
}
