//! Command-line argument types and the handlers behind them
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so the session never sees clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use jiff::{civil::Date, Zoned};
use log::{info, warn};
use voyage_core::{
    display::{CatalogListing, CatalogTabs, Notice, StageView},
    params::{ExportItinerary, StartPlanning, ToggleItem, UpdatePlanning},
    BudgetTier, Category, ExportFormat, Session, StageKind, Transition, TripError,
};

use crate::renderer::TerminalRenderer;

/// Plan a whole trip from flags
///
/// Runs the planning form, discovery and itinerary generation in one go.
/// Pick catalog items by id with `--select` (see `voyage catalog` for the
/// ids), or let the generator choose with `--autoplan`. Without either, the
/// catalog is shown so you can pick.
#[derive(Args)]
pub struct PlanArgs {
    #[arg(help = "Where the trip goes")]
    pub destination: String,
    #[arg(long, help = "Check-in date (YYYY-MM-DD)")]
    pub check_in: Option<String>,
    #[arg(long, help = "Check-out date (YYYY-MM-DD)")]
    pub check_out: Option<String>,
    #[arg(
        short,
        long = "interest",
        value_delimiter = ',',
        help = "Interests as comma-separated list (food, culture, nightlife, adventure, shopping, nature)"
    )]
    pub interests: Vec<String>,
    #[arg(
        short,
        long,
        help = "Daily budget per person: budget, moderate, luxury, ultra or 500, 1000, 2000, 3000"
    )]
    pub budget: Option<BudgetTier>,
    #[arg(short, long, default_value_t = 2, help = "Number of travelers (1-10)")]
    pub travelers: u32,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        group = "picks",
        help = "Catalog item ids to include, as comma-separated list"
    )]
    pub select: Vec<String>,
    #[arg(
        short,
        long,
        conflicts_with = "select",
        group = "picks",
        help = "Let the generator pick everything"
    )]
    pub autoplan: bool,
    #[arg(
        short,
        long,
        value_name = "PATH",
        requires = "picks",
        help = "Also save the itinerary to a file (.json for JSON, otherwise markdown)"
    )]
    pub export: Option<PathBuf>,
}

impl From<&PlanArgs> for StartPlanning {
    fn from(val: &PlanArgs) -> Self {
        StartPlanning {
            destination: val.destination.clone(),
            travelers: val.travelers,
            budget: None,
        }
    }
}

impl From<&PlanArgs> for UpdatePlanning {
    fn from(val: &PlanArgs) -> Self {
        UpdatePlanning {
            check_in: val.check_in.clone(),
            check_out: val.check_out.clone(),
            toggle_interests: val.interests.clone(),
            budget: val.budget.map(|tier| tier.amount()),
            ..Default::default()
        }
    }
}

/// List the catalog for a destination
#[derive(Args)]
pub struct CatalogArgs {
    #[arg(default_value = "Delhi", help = "Destination to look up")]
    pub destination: String,
    #[arg(short, long, help = "Only one tab: places, dining or events")]
    pub category: Option<String>,
}

/// Runs commands against one session and renders the outcome.
pub struct Cli {
    pub(crate) session: Session,
    pub(crate) renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub async fn handle_plan(mut self, args: PlanArgs) -> Result<()> {
        self.session
            .start_planning(&StartPlanning::from(&args))
            .context("Failed to start planning")?;

        let update = UpdatePlanning::from(&args);
        if !update.is_empty() {
            self.session
                .update_planning(&update)
                .context("Failed to fill in the planning form")?;
        }
        if let Some(notice) = self.past_check_in_notice() {
            self.renderer.render_notice(&notice)?;
        }

        while self.session.stage_kind() == StageKind::Planning {
            if self.session.advance_planning().await? == Transition::Blocked {
                self.show()?;
                bail!("Planning form is incomplete");
            }
        }

        for id in &args.select {
            let params = ToggleItem { id: id.clone() };
            self.session
                .toggle_item(&params)
                .with_context(|| format!("Failed to select '{id}'"))?;
        }

        if args.autoplan {
            self.session.autoplan().await?;
        } else if args.select.is_empty() {
            self.show()?;
            return self
                .renderer
                .render_notice(&Notice::info("Pick items with --select, or pass --autoplan."));
        } else {
            self.session.complete_discovery().await?;
        }

        info!("Planned trip to {}", args.destination);
        self.show()?;

        if let Some(path) = &args.export {
            let notice = self.export_to(path).await?;
            self.renderer.render_notice(&notice)?;
        }
        Ok(())
    }

    pub async fn handle_catalog(&self, args: CatalogArgs) -> Result<()> {
        let catalog = self.session.preview_catalog(&args.destination).await?;

        let output = match args.category.as_deref() {
            Some(name) => {
                let category = name
                    .parse::<Category>()
                    .map_err(|e| TripError::invalid_input("category").with_reason(e))?;
                CatalogListing::new(catalog.items(category), category).to_string()
            }
            None => CatalogTabs {
                catalog: &catalog,
                selection: None,
            }
            .to_string(),
        };

        self.renderer
            .render(&format!("# Catalog for {}\n\n{output}", args.destination.trim()))
    }

    /// Writes the itinerary to `path`, in the format its extension names.
    pub async fn export_to(&self, path: &Path) -> Result<Notice> {
        let format = ExportFormat::for_path(path);
        let document = self
            .session
            .export_itinerary(&ExportItinerary {
                format: Some(format.as_str().to_string()),
            })
            .context("Failed to export the itinerary")?;

        tokio::fs::write(path, document)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Exported itinerary as {} to {}", format.as_str(), path.display());
        Ok(Notice::success(format!("Saved the itinerary to {}", path.display())))
    }

    /// Renders the current stage.
    pub fn show(&self) -> Result<()> {
        self.renderer.render(&StageView(&self.session).to_string())
    }

    /// Check-in dates before today are accepted but called out.
    pub fn past_check_in_notice(&self) -> Option<Notice> {
        let flow = self.session.planning().ok()?;
        let today = Zoned::now().date();
        let check_in = flow.form().check_in.filter(|date| is_past(*date, today))?;
        warn!("Check-in {check_in} is before today ({today})");
        Some(Notice::info(format!("Check-in {check_in} is in the past.")))
    }
}

fn is_past(date: Date, today: Date) -> bool {
    date < today
}
