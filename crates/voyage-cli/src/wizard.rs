//! Interactive line-driven wizard.
//!
//! Each input line is one command; the current screen is rendered after
//! every command that changes something. What a bare word means depends on
//! the stage: a destination on the landing screen, an interest id while
//! planning, a catalog item id while discovering.

use std::{io::Write as _, path::Path};

use anyhow::{Context, Result};
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};
use voyage_core::{
    display::Notice,
    params::{Browse, NavigateBack, SelectDay, StartPlanning, ToggleItem, UpdatePlanning},
    BudgetTier, StageKind, Toggle, Transition, TripError,
};

use crate::cli::Cli;

const HELP: &str = "\
# Commands

- `next` / `back`: move through the wizard
- `in YYYY-MM-DD`, `out YYYY-MM-DD`: set the dates
- `budget moderate` or `budget 1000`, `travelers 4`
- `tab places|dining|events`: switch catalog tab
- `done`: build the itinerary from your picks, `auto`: let us pick
- `day 2`, `regenerate`, `export trip.md` (or `.json`)
- `planning`, `discovery`, `new`: jump back
- `quit`

Anything else is a destination, interest ids or catalog item ids,
depending on where you are.
";

/// One parsed line of wizard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    Help,
    Quit,
    Destination(String),
    Next,
    Back,
    CheckIn(String),
    CheckOut(String),
    Budget(String),
    Travelers(String),
    Interests(Vec<String>),
    Tab(String),
    Items(Vec<String>),
    Done,
    Auto,
    Day(String),
    Regenerate,
    Export(String),
    Jump(String),
}

impl WizardCommand {
    /// Interprets a non-empty input line for the given stage.
    pub fn parse(line: &str, stage: StageKind) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let head = head.to_ascii_lowercase();

        match head.as_str() {
            "help" | "?" => return Self::Help,
            "quit" | "exit" | "q" => return Self::Quit,
            _ => {}
        }
        if stage == StageKind::Hero {
            return Self::Destination(line.to_string());
        }

        match (head.as_str(), rest.is_empty()) {
            ("next", true) => Self::Next,
            ("back", true) => Self::Back,
            ("in", false) => Self::CheckIn(rest.to_string()),
            ("out", false) => Self::CheckOut(rest.to_string()),
            ("budget", false) => Self::Budget(rest.to_string()),
            ("travelers", false) => Self::Travelers(rest.to_string()),
            ("tab", false) => Self::Tab(rest.to_string()),
            ("done", true) => Self::Done,
            ("auto", true) => Self::Auto,
            ("day", false) => Self::Day(rest.to_string()),
            ("regenerate", true) => Self::Regenerate,
            ("export", false) => Self::Export(rest.to_string()),
            ("planning", true) => Self::Jump("planning".to_string()),
            ("discovery", true) => Self::Jump("discovery".to_string()),
            ("new" | "home", true) => Self::Jump("hero".to_string()),
            _ => {
                let words = line
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|word| !word.is_empty())
                    .map(str::to_string)
                    .collect();
                if stage == StageKind::Planning {
                    Self::Interests(words)
                } else {
                    Self::Items(words)
                }
            }
        }
    }
}

impl Cli {
    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run_wizard(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        self.show()?;
        prompt()?;

        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            if line.trim().is_empty() {
                prompt()?;
                continue;
            }

            let command = WizardCommand::parse(&line, self.session.stage_kind());
            debug!("Wizard: {command:?}");
            match command {
                WizardCommand::Quit => break,
                WizardCommand::Help => self.renderer.render(HELP)?,
                WizardCommand::Export(path) => {
                    let notice = self
                        .export_to(Path::new(&path))
                        .await
                        .unwrap_or_else(|e| Notice::failure(format!("{e:#}")));
                    self.renderer.render_notice(&notice)?;
                }
                command => match self.apply(command).await {
                    Ok(notice) => {
                        if let Some(notice) = notice {
                            self.renderer.render_notice(&notice)?;
                        }
                        self.show()?;
                    }
                    Err(e) => self.renderer.render_notice(&Notice::from_error(&e))?,
                },
            }
            prompt()?;
        }
        println!();
        Ok(())
    }

    async fn apply(&mut self, command: WizardCommand) -> voyage_core::Result<Option<Notice>> {
        let session = &mut self.session;
        let transition = match command {
            WizardCommand::Destination(destination) => {
                session.start_planning(&StartPlanning {
                    destination,
                    ..Default::default()
                })?;
                return Ok(None);
            }
            WizardCommand::Next => match session.stage_kind() {
                StageKind::Discovery => session.complete_discovery().await?,
                _ => session.advance_planning().await?,
            },
            WizardCommand::Back => match session.stage_kind() {
                StageKind::Discovery => session.back_to_planning()?,
                StageKind::Results => session.back_to_discovery()?,
                _ => session.retreat_planning()?,
            },
            WizardCommand::CheckIn(value) => {
                session.update_planning(&UpdatePlanning {
                    check_in: Some(value),
                    ..Default::default()
                })?;
                return Ok(self.past_check_in_notice());
            }
            WizardCommand::CheckOut(value) => {
                session.update_planning(&UpdatePlanning {
                    check_out: Some(value),
                    ..Default::default()
                })?;
                return Ok(None);
            }
            WizardCommand::Budget(value) => {
                let tier = value
                    .parse::<BudgetTier>()
                    .map_err(|e| TripError::invalid_input("budget").with_reason(e))?;
                session.update_planning(&UpdatePlanning {
                    budget: Some(tier.amount()),
                    ..Default::default()
                })?;
                return Ok(None);
            }
            WizardCommand::Travelers(value) => {
                let travelers = value
                    .parse::<u32>()
                    .map_err(|e| TripError::invalid_input("travelers").with_reason(e.to_string()))?;
                session.update_planning(&UpdatePlanning {
                    travelers: Some(travelers),
                    ..Default::default()
                })?;
                return Ok(None);
            }
            WizardCommand::Interests(interests) => {
                session.update_planning(&UpdatePlanning {
                    toggle_interests: interests,
                    ..Default::default()
                })?;
                return Ok(None);
            }
            WizardCommand::Tab(category) => {
                session.browse(&Browse {
                    category: Some(category),
                })?;
                return Ok(None);
            }
            WizardCommand::Items(ids) => {
                let mut changes = Vec::with_capacity(ids.len());
                for id in ids {
                    let verb = match session.toggle_item(&ToggleItem { id: id.clone() })? {
                        Toggle::Added => "Added",
                        Toggle::Removed => "Removed",
                    };
                    changes.push(format!("{verb} {id}"));
                }
                return Ok(Some(Notice::success(changes.join(", "))));
            }
            WizardCommand::Done => session.complete_discovery().await?,
            WizardCommand::Auto => {
                session.autoplan().await?;
                Transition::Stage(StageKind::Results)
            }
            WizardCommand::Day(value) => {
                let day = value
                    .parse::<u32>()
                    .map_err(|e| TripError::invalid_input("day").with_reason(e.to_string()))?;
                session.select_day(&SelectDay { day })?;
                return Ok(None);
            }
            WizardCommand::Regenerate => {
                session.regenerate_plan().await?;
                return Ok(Some(Notice::success("Here is a fresh take on your trip.")));
            }
            WizardCommand::Jump(to) => session.navigate_back(&NavigateBack { to })?,
            WizardCommand::Help | WizardCommand::Quit | WizardCommand::Export(_) => return Ok(None),
        };

        Ok(blocked_notice(transition, session.stage_kind()))
    }
}

fn blocked_notice(transition: Transition, stage: StageKind) -> Option<Notice> {
    if transition != Transition::Blocked {
        return None;
    }
    let message = match stage {
        StageKind::Discovery => "Pick at least one item, or type `auto`.",
        _ => "Finish this step before moving on.",
    };
    Some(Notice::info(message))
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush().context("Failed to write prompt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_is_a_destination_on_the_landing_screen() {
        assert_eq!(
            WizardCommand::parse("  New York ", StageKind::Hero),
            WizardCommand::Destination("New York".to_string())
        );
        assert_eq!(
            WizardCommand::parse("next", StageKind::Hero),
            WizardCommand::Destination("next".to_string())
        );
        assert_eq!(WizardCommand::parse("quit", StageKind::Hero), WizardCommand::Quit);
    }

    #[test]
    fn test_planning_commands() {
        let parse = |line| WizardCommand::parse(line, StageKind::Planning);

        assert_eq!(parse("in 2030-06-01"), WizardCommand::CheckIn("2030-06-01".to_string()));
        assert_eq!(parse("Budget luxury"), WizardCommand::Budget("luxury".to_string()));
        assert_eq!(parse("NEXT"), WizardCommand::Next);
        assert_eq!(
            parse("food, culture"),
            WizardCommand::Interests(vec!["food".to_string(), "culture".to_string()])
        );
    }

    #[test]
    fn test_bare_words_are_items_while_discovering() {
        let parse = |line| WizardCommand::parse(line, StageKind::Discovery);

        assert_eq!(
            parse("p1 r2"),
            WizardCommand::Items(vec!["p1".to_string(), "r2".to_string()])
        );
        assert_eq!(parse("tab dining"), WizardCommand::Tab("dining".to_string()));
        assert_eq!(parse("new"), WizardCommand::Jump("hero".to_string()));
        assert_eq!(parse("planning"), WizardCommand::Jump("planning".to_string()));
    }

    #[test]
    fn test_keyword_without_argument_is_not_a_command() {
        assert_eq!(
            WizardCommand::parse("day", StageKind::Results),
            WizardCommand::Items(vec!["day".to_string()])
        );
    }

    #[test]
    fn test_export_keeps_the_path() {
        assert_eq!(
            WizardCommand::parse("export  My Trips/delhi.md", StageKind::Results),
            WizardCommand::Export("My Trips/delhi.md".to_string())
        );
    }

    #[test]
    fn test_blocked_notice() {
        assert!(blocked_notice(Transition::Stage(StageKind::Results), StageKind::Results).is_none());
        let notice = blocked_notice(Transition::Blocked, StageKind::Discovery).unwrap();
        assert!(notice.message.contains("auto"));
    }
}
