//! Terminal rendering module for rich markdown output
//!
//! Renders the markdown produced by the core display types with termimad,
//! with a plain-text fallback for `--no-color` and pipes.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};
use voyage_core::display::{Notice, NoticeKind};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so nesting stays visible
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render a notice on its own line, colored by kind.
    pub fn render_notice(&self, notice: &Notice) -> Result<()> {
        if !self.rich_enabled {
            print!("{notice}");
            return Ok(());
        }

        let color = match notice.kind {
            NoticeKind::Info => 36,
            NoticeKind::Success => 32,
            NoticeKind::Error => 31,
        };
        for line in notice.to_string().lines() {
            println!("\x1b[{color}m{line}\x1b[0m");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Title\n\nbody\n").is_ok());
        assert!(renderer.render_notice(&Notice::success("Saved")).is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
