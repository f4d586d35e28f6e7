//! Terminal output for review dashboards.
//!
//! Everything the core produces is markdown. Interactive runs get a styled
//! rendering through termimad; `--no-color` runs and pipes get the raw text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown to the terminal, styled or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Prints markdown to stdout.
    ///
    /// Styled output goes line by line so section headers keep their leading
    /// hashes; the due and overdue listings lean on those as visual anchors.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
