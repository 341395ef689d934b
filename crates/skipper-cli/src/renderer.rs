//! Markdown output for the wizard's prompts and summaries.
//!
//! Step prompts, the progress stepper, and the order summary are all
//! produced as markdown; this renderer either styles that markdown with
//! termimad or passes it through untouched for plain terminals and
//! scripted runs.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders wizard markdown, styled or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a renderer; `rich_enabled` selects styled output.
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Step headings and the bold summary labels carry the color; the
        // stepper icons distinguish themselves without styling.
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Print a block of wizard markdown.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Keep the hashes so step headings read the same on
                    // screen as in scripted output.
                    println!("\x1b[36m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}
