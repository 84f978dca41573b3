//! Terminal output for ccswap: labels, tables, spinners, color detection.
//!
//! Color resolution, in priority order: `--no-color` flag, `NO_COLOR` env
//! var, `TERM=dumb`, then TTY detection for `auto` mode.

use anstream::{eprintln, println};
use anstyle::{AnsiColor, Color, Style};
use comfy_table::{Cell, ContentArrangement, Table, presets};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Color mode for output
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    #[default]
    Auto,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// Resolved display settings for one invocation.
#[derive(Debug, Clone)]
pub struct Ui {
    pub color_enabled: bool,
    pub spinner_enabled: bool,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(ColorMode::Auto, false)
    }
}

impl Ui {
    pub fn new(mode: ColorMode, force_no_color: bool) -> Self {
        let color_enabled = !force_no_color
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("TERM").map(|t| t != "dumb").unwrap_or(true)
            && match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => std::io::stdout().is_terminal(),
            };

        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self {
            color_enabled,
            spinner_enabled: color_enabled && std::io::stdout().is_terminal(),
        }
    }

    fn label(&self, color: AnsiColor) -> Style {
        if self.color_enabled {
            Style::new().fg_color(Some(Color::Ansi(color))).bold()
        } else {
            Style::new()
        }
    }

    /// Print OK label (green) with message to stdout
    pub fn ok(&self, msg: impl AsRef<str>) {
        let label = self.label(AnsiColor::Green);
        println!("{label}OK{label:#} {}", msg.as_ref());
    }

    /// Print WARN label (yellow) with message to stdout
    pub fn warn(&self, msg: impl AsRef<str>) {
        let label = self.label(AnsiColor::Yellow);
        println!("{label}WARN{label:#} {}", msg.as_ref());
    }

    /// Print ERROR label (red) with message to stderr
    pub fn err(&self, msg: impl AsRef<str>) {
        let label = self.label(AnsiColor::Red);
        eprintln!("{label}ERROR{label:#} {}", msg.as_ref());
    }

    /// Print INFO label (cyan) with message to stdout
    pub fn info(&self, msg: impl AsRef<str>) {
        let label = self.label(AnsiColor::Cyan);
        println!("{label}INFO{label:#} {}", msg.as_ref());
    }

    /// Return a bold string for inline use
    pub fn bold(&self, s: impl AsRef<str>) -> String {
        if self.color_enabled {
            let st = Style::new().bold();
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    /// Return a dimmed string for inline use
    pub fn dim(&self, s: impl AsRef<str>) -> String {
        if self.color_enabled {
            let st = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)));
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    pub fn icon_ok(&self) -> &'static str {
        if self.color_enabled { "✓" } else { "[OK]" }
    }

    pub fn icon_warn(&self) -> &'static str {
        if self.color_enabled { "⚠" } else { "[!]" }
    }

    pub fn icon_err(&self) -> &'static str {
        if self.color_enabled { "✗" } else { "[X]" }
    }

    /// Create a borderless table for lists
    pub fn simple_table(&self) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(presets::NOTHING);
        table
    }

    pub fn cell(&self, content: impl Into<String>) -> Cell {
        Cell::new(content.into())
    }

    /// Header cell, bold when color is enabled
    pub fn header_cell(&self, content: impl Into<String>) -> Cell {
        let cell = Cell::new(content.into());
        if self.color_enabled {
            cell.add_attribute(comfy_table::Attribute::Bold)
        } else {
            cell
        }
    }

    /// Colored cell via comfy-table's own styling, which keeps column
    /// widths correct
    pub fn colored_cell(&self, content: impl Into<String>, color: AnsiColor) -> Cell {
        let cell = Cell::new(content.into());
        if self.color_enabled {
            cell.fg(ansi_to_comfy_color(color))
        } else {
            cell
        }
    }

    /// Spinner for longer operations; a hidden no-op when disabled.
    pub fn spinner(&self, message: impl Into<std::borrow::Cow<'static, str>>) -> ProgressBar {
        if self.spinner_enabled {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                    .template("{spinner:.cyan} {msg}")
                    .expect("valid template"),
            );
            pb.set_message(message);
            pb.enable_steady_tick(Duration::from_millis(80));
            pb
        } else {
            let pb = ProgressBar::hidden();
            pb.set_message(message);
            pb
        }
    }

    /// Finish a spinner with a success message
    pub fn spinner_finish_ok(
        &self,
        pb: &ProgressBar,
        msg: impl Into<std::borrow::Cow<'static, str>>,
    ) {
        if self.spinner_enabled {
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{msg}")
                    .expect("valid template"),
            );
            pb.finish_with_message(format!("{} {}", self.icon_ok(), msg.into()));
        } else {
            pb.finish_and_clear();
            self.ok(msg.into());
        }
    }

    /// Finish a spinner with an error message
    pub fn spinner_finish_err(
        &self,
        pb: &ProgressBar,
        msg: impl Into<std::borrow::Cow<'static, str>>,
    ) {
        if self.spinner_enabled {
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{msg}")
                    .expect("valid template"),
            );
            pb.finish_with_message(format!("{} {}", self.icon_err(), msg.into()));
        } else {
            pb.finish_and_clear();
            self.err(msg.into());
        }
    }

    /// Print a line to stdout
    pub fn println(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }

    /// Print an empty line
    pub fn newline(&self) {
        println!();
    }

    /// Print a section header
    pub fn section(&self, title: impl AsRef<str>) {
        println!("{}", self.bold(title));
    }
}

fn ansi_to_comfy_color(color: AnsiColor) -> comfy_table::Color {
    match color {
        AnsiColor::Black => comfy_table::Color::Black,
        AnsiColor::Red | AnsiColor::BrightRed => comfy_table::Color::Red,
        AnsiColor::Green | AnsiColor::BrightGreen => comfy_table::Color::Green,
        AnsiColor::Yellow | AnsiColor::BrightYellow => comfy_table::Color::Yellow,
        AnsiColor::Blue | AnsiColor::BrightBlue => comfy_table::Color::Blue,
        AnsiColor::Magenta | AnsiColor::BrightMagenta => comfy_table::Color::Magenta,
        AnsiColor::Cyan | AnsiColor::BrightCyan => comfy_table::Color::Cyan,
        AnsiColor::White | AnsiColor::BrightWhite => comfy_table::Color::White,
        AnsiColor::BrightBlack => comfy_table::Color::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("invalid".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_force_no_color_wins() {
        let ui = Ui::new(ColorMode::Always, true);
        assert!(!ui.color_enabled);
        assert!(!ui.spinner_enabled);
    }

    #[test]
    fn test_never_mode() {
        let ui = Ui::new(ColorMode::Never, false);
        assert!(!ui.color_enabled);
    }

    #[test]
    fn test_icons_without_color() {
        let ui = Ui::new(ColorMode::Never, false);
        assert_eq!(ui.icon_ok(), "[OK]");
        assert_eq!(ui.icon_warn(), "[!]");
        assert_eq!(ui.icon_err(), "[X]");
    }

    #[test]
    fn test_inline_styles_without_color() {
        let ui = Ui::new(ColorMode::Never, false);
        assert_eq!(ui.bold("x"), "x");
        assert_eq!(ui.dim("x"), "x");
    }

    #[test]
    fn test_spinner_disabled_without_tty() {
        let ui = Ui::new(ColorMode::Never, false);
        assert!(!ui.spinner_enabled);
        let pb = ui.spinner("test");
        pb.finish();
    }
}
