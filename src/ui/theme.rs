//! Visual theme and styling.

use console::Style;

/// shotit's visual theme.
///
/// Colors are cosmetic only; every message reads the same in plain mode.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warnings and skip notices (yellow).
    pub warning: Style,
    /// Style for errors (red).
    pub error: Style,
    /// Style for entity names and probed signals (cyan).
    pub entity: Style,
    /// Style for section labels such as "Tools:" (green).
    pub key: Style,
    /// Style for commands shown before they run (dim).
    pub command: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            entity: Style::new().cyan(),
            key: Style::new().green(),
            command: Style::new().dim(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            entity: Style::new(),
            key: Style::new(),
            command: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a shell command as echoed before running it.
    pub fn format_command(&self, command: &str) -> String {
        format!("{}", self.command.apply_to(format!("$ {}", command)))
    }

    /// Format an entity heading: `[name] description`.
    pub fn format_entity(&self, name: &str, description: &str) -> String {
        let head = format!("[{}]", self.entity.apply_to(name));
        if description.is_empty() {
            head
        } else {
            format!("{} {}", head, description)
        }
    }

    /// Format a labelled heading such as `executing tools: recon`.
    pub fn format_header(&self, label: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", label)), value)
    }

    /// Format a signal in green when present, red otherwise.
    pub fn format_presence(&self, value: &str, present: bool) -> String {
        if present {
            format!("{}", self.success.apply_to(value))
        } else {
            format!("{}", self.error.apply_to(value))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
