use crate::config::AppConfig;

/// Card heading.
pub const TITLE: &str = "Life Rhythm";

/// Welcome sentence shown under the heading.
pub const WELCOME: &str = "Welcome to your personal task and event tracking application.";

/// Status notice shown inside the inset box.
pub const NOTICE: &str = "🚀 Project initialized successfully! Ready for development.";

/// Application state.
///
/// There is nothing to track yet: the welcome card takes no input and the
/// copy above is fixed. The struct exists so the draw path and a future
/// task/event model share one seam.
pub struct App {
    pub config: AppConfig,
}

impl App {
    pub fn new() -> Self {
        let config = AppConfig::load().unwrap_or_default();
        Self { config }
    }
}

/// The welcome card as plain text, for `--plain` mode.
///
/// Same copy as the TUI card, one string per visual block.
pub fn plain_text() -> String {
    format!("{}\n\n{}\n\n{}\n", TITLE, WELCOME, NOTICE)
}
