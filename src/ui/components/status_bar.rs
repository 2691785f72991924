use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::catalog::CatalogState;
use crate::keybindings::{KeyAction, KeybindingResolver};
use crate::ui::theme::ThemeListener;

/// Spinner animation frames
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Status bar component
pub struct StatusBar {
    theme: ThemeListener,
    spinner_frame: usize,
    hints: String,
    /// Transient message, e.g. config warnings at startup
    notice: Option<String>,
    loaded_at: Option<DateTime<Local>>,
}

impl StatusBar {
    pub fn new(theme: ThemeListener, resolver: &KeybindingResolver) -> Self {
        Self {
            theme,
            spinner_frame: 0,
            hints: key_hints(resolver),
            notice: None,
            loaded_at: None,
        }
    }

    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    /// Record when the catalog last finished loading
    pub fn mark_loaded(&mut self) {
        self.loaded_at = Some(Local::now());
    }

    pub fn clear_loaded(&mut self) {
        self.loaded_at = None;
    }

    /// Advance the spinner animation (call every ~100ms while loading)
    pub fn tick_spinner(&mut self, loading: bool) {
        if loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get current spinner frame character
    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &CatalogState) {
        let styles = self.theme.styles();
        let mode = self.theme.mode();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(30), // Left: loading, error, notice or key hints
                Constraint::Length(18), // Center: product count
                Constraint::Length(20), // Right: theme and load time
            ])
            .split(area);

        let left = if state.is_loading() {
            vec![
                Span::styled(format!("{} ", self.spinner()), styles.warning_text),
                Span::styled("Loading catalog...", styles.muted_text),
            ]
        } else if let Some(error) = state.error() {
            vec![
                Span::styled("✗ ", styles.error_text),
                Span::styled(error.to_string(), styles.error_text),
            ]
        } else if let Some(notice) = &self.notice {
            vec![Span::styled(notice.clone(), styles.warning_text)]
        } else {
            vec![Span::styled(self.hints.clone(), styles.muted_text)]
        };
        frame.render_widget(Paragraph::new(Line::from(left)).style(styles.base), chunks[0]);

        let count = if state.is_loading() {
            String::new()
        } else {
            format!(
                "{}/{} products",
                state.filtered_products().len(),
                state.products().len()
            )
        };
        frame.render_widget(
            Paragraph::new(Span::styled(count, styles.normal_text)).style(styles.base),
            chunks[1],
        );

        let loaded = self
            .loaded_at
            .map(|at| format!(" {}", at.format("%H:%M:%S")))
            .unwrap_or_default();
        let right = format!("[{}]{}", mode.as_str(), loaded);
        frame.render_widget(
            Paragraph::new(Span::styled(right, styles.muted_text))
                .style(styles.base)
                .right_aligned(),
            chunks[2],
        );
    }
}

/// Hint line built from the first key of each common action
fn key_hints(resolver: &KeybindingResolver) -> String {
    [
        (KeyAction::Quit, "quit"),
        (KeyAction::ToggleTheme, "theme"),
        (KeyAction::Increment, "count"),
        (KeyAction::Reload, "reload"),
        (KeyAction::ToggleFocus, "focus"),
        (KeyAction::Help, "help"),
    ]
    .iter()
    .filter_map(|(action, label)| {
        let display = resolver.binding_display(*action);
        let key = display.split(" / ").next()?;
        (!key.is_empty()).then(|| format!("{}: {}", key, label))
    })
    .collect::<Vec<_>>()
    .join(" │ ")
}
