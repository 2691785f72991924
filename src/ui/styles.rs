use ratatui::style::{Modifier, Style};

use super::theme::{ColorPalette, ThemeMode};

/// Pre-computed styles for the UI
#[derive(Clone)]
pub struct Styles {
    /// Page background and default foreground
    pub base: Style,

    // Text styles
    pub normal_text: Style,
    pub selected: Style,
    pub error_text: Style,
    pub warning_text: Style,
    pub muted_text: Style,
    pub title: Style,
    pub price: Style,

    // Border styles
    pub border_focused: Style,
    pub border_unfocused: Style,

    // Buttons
    pub button: Style,
    pub button_focused: Style,
}

impl Styles {
    pub fn from_mode(mode: ThemeMode) -> Self {
        Self::from_palette(mode.palette())
    }

    /// Create styles from a color palette
    pub fn from_palette(palette: ColorPalette) -> Self {
        Self {
            base: Style::default().fg(palette.text).bg(palette.background),

            normal_text: Style::default().fg(palette.text),
            selected: Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD)
                .bg(palette.selection_bg),
            error_text: Style::default().fg(palette.error),
            warning_text: Style::default().fg(palette.warning),
            muted_text: Style::default().fg(palette.muted),
            title: Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
            price: Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),

            border_focused: Style::default().fg(palette.primary),
            border_unfocused: Style::default().fg(palette.border),

            button: Style::default()
                .fg(palette.text)
                .bg(palette.selection_bg),
            button_focused: Style::default()
                .fg(palette.highlight)
                .bg(palette.selection_bg)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}
