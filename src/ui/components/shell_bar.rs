use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::contains;
use crate::ui::theme::{ThemeListener, ThemeMode};

/// Top bar of the shell: app title and the theme toggle button
pub struct ShellBar {
    theme: ThemeListener,
    button_area: Option<Rect>,
}

impl ShellBar {
    pub fn new(theme: ThemeListener) -> Self {
        Self {
            theme,
            button_area: None,
        }
    }

    /// Button label names the mode the toggle switches to
    pub fn toggle_label(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => "Dark",
            ThemeMode::Dark => "Light",
        }
    }

    /// Whether a mouse click at (x, y) hits the toggle button
    pub fn is_button_hit(&self, x: u16, y: u16) -> bool {
        self.button_area
            .is_some_and(|area| contains(area, x, y))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let styles = self.theme.styles();
        let label = Self::toggle_label(self.theme.mode());

        let title = Paragraph::new(Line::from(vec![
            Span::styled(" ◆ ", styles.title),
            Span::styled("storefront", styles.title),
        ]))
        .style(styles.base);
        frame.render_widget(title, area);

        // "[ Dark ]" with the toggle key underlined, right-aligned
        let button_text = format!("[ {} ]", label);
        let width = (button_text.chars().count() as u16).min(area.width);
        let button_area = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y,
            width,
            1,
        );

        let (first, rest) = label.split_at(1);
        let button = Paragraph::new(Line::from(vec![
            Span::styled("[ ", styles.button),
            Span::styled(first, styles.button.add_modifier(Modifier::UNDERLINED)),
            Span::styled(rest, styles.button),
            Span::styled(" ]", styles.button),
        ]));
        frame.render_widget(button, button_area);

        self.button_area = Some(button_area);
    }
}
