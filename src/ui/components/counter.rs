use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::layout::contains;
use crate::ui::theme::ThemeListener;

const BUTTON_TEXT: &str = "[ + Increment ]";

/// Click counter with its own local count
pub struct CounterPanel {
    theme: ThemeListener,
    value: u64,
    button_area: Option<Rect>,
}

impl CounterPanel {
    pub fn new(theme: ThemeListener) -> Self {
        Self {
            theme,
            value: 0,
            button_area: None,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Whether a mouse click at (x, y) hits the increment button
    pub fn is_button_hit(&self, x: u16, y: u16) -> bool {
        self.button_area
            .is_some_and(|area| contains(area, x, y))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let styles = self.theme.styles();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border(focused))
            .title(Span::styled(" Counter ", styles.title))
            .style(styles.base);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let value = Paragraph::new(Line::from(vec![
            Span::styled("counter value is : ", styles.normal_text),
            Span::styled(self.value.to_string(), styles.title),
        ]));
        frame.render_widget(value, rows[0]);

        let button_style = if focused {
            styles.button_focused
        } else {
            styles.button
        };
        let width = (BUTTON_TEXT.chars().count() as u16).min(rows[1].width);
        let button_area = Rect::new(rows[1].x, rows[1].y, width, rows[1].height);
        frame.render_widget(
            Paragraph::new(Span::styled(BUTTON_TEXT, button_style)),
            button_area,
        );
        self.button_area = Some(button_area);
    }
}
