use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::keybindings::{KeyAction, KeybindingResolver};
use crate::ui::layout::centered_rect;
use crate::ui::theme::ThemeListener;

/// Help section with title and key bindings
struct HelpSection {
    title: &'static str,
    bindings: Vec<(String, &'static str)>,
}

/// Help overlay component showing all keybindings
pub struct HelpOverlay {
    theme: ThemeListener,
    scroll_offset: usize,
    sections: Vec<HelpSection>,
    total_lines: usize, // Cache total line count
}

impl HelpOverlay {
    pub fn new(theme: ThemeListener, resolver: &KeybindingResolver) -> Self {
        let sections = Self::sections(resolver);
        let total_lines = Self::count_lines(&sections);
        Self {
            theme,
            scroll_offset: 0,
            sections,
            total_lines,
        }
    }

    /// Count total lines in sections
    fn count_lines(sections: &[HelpSection]) -> usize {
        sections.iter().map(|s| s.bindings.len() + 3).sum() // +3 for title, empty line before and after
    }

    fn sections(resolver: &KeybindingResolver) -> Vec<HelpSection> {
        let key = |action| resolver.binding_display(action);

        vec![
            HelpSection {
                title: "Navigation",
                bindings: vec![
                    (key(KeyAction::MoveDown), "Next category"),
                    (key(KeyAction::MoveUp), "Previous category"),
                    (key(KeyAction::Select), "Apply category / press button"),
                    (key(KeyAction::ToggleFocus), "Switch focus (counter/catalog)"),
                    ("PgUp / PgDn".to_string(), "Scroll products"),
                ],
            },
            HelpSection {
                title: "Actions",
                bindings: vec![
                    (key(KeyAction::ToggleTheme), "Toggle light/dark theme"),
                    (key(KeyAction::Increment), "Increment counter"),
                    (key(KeyAction::Reload), "Reload catalog"),
                    (key(KeyAction::Help), "Toggle this help"),
                    (key(KeyAction::Quit), "Quit application"),
                    (key(KeyAction::Cancel), "Quit application"),
                ],
            },
            HelpSection {
                title: "Mouse",
                bindings: vec![(
                    "Click".to_string(),
                    "Theme button / increment / category",
                )],
            },
        ]
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max_scroll = self.total_lines.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(max_scroll);
    }

    /// Reset scroll to top
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let styles = self.theme.styles();
        let popup_area = centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(styles.border_focused)
            .title(" Help - Press ? or Esc to close ")
            .style(styles.base);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = Vec::new();

        for section in &self.sections {
            lines.push(Line::from(Span::styled(
                format!("━━ {} ━━", section.title),
                styles.title,
            )));
            lines.push(Line::from(""));

            for (key, desc) in &section.bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:16}", key),
                        styles.warning_text.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, styles.normal_text),
                ]));
            }

            lines.push(Line::from(""));
        }

        // Handle scrolling
        let visible_height = inner.height as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        let scroll = self.scroll_offset.min(max_scroll);

        let visible_lines: Vec<Line> = lines
            .into_iter()
            .skip(scroll)
            .take(visible_height)
            .collect();

        frame.render_widget(Paragraph::new(visible_lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeybindingsConfig;
    use crate::ui::testing::buffer_text;
    use crate::ui::theme::ThemeStore;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_sections_show_configured_keys() {
        let config = KeybindingsConfig {
            reload: Some("F5".to_string()),
            ..Default::default()
        };
        let resolver = KeybindingResolver::from_config(Some(&config));
        let store = ThemeStore::new();
        let mut overlay = HelpOverlay::new(store.subscribe(), &resolver);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| overlay.render(f, f.area())).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("F5"));
        assert!(text.contains("Reload catalog"));
        assert!(text.contains("k / Up"));
    }

    #[test]
    fn test_scroll_bounds() {
        let store = ThemeStore::new();
        let mut overlay = HelpOverlay::new(store.subscribe(), &KeybindingResolver::new());

        overlay.scroll_up();
        assert_eq!(overlay.scroll_offset, 0);
        for _ in 0..100 {
            overlay.scroll_down();
        }
        assert_eq!(overlay.scroll_offset, overlay.total_lines - 1);
        overlay.reset_scroll();
        assert_eq!(overlay.scroll_offset, 0);
    }
}
