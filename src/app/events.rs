//! Event handling for keyboard and mouse input
//!
//! This module contains all event handling logic for the App.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::keybindings::KeyAction;
use crate::ui::layout::contains;

use super::{App, AppMode, FocusArea};

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Use keybinding resolver to determine action
        let action = self.keybinding_resolver.resolve(code, modifiers);

        // Quit from the main view; Ctrl+C quits from anywhere
        if (matches!(action, KeyAction::Quit) && self.mode == AppMode::Normal)
            || matches!(action, KeyAction::Cancel)
        {
            self.should_quit = true;
            return;
        }

        // Handle help mode (modal)
        if self.mode == AppMode::Help {
            match code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                    self.mode = AppMode::Normal;
                    self.help_overlay.reset_scroll();
                }
                KeyCode::Up | KeyCode::Char('k') => self.help_overlay.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => self.help_overlay.scroll_down(),
                KeyCode::Home => self.help_overlay.reset_scroll(),
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Help => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => {
                self.theme.toggle();
            }
            KeyAction::Increment => self.increment_counter(),
            KeyAction::Reload => self.reload_catalog(),
            KeyAction::ToggleFocus => {
                self.focus = match self.focus {
                    FocusArea::Counter => FocusArea::Catalog,
                    FocusArea::Catalog => FocusArea::Counter,
                };
            }
            KeyAction::MoveUp if self.focus == FocusArea::Catalog => {
                self.catalog_view.move_up(self.catalog.state());
            }
            KeyAction::MoveDown if self.focus == FocusArea::Catalog => {
                self.catalog_view.move_down(self.catalog.state());
            }
            KeyAction::Select => match self.focus {
                FocusArea::Counter => self.increment_counter(),
                FocusArea::Catalog => self.select_highlighted_category(),
            },
            KeyAction::None => match code {
                KeyCode::PageUp => self.catalog_view.scroll_up(),
                KeyCode::PageDown => self.catalog_view.scroll_down(),
                _ => {}
            },
            _ => {}
        }
    }

    fn increment_counter(&mut self) {
        self.counter.increment();
        tracing::debug!(value = self.counter.value(), "Counter incremented");
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Only handle clicks in normal mode
        if self.mode != AppMode::Normal {
            return;
        }

        let layout = match &self.current_layout {
            Some(l) => l.clone(),
            None => return,
        };

        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollUp if contains(layout.catalog, x, y) => {
                self.catalog_view.scroll_up();
            }
            MouseEventKind::ScrollDown if contains(layout.catalog, x, y) => {
                self.catalog_view.scroll_down();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.shell_bar.is_button_hit(x, y) {
                    self.theme.toggle();
                } else if contains(layout.counter, x, y) {
                    self.focus = FocusArea::Counter;
                    if self.counter.is_button_hit(x, y) {
                        self.increment_counter();
                    }
                } else if contains(layout.catalog, x, y) {
                    self.focus = FocusArea::Catalog;
                    self.select_category_at(x, y);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use super::*;
    use crate::catalog::FakeApi;
    use crate::ui::theme::ThemeMode;
    use crate::ui::AppLayout;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn layout_of(app: &mut App) -> AppLayout {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        app.current_layout.clone().unwrap()
    }

    #[tokio::test]
    async fn test_increment_key_and_select_on_counter() {
        let mut app = test_app(FakeApi::ok(vec![], vec![]));

        for _ in 0..3 {
            app.handle_key(KeyCode::Char('i'), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(app.counter.value(), 4);

        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, FocusArea::Counter);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.counter.value(), 5);
    }

    #[tokio::test]
    async fn test_click_buttons() {
        let mut app = test_app(FakeApi::ok(vec![], vec![]));
        let layout = layout_of(&mut app);

        // Theme button sits at the right edge of the shell bar
        click(&mut app, layout.shell_bar.width - 4, layout.shell_bar.y);
        assert_eq!(app.theme.mode(), ThemeMode::Dark);

        // Increment button is on the second inner row of the counter panel
        click(&mut app, layout.counter.x + 2, layout.counter.y + 2);
        assert_eq!(app.counter.value(), 1);
        assert_eq!(app.focus, FocusArea::Counter);

        click(&mut app, layout.catalog.x + 50, layout.catalog.y + 5);
        assert_eq!(app.focus, FocusArea::Catalog);
        assert_eq!(app.counter.value(), 1);
    }

    #[tokio::test]
    async fn test_mouse_ignored_in_help_mode() {
        let mut app = test_app(FakeApi::ok(vec![], vec![]));
        let layout = layout_of(&mut app);

        app.handle_key(KeyCode::Char('?'), KeyModifiers::SHIFT);
        click(&mut app, layout.counter.x + 2, layout.counter.y + 2);
        assert_eq!(app.counter.value(), 0);
    }
}
