//! Application module
//!
//! The App struct is the composition root: it owns the theme store, the
//! counter, the current catalog data source and every UI component, and runs
//! the event loop.

mod catalog;
mod events;
mod messages;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::catalog::{CatalogApi, CatalogSource, HttpCatalogApi};
use crate::config::Config;
use crate::keybindings::KeybindingResolver;
use crate::ui::components::{CatalogView, CounterPanel, HelpOverlay, ShellBar, StatusBar};
use crate::ui::{AppLayout, ThemeStore};

pub use messages::AppMessage;

/// Focus area in the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusArea {
    Counter,
    Catalog,
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    Help,
}

/// Main application
pub struct App {
    // Catalog transport, reused by every data source instance
    api: Arc<dyn CatalogApi>,

    // Single writer of the theme mode
    theme: ThemeStore,

    // UI Components
    shell_bar: ShellBar,
    counter: CounterPanel,
    catalog_view: CatalogView,
    status_bar: StatusBar,
    help_overlay: HelpOverlay,

    // Current data source; replaced on reload
    catalog: CatalogSource,

    // State
    focus: FocusArea,
    mode: AppMode,
    should_quit: bool,

    // Async channels
    message_tx: mpsc::Sender<AppMessage>,
    message_rx: mpsc::Receiver<AppMessage>,

    // Keybinding resolver
    keybinding_resolver: KeybindingResolver,

    // Current layout for mouse click detection
    current_layout: Option<AppLayout>,
}

impl App {
    /// Build the app against the configured HTTP endpoints
    ///
    /// Must be called inside a tokio runtime: the catalog fetches start here.
    pub fn new(config: &Config, warnings: Vec<String>) -> Result<Self> {
        let api = HttpCatalogApi::from_config(config)?;
        Ok(Self::with_api(config, Arc::new(api), warnings))
    }

    pub fn with_api(config: &Config, api: Arc<dyn CatalogApi>, warnings: Vec<String>) -> Self {
        let (message_tx, message_rx) = mpsc::channel(100);
        let theme = ThemeStore::new();
        let keybinding_resolver = KeybindingResolver::from_config(config.keybindings.as_ref());

        let mut status_bar = StatusBar::new(theme.subscribe(), &keybinding_resolver);
        match warnings.len() {
            0 => {}
            1 => status_bar.set_notice(warnings.into_iter().next()),
            n => status_bar.set_notice(Some(format!(
                "{} config warnings, see the log for details",
                n
            ))),
        }

        let catalog = CatalogSource::initialize(Arc::clone(&api), message_tx.clone());

        Self {
            api,
            shell_bar: ShellBar::new(theme.subscribe()),
            counter: CounterPanel::new(theme.subscribe()),
            catalog_view: CatalogView::new(theme.subscribe()),
            help_overlay: HelpOverlay::new(theme.subscribe(), &keybinding_resolver),
            status_bar,
            theme,
            catalog,
            focus: FocusArea::Catalog,
            mode: AppMode::Normal,
            should_quit: false,
            message_tx,
            message_rx,
            keybinding_resolver,
            current_layout: None,
        }
    }

    /// Run the application event loop
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for async messages
            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key.code, key.modifiers),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.drain_messages();

            // Tick spinner animation
            self.status_bar
                .tick_spinner(self.catalog.state().is_loading());

            if self.should_quit {
                break;
            }
        }

        tracing::info!("Shutting down");
        Ok(())
    }

    /// Process every pending async message
    fn drain_messages(&mut self) {
        while let Ok(msg) = self.message_rx.try_recv() {
            self.handle_message(msg);
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        let layout = AppLayout::calculate(frame.area());

        self.shell_bar.render(frame, layout.shell_bar);
        self.counter
            .render(frame, layout.counter, self.focus == FocusArea::Counter);
        self.catalog_view.render(
            frame,
            layout.catalog,
            self.catalog.state(),
            self.focus == FocusArea::Catalog,
        );
        self.status_bar
            .render(frame, layout.status_bar, self.catalog.state());

        // Render help overlay if in help mode
        if self.mode == AppMode::Help {
            self.help_overlay.render(frame, frame.area());
        }

        self.current_layout = Some(layout);
    }
}
