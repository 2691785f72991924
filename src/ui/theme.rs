//! Light/dark theme store
//!
//! `ThemeStore` owns the current mode and is the only writer. Components hold
//! a `ThemeListener` subscribed to the store and restyle themselves the next
//! time they render after a toggle.

use ratatui::style::Color;
use tokio::sync::watch;

use super::styles::Styles;

/// UI theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Get the color palette for this mode
    pub fn palette(&self) -> ColorPalette {
        match self {
            ThemeMode::Light => ColorPalette::light(),
            ThemeMode::Dark => ColorPalette::dark(),
        }
    }
}

/// Single writer for the process-wide theme mode
pub struct ThemeStore {
    tx: watch::Sender<ThemeMode>,
}

impl ThemeStore {
    /// Create a store in the initial (light) mode
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ThemeMode::default());
        Self { tx }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    /// Flip between light and dark, notifying every listener
    pub fn toggle(&self) -> ThemeMode {
        self.tx.send_modify(|mode| *mode = mode.toggled());
        let mode = self.mode();
        tracing::debug!(mode = mode.as_str(), "Theme toggled");
        mode
    }

    pub fn subscribe(&self) -> ThemeListener {
        ThemeListener::new(self.tx.subscribe())
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the theme mode held by a component
pub struct ThemeListener {
    rx: watch::Receiver<ThemeMode>,
    styles: Styles,
}

impl ThemeListener {
    fn new(mut rx: watch::Receiver<ThemeMode>) -> Self {
        let mode = *rx.borrow_and_update();
        Self {
            rx,
            styles: Styles::from_mode(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.rx.borrow()
    }

    /// Current styles, rebuilt if the mode changed since the last call
    pub fn styles(&mut self) -> Styles {
        if self.rx.has_changed().unwrap_or(false) {
            let mode = *self.rx.borrow_and_update();
            self.styles = Styles::from_mode(mode);
        }
        self.styles.clone()
    }
}

/// Color palette for theming
#[derive(Clone)]
pub struct ColorPalette {
    /// Primary accent color (selections, focused borders)
    pub primary: Color,
    /// Success indicator color
    pub success: Color,
    /// Warning indicator color
    pub warning: Color,
    /// Error indicator color
    pub error: Color,
    /// Muted/disabled text color
    pub muted: Color,
    /// Background color
    pub background: Color,
    /// Border color (unfocused)
    pub border: Color,
    /// Normal text color
    pub text: Color,
    /// Highlight color (bright accents)
    pub highlight: Color,
    /// Selection background color
    pub selection_bg: Color,
}

impl ColorPalette {
    /// Light mode: dark grey text on white
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(25, 103, 210),      // Link blue
            success: Color::Rgb(24, 128, 56),       // Green
            warning: Color::Rgb(176, 96, 0),        // Amber
            error: Color::Rgb(197, 34, 31),         // Red
            muted: Color::Rgb(128, 134, 139),       // Grey
            background: Color::Rgb(255, 255, 255),  // #fff
            border: Color::Rgb(218, 220, 224),      // Light grey
            text: Color::Rgb(51, 51, 51),           // #333
            highlight: Color::Rgb(23, 78, 166),     // Deep blue
            selection_bg: Color::Rgb(232, 240, 254), // Pale blue
        }
    }

    /// Dark mode: white text on black
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(138, 180, 248),    // Soft blue
            success: Color::Rgb(129, 201, 149),    // Soft green
            warning: Color::Rgb(253, 214, 99),     // Yellow
            error: Color::Rgb(242, 139, 130),      // Salmon
            muted: Color::Rgb(154, 160, 166),      // Grey
            background: Color::Rgb(0, 0, 0),       // #000
            border: Color::Rgb(95, 99, 104),       // Dark grey
            text: Color::Rgb(255, 255, 255),       // #fff
            highlight: Color::Rgb(174, 203, 250),  // Light blue
            selection_bg: Color::Rgb(41, 42, 45),  // Charcoal
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_light() {
        let store = ThemeStore::new();
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        let store = ThemeStore::new();
        let start = store.mode();

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.toggle(), start);

        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_listeners_see_toggle() {
        let store = ThemeStore::new();
        let mut first = store.subscribe();
        let mut second = store.subscribe();

        let light_bg = first.styles().base.bg;
        store.toggle();

        assert_eq!(first.mode(), ThemeMode::Dark);
        assert_eq!(second.mode(), ThemeMode::Dark);
        assert_ne!(first.styles().base.bg, light_bg);
        assert_eq!(second.styles().base.bg, Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_late_subscriber_gets_current_mode() {
        let store = ThemeStore::new();
        store.toggle();

        let mut listener = store.subscribe();
        assert_eq!(listener.mode(), ThemeMode::Dark);
        assert_eq!(listener.styles().base.bg, Some(Color::Rgb(0, 0, 0)));
    }
}
