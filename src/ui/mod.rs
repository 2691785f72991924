pub mod components;
pub mod layout;
pub mod styles;
pub mod theme;

pub use layout::AppLayout;
pub use theme::ThemeStore;
