mod catalog;
mod counter;
mod help_overlay;
mod shell_bar;
mod status_bar;

pub use catalog::CatalogView;
pub use counter::CounterPanel;
pub use help_overlay::HelpOverlay;
pub use shell_bar::ShellBar;
pub use status_bar::StatusBar;
