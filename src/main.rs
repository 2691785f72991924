use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Write};
use std::panic;

mod app;
mod catalog;
mod config;
mod keybindings;
mod logging;
mod ui;

use app::App;
use config::{Config, ConfigLoader, ConfigValidator};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Terminal product catalog with category filter")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the products endpoint
    #[arg(long)]
    products_url: Option<String>,

    /// Override the categories endpoint
    #[arg(long)]
    categories_url: Option<String>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = ConfigLoader::new(self.config.as_deref()).load()?;

        if let Some(url) = &self.products_url {
            config.endpoints.products = url.clone();
        }
        if let Some(url) = &self.categories_url {
            config.endpoints.categories = url.clone();
        }

        Ok(config)
    }
}

/// Restore terminal to normal state
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    let _ = stdout.flush();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config errors are reported before the terminal switches to raw mode
    let config = cli.load_config().context("Failed to load configuration")?;

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let warnings: Vec<String> = ConfigValidator::new(&config)
        .validate()
        .warnings
        .iter()
        .map(|w| format!("Config warning: {}", w))
        .collect();
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        products = %config.endpoints.products,
        categories = %config.endpoints.categories,
        "Starting storefront"
    );

    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, warnings).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application exited with error");
    }
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    warnings: Vec<String>,
) -> Result<()> {
    let mut app = App::new(config, warnings)?;
    app.run(terminal).await
}
