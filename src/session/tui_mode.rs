//! TUI mode execution

use crate::api::StudentApi;
use crate::consts::cli_consts::{COMPLETION_QUEUE_SIZE, LOG_QUEUE_SIZE};
use crate::logging::init_activity_logger;
use crate::ui::{self, UIConfig};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Routing log records into the activity log
/// 2. Terminal setup and cleanup
/// 3. UI application initialization and execution
///
/// # Arguments
/// * `api` - Client for the student backend
/// * `ui_config` - Display settings
pub async fn run_tui_mode(
    api: Arc<dyn StudentApi>,
    ui_config: UIConfig,
) -> Result<(), Box<dyn Error>> {
    let (activity_sender, activity_receiver) = mpsc::channel(LOG_QUEUE_SIZE);
    init_activity_logger(activity_sender)?;
    info!("Using student API at {}", api.base_url());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_QUEUE_SIZE);
    let app = ui::App::new(api, completion_sender, ui_config);

    let result = ui::run(&mut terminal, app, completion_receiver, activity_receiver).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
