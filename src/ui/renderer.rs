//! Terminal setup and the main event loop.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::backend::TaskStore;
use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::EventHandler;

/// Run the TUI until the user quits.
pub async fn run_app(store: Arc<dyn TaskStore>, config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(store, config);
    let mut event_handler = EventHandler::new();

    // First fetch and health check
    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("UI loop ended with error: {:#}", e);
    }
    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
        }

        let event = event_handler.next_event().await?;
        needs_render = app.handle_event(event);

        if app.should_quit() {
            log::info!("Shutting down with {} background jobs still running", app.active_task_count());
            break;
        }
    }

    Ok(())
}
