use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseEvent, MouseEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use showcase_core::contact::{create_endpoint, ContactEndpoint, ContactMessage};
use showcase_core::{AppConfig, SiteContent};
use showcase_tui::{
    app::{App, AppCommand},
    event::{AppEvent, ContactResult, EventHandler},
    input::{handle_key_event, Action},
    scroll::ScrollConfigExt,
    widgets,
};

pub async fn run(config: Arc<AppConfig>, content: SiteContent) -> Result<()> {
    let endpoint = create_endpoint(&config.contact)?;
    let title = content.site.name.clone();

    // Create app state before touching the terminal so errors print cleanly
    let mut app = App::new(config.clone(), content, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(&title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, endpoint, &config).await;

    // Release reveal scopes and the scroll lock before leaving
    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    endpoint: Arc<dyn ContactEndpoint>,
    config: &AppConfig,
) -> Result<()> {
    // Create event handler with the animation frame budget
    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_tick_duration(),
    );

    // Create channel for async contact submissions
    let (contact_tx, mut contact_rx) = mpsc::unbounded_channel::<ContactResult>();

    // Track if we need high frame rate for animations.
    // Checked at the END of each iteration to pick the NEXT poll timeout.
    let mut needs_fast_update = true;

    loop {
        // Process any completed submissions (non-blocking)
        while let Ok(result) = contact_rx.try_recv() {
            app.finish_contact(result, Instant::now());
        }

        let now = Instant::now();
        app.update(now);

        // Draw UI
        terminal.draw(|frame| widgets::draw(frame, app, now))?;

        // Handle events (faster tick rate while anything is moving)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    let command = app.apply(action, now);
                    handle_command(app, command, &endpoint, &contact_tx);
                }
                AppEvent::Mouse(mouse) => handle_mouse(app, mouse, now),
                AppEvent::Resize(_, _) => {
                    // Layout is recomputed on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(_) => {
            if app.handle_click(mouse.column, mouse.row) {
                tracing::debug!("Modal dismissed by backdrop click");
            }
        }
        MouseEventKind::ScrollDown => {
            app.apply(Action::ScrollDown, now);
        }
        MouseEventKind::ScrollUp => {
            app.apply(Action::ScrollUp, now);
        }
        _ => {}
    }
}

fn handle_command(
    app: &mut App,
    command: AppCommand,
    endpoint: &Arc<dyn ContactEndpoint>,
    contact_tx: &mpsc::UnboundedSender<ContactResult>,
) {
    match command {
        AppCommand::None => {}
        AppCommand::SubmitContact(message) => {
            spawn_submit(endpoint.clone(), message, contact_tx.clone());
        }
        AppCommand::OpenExternal(target) => {
            if let Err(e) = open::that(&target) {
                tracing::warn!("Failed to open {}: {}", target, e);
                app.set_status(format!("Failed to open: {}", e));
            } else {
                app.set_status(format!("Opened {}", target));
            }
        }
    }
}

/// Deliver a contact message in the background and report through the channel
fn spawn_submit(
    endpoint: Arc<dyn ContactEndpoint>,
    message: ContactMessage,
    tx: mpsc::UnboundedSender<ContactResult>,
) {
    tokio::spawn(async move {
        let result = match endpoint.send(&message).await {
            Ok(()) => ContactResult::Delivered,
            Err(e) => ContactResult::Failed {
                error: e.to_string(),
            },
        };
        let _ = tx.send(result);
    });
}
