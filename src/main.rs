use anyhow::Result;
use crossterm::{
    event::{
        self as crossterm_event, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::{io, time::Duration};
use tokio::sync::Mutex;
use tracing::{error, info};

use wallet_viewer::app::{App, AppAction};
use wallet_viewer::config::{init_logging, Config};
use wallet_viewer::constants::{EVENT_POLL_MILLIS, RPC_URL};
use wallet_viewer::ui;
use wallet_viewer::wallet::WalletClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    info!(rpc = RPC_URL, policy = ?config.stale_policy, "starting wallet viewer");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(
        WalletClient::new(RPC_URL),
        config.stale_policy,
    )));

    let result = run_app(&mut terminal, Arc::clone(&app)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(error = ?err, "terminal loop failed");
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<()> {
    loop {
        {
            let mut app_guard = app.lock().await;
            terminal.draw(|f| ui::draw(f, &mut app_guard))?;
        }

        if !crossterm_event::poll(Duration::from_millis(EVENT_POLL_MILLIS))? {
            continue;
        }

        match crossterm_event::read()? {
            Event::Key(key) => {
                let action = app.lock().await.handle_key(key);
                match action {
                    AppAction::Quit => return Ok(()),
                    AppAction::Submit => {
                        App::submit_form(Arc::clone(&app)).await;
                    }
                    AppAction::None => {}
                }
            }
            Event::Paste(text) => app.lock().await.paste(&text),
            _ => {}
        }
    }
}
