use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

use recipients::app::cli::Args;
use recipients::app::config::{AppConfig, UserConfig};
use recipients::app::events::InputListener;
use recipients::app::{logging, print, source, Action, App};
use recipients::ui;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // 1. Config first, so its log level can seed the subscriber
    let loaded = AppConfig::load_from(&AppConfig::get_config_path());
    let level = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    // 2. Logging
    let _log_guard = match logging::setup_tracing(&AppConfig::get_log_dir(), &level) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("recipients: logging disabled: {err}");
            None
        }
    };

    let config = loaded.unwrap_or_else(|err| {
        warn!(error = %err, "using default config");
        UserConfig::default()
    });

    // 3. Recipients
    let cli_recipients = args.recipients.clone();
    let recipients = source::collect(cli_recipients.clone(), args.file.as_deref())?;

    // clap only accepts --print together with --width
    if let (true, Some(width)) = (args.print, args.width) {
        println!("{}", print::fitted_line(&config, recipients, width));
        return Ok(());
    }

    info!(count = recipients.len(), measure = ?config.measure, "starting");

    // 4. Setup terminal
    let mut terminal = init_terminal()?;
    let result = run(
        &mut terminal,
        &config,
        recipients,
        cli_recipients,
        args.file.as_deref(),
    )
    .await;
    restore_terminal(terminal)?;

    info!("bye");
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &UserConfig,
    recipients: Vec<String>,
    cli_recipients: Vec<String>,
    file: Option<&Path>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // Lives as long as the UI; dropping it deregisters the resize/input listener.
    // It holds the only sender, so the loop ends if the terminal stream does.
    let _listener = InputListener::spawn(tx, Duration::from_millis(config.resize_debounce_ms));

    let mut app = App::new(config, recipients);
    terminal.draw(|f| ui::ui(f, &mut app))?;

    while app.is_running {
        let Some(event) = rx.recv().await else {
            break;
        };

        match app.handle_event(event) {
            Action::Redraw => {
                terminal.draw(|f| ui::ui(f, &mut app))?;
            }
            Action::Reload => {
                if app.reload(&cli_recipients, file) == Action::Redraw {
                    terminal.draw(|f| ui::ui(f, &mut app))?;
                }
            }
            Action::Quit => break,
            Action::None => {}
        }
    }

    app.recipients.unmount();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor().map_err(Into::into)
}
