//! PyCalc: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! pycalc                               # open the calculator
//! pycalc -vv --log-file pycalc.log     # debug logging to a file
//! pycalc --button-width 5 --button-height 1
//! pycalc --print-config                # show the effective config and exit
//! ```

use std::io::{self, Stdout};
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use pycalc::cli::Cli;
use pycalc::config::CalcConfig;
use pycalc::error::AppResult;
use pycalc::logging;
use pycalc::tui::{render, CalculatorApp, InputHandler};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init(cli.verbose, cli.log_file.as_deref())?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, config);
    let restored = restore_terminal(&mut terminal);

    info!("exiting");
    result.and(restored)
}

/// Restores the terminal before the default hook prints the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: CalcConfig) -> AppResult<()> {
    let mut app = CalculatorApp::new(config);
    let input = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| {
            app.resize(frame.area());
            render(&app, frame);
        })?;

        let event = event::read()?;
        app.handle(input.handle_event(&event));
    }
    Ok(())
}
