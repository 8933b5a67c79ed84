//zcalc/src/main.rs
use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use zcalc::app::Calculator;
use zcalc::headless::HeadlessSession;
use zcalc::kernel::services::adapters::{
    ensure_settings_file, load_settings, KeybindingService, WriterDisplay,
};
use zcalc::kernel::services::ports::Settings;
use zcalc::kernel::{render_display, CalcState};
use zcalc::tui::crossterm::into_input_event;
#[cfg(unix)]
use zcalc::tui::SignalWatch;
use zcalc::tui::{ScreenMode, TerminalGuard, View};

mod logging;

const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "zcalc", version, about = "Terminal calculator with a live preview")]
struct Cli {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print the preview line of an expression; exits with 1 when it is `Err`
    Eval {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Feed key names (`2`, `+`, `enter`, `esc`, `ctrl+q`, ...) and print both display lines
    Replay {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        keys: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logging = logging::init();

    let result = match cli.command {
        Some(CliCommand::Eval { expression }) => run_eval(&expression.join(" ")),
        Some(CliCommand::Replay { keys }) => run_replay(&keys),
        None => run_tui(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "zcalc failed");
            eprintln!("zcalc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_eval(expression: &str) -> io::Result<ExitCode> {
    let state = CalcState::with_expression(expression);
    println!("{}", render_display(&state).preview);
    if state.evaluate().is_error() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_replay(keys: &[String]) -> io::Result<ExitCode> {
    let settings = load_settings().unwrap_or_default();
    let mut session = HeadlessSession::new(keybindings_for(&settings));
    if let Err(err) = session.replay(keys) {
        eprintln!("zcalc: {err}");
        return Ok(ExitCode::from(2));
    }

    let mut port = WriterDisplay::new(io::stdout().lock());
    session.present(&mut port)?;
    Ok(ExitCode::SUCCESS)
}

fn keybindings_for(settings: &Settings) -> KeybindingService {
    let mut keybindings = KeybindingService::new();
    keybindings.apply_rules(&settings.keybindings);
    keybindings
}

fn run_tui() -> io::Result<ExitCode> {
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    let mut calculator = Calculator::new(&settings);
    calculator.theme_mut().adapt_to_terminal_capabilities();

    let guard = TerminalGuard::enter(ScreenMode::for_keypad(settings.show_keypad))?;
    guard.leave_on_panic();
    #[cfg(unix)]
    let signals = SignalWatch::register()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    tracing::info!("tui started");

    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                calculator.render(frame, area);
            })?;
            dirty = false;
        }

        #[cfg(unix)]
        if let Some(signal) = signals.take() {
            tracing::info!(?signal, "exiting on signal");
            drop(guard);
            return Ok(ExitCode::from(signal.exit_code()));
        }

        let ready = match crossterm::event::poll(TICK) {
            Ok(ready) => ready,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if !ready {
            dirty |= calculator.tick();
            continue;
        }

        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };
        let result = calculator.handle_input(&event);
        if result.is_quit() {
            break;
        }
        dirty |= result.needs_redraw();
    }

    tracing::info!("tui exited");
    Ok(ExitCode::SUCCESS)
}
