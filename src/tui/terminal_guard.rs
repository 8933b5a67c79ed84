//! Entering and leaving the calculator screen.
//!
//! `TerminalGuard` leaves exactly what it entered, once, whether from `Drop`,
//! an explicit `leave` or the panic hook.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal features the calculator screen switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMode {
    /// Mouse reports; only useful while the keypad can be clicked.
    pub mouse: bool,
}

impl ScreenMode {
    pub fn for_keypad(show_keypad: bool) -> Self {
        Self { mouse: show_keypad }
    }
}

pub trait ScreenSwitch: Send + Sync + 'static {
    fn enter(&self, mode: ScreenMode) -> io::Result<()>;
    fn leave(&self, mode: ScreenMode) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenSwitch for CrosstermScreen {
    fn enter(&self, mode: ScreenMode) -> io::Result<()> {
        use crossterm::{cursor, event::EnableMouseCapture, queue, terminal};

        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        queue!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        if mode.mouse {
            queue!(out, EnableMouseCapture)?;
        }
        out.flush()
    }

    fn leave(&self, mode: ScreenMode) -> io::Result<()> {
        // Raw mode goes off even when the screen commands fail.
        let screen = leave_screen(&mut io::stdout(), mode);
        let raw = crossterm::terminal::disable_raw_mode();
        screen.and(raw)
    }
}

fn leave_screen(out: &mut impl Write, mode: ScreenMode) -> io::Result<()> {
    use crossterm::{cursor, event::DisableMouseCapture, queue, terminal};

    if mode.mouse {
        queue!(out, DisableMouseCapture)?;
    }
    queue!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    out.flush()
}

struct Session {
    mode: ScreenMode,
    screen: Arc<dyn ScreenSwitch>,
    left: AtomicBool,
}

impl Session {
    fn leave(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.screen.leave(self.mode)
    }
}

pub struct TerminalGuard {
    session: Arc<Session>,
}

impl TerminalGuard {
    pub fn enter(mode: ScreenMode) -> io::Result<Self> {
        Self::enter_with(Arc::new(CrosstermScreen), mode)
    }

    pub fn enter_with(screen: Arc<dyn ScreenSwitch>, mode: ScreenMode) -> io::Result<Self> {
        screen.enter(mode)?;
        Ok(Self {
            session: Arc::new(Session {
                mode,
                screen,
                left: AtomicBool::new(false),
            }),
        })
    }

    pub fn mode(&self) -> ScreenMode {
        self.session.mode
    }

    pub fn is_active(&self) -> bool {
        !self.session.left.load(Ordering::SeqCst)
    }

    /// Idempotent; later calls and `Drop` do nothing.
    pub fn leave(&self) -> io::Result<()> {
        self.session.leave()
    }

    /// Leaves the screen before the previous panic hook prints its message.
    pub fn leave_on_panic(&self) {
        let session = Arc::clone(&self.session);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = session.leave();
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.session.leave() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> u8 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Records SIGINT/SIGTERM for the event loop to pick up between polls.
///
/// In raw mode Ctrl+C arrives as a key and is bound to quit; this catches
/// `kill` and signals sent from outside the terminal.
#[cfg(unix)]
pub struct SignalWatch {
    pending: Arc<std::sync::atomic::AtomicUsize>,
}

#[cfg(unix)]
impl SignalWatch {
    const NONE: usize = 0;

    pub fn register() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        let pending = Arc::new(std::sync::atomic::AtomicUsize::new(Self::NONE));
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register_usize(signal, Arc::clone(&pending), signal as usize)?;
        }
        Ok(Self { pending })
    }

    /// The last signal received since the previous call, if any.
    pub fn take(&self) -> Option<TerminationSignal> {
        signal_from_raw(self.pending.swap(Self::NONE, Ordering::SeqCst))
    }
}

#[cfg(unix)]
fn signal_from_raw(raw: usize) -> Option<TerminationSignal> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};

    match i32::try_from(raw).ok()? {
        SIGINT => Some(TerminationSignal::SigInt),
        SIGTERM => Some(TerminationSignal::SigTerm),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
