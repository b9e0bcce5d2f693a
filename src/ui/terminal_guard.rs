use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type GameTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Holds the game screen. Leaving it (drop or panic) restores the shell's
/// terminal exactly once.
pub struct TerminalGuard {
    held: Arc<AtomicBool>,
    leave: fn(),
}

impl TerminalGuard {
    fn holding(leave: fn()) -> Self {
        Self {
            held: Arc::new(AtomicBool::new(true)),
            leave,
        }
    }

    fn release(held: &AtomicBool, leave: fn()) {
        if held.swap(false, Ordering::SeqCst) {
            leave();
        }
    }

    /// Restores the terminal before the default hook prints the panic
    /// message, so the message lands on the normal screen.
    fn release_on_panic(&self) {
        let held = Arc::clone(&self.held);
        let leave = self.leave;
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            Self::release(&held, leave);
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Self::release(&self.held, self.leave);
    }
}

fn leave_game_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

pub fn setup_terminal() -> io::Result<(GameTerminal, TerminalGuard)> {
    // Armed before raw mode so a failure halfway still unwinds it.
    let guard = TerminalGuard::holding(leave_game_screen);
    guard.release_on_panic();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    static LEFT: AtomicUsize = AtomicUsize::new(0);

    fn count_leave() {
        LEFT.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn screen_is_left_once() {
        let guard = TerminalGuard::holding(count_leave);
        let held = Arc::clone(&guard.held);

        TerminalGuard::release(&held, count_leave);
        drop(guard);
        TerminalGuard::release(&held, count_leave);

        assert_eq!(LEFT.load(Ordering::SeqCst), 1);
    }
}
