//! Terminal setup, event draining and frame pacing.

use crate::core::GameInput;
use crate::input::map_event;
use crossterm::cursor::{Hide, Show};
use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the length of a run. Restores it on drop, so an
/// error escaping the game loop still leaves the shell usable.
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        match setup_terminal() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = io::stdout().execute(LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let backend = self.terminal.backend_mut();
        let _ = backend.execute(Show);
        let _ = backend.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn setup_terminal() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?.execute(Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Drain every pending terminal event without blocking.
pub fn poll_events() -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(input) = map_event(&event::read()?) {
            inputs.push(input);
        }
    }
    Ok(inputs)
}

/// Fixed-rate frame clock.
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u64) -> Self {
        let frame = Duration::from_nanos(1_000_000_000 / fps.max(1));
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep until the next frame boundary.
    ///
    /// When a frame overran, the schedule restarts from now instead of
    /// running several catch-up frames back to back.
    pub fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            log::debug!("frame overran by {:?}", now - self.next);
            self.next = now + self.frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_at_60_fps() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_zero_fps_treated_as_one() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut pacer = FramePacer::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait_for_next_tick();
        }
        // Four 5ms frames
        assert!(start.elapsed() >= Duration::from_millis(19));
    }

    #[test]
    fn test_overrun_does_not_burst() {
        let mut pacer = FramePacer::new(1_000);
        thread::sleep(Duration::from_millis(20));
        pacer.wait_for_next_tick();
        let start = Instant::now();
        pacer.wait_for_next_tick();
        // The second wait still lasts roughly one frame
        assert!(start.elapsed() >= Duration::from_micros(500));
    }
}
