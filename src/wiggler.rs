//! The wiggle loop.
//!
//! Each cycle reads the cursor position, glides right by a few pixels and
//! back, prints the position it started from, then pauses. The loop runs
//! until the sleeper reports an interrupt.

use crate::pointer::{glide, PointerDevice, PointerError, Position};
use crate::shutdown::{Sleep, Sleeper};
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

/// Printed once before the first cycle.
pub const STARTED_MESSAGE: &str = "Mouse wiggler started. Press Ctrl+C to stop.";

/// Printed once after an interrupt. The leading newline moves past the
/// `^C` the terminal echoes.
pub const STOPPED_MESSAGE: &str = "\nMouse wiggler stopped.";

/// Formats the per-cycle status line.
pub fn status_line(position: Position) -> String {
    format!("Wiggled at position {}", position)
}

/// Wiggle timing and distance.
#[derive(Debug, Clone)]
pub struct WigglerConfig {
    /// Horizontal distance of each leg in pixels (default: 10).
    pub offset_px: i32,

    /// Time each leg takes (default: 100ms).
    pub move_duration: Duration,

    /// Pause between cycles (default: 5s).
    pub interval: Duration,

    /// Shortest pause between tween steps (default: 50ms).
    pub min_step_pause: Duration,
}

impl Default for WigglerConfig {
    fn default() -> Self {
        Self {
            offset_px: 10,
            move_duration: Duration::from_millis(100),
            interval: Duration::from_secs(5),
            min_step_pause: Duration::from_millis(50),
        }
    }
}

/// Lifecycle of a [`Wiggler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WigglerState {
    Running,
    Stopping,
    Terminated,
}

/// Outcome of a single cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Both legs ran and the status line was printed for this position.
    Completed(Position),
    /// An interrupt arrived before the cycle could finish moving.
    Interrupted,
}

/// Errors that end the loop abnormally.
#[derive(Debug)]
pub enum WigglerError {
    Pointer(PointerError),
    Output(io::Error),
}

impl fmt::Display for WigglerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WigglerError::Pointer(e) => write!(f, "{}", e),
            WigglerError::Output(e) => write!(f, "Failed to write status: {}", e),
        }
    }
}

impl std::error::Error for WigglerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WigglerError::Pointer(e) => Some(e),
            WigglerError::Output(e) => Some(e),
        }
    }
}

impl From<PointerError> for WigglerError {
    fn from(e: PointerError) -> Self {
        WigglerError::Pointer(e)
    }
}

impl From<io::Error> for WigglerError {
    fn from(e: io::Error) -> Self {
        WigglerError::Output(e)
    }
}

/// Drives the wiggle loop over a pointer device, a sleeper and an output.
///
/// # Example
/// ```no_run
/// use wiggler::pointer::SystemPointer;
/// use wiggler::shutdown::{install_ctrlc_handler, ShutdownSignal};
/// use wiggler::wiggler::{Wiggler, WigglerConfig};
///
/// let signal = ShutdownSignal::new();
/// install_ctrlc_handler(&signal)?;
///
/// let device = SystemPointer::new();
/// let mut wiggler = Wiggler::new(device, signal, std::io::stdout(), WigglerConfig::default());
/// let cycles = wiggler.run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Wiggler<P, S, W> {
    device: P,
    sleeper: S,
    out: W,
    config: WigglerConfig,
    state: WigglerState,
}

impl<P, S, W> Wiggler<P, S, W>
where
    P: PointerDevice,
    S: Sleeper,
    W: Write,
{
    pub fn new(device: P, sleeper: S, out: W, config: WigglerConfig) -> Self {
        Self {
            device,
            sleeper,
            out,
            config,
            state: WigglerState::Running,
        }
    }

    pub fn state(&self) -> WigglerState {
        self.state
    }

    /// Consumes the wiggler, handing back its parts.
    pub fn into_parts(self) -> (P, S, W) {
        (self.device, self.sleeper, self.out)
    }

    /// Runs cycles until interrupted.
    ///
    /// Returns the number of completed cycles. Pointer and output errors
    /// end the loop immediately without the stop message.
    pub fn run(&mut self) -> Result<u64, WigglerError> {
        self.say(STARTED_MESSAGE)?;
        tracing::info!(
            offset_px = self.config.offset_px,
            interval_ms = self.config.interval.as_millis() as u64,
            "Wiggler started"
        );

        let mut cycles: u64 = 0;
        while self.state == WigglerState::Running {
            match self.run_cycle()? {
                Cycle::Completed(_) => cycles += 1,
                Cycle::Interrupted => self.state = WigglerState::Stopping,
            }
        }

        self.say(STOPPED_MESSAGE)?;
        self.state = WigglerState::Terminated;
        tracing::info!(cycles, "Wiggler stopped");

        Ok(cycles)
    }

    /// Performs one read, wiggle, report, pause cycle.
    ///
    /// An interrupt during the pause still counts the cycle as completed
    /// and moves the wiggler to [`WigglerState::Stopping`].
    pub fn run_cycle(&mut self) -> Result<Cycle, WigglerError> {
        if self.sleeper.interrupted() {
            return Ok(Cycle::Interrupted);
        }

        let position = self.device.position()?;
        let out = position.offset(self.config.offset_px, 0);

        // Both legs are anchored on the position read above.
        for (from, to) in [(position, out), (out, position)] {
            let outcome = glide(
                &mut self.device,
                &mut self.sleeper,
                from,
                to,
                self.config.move_duration,
                self.config.min_step_pause,
            )?;
            if outcome == Sleep::Interrupted {
                tracing::debug!(%position, "Interrupted mid-wiggle");
                return Ok(Cycle::Interrupted);
            }
        }

        self.say(&status_line(position))?;
        tracing::debug!(x = position.x, y = position.y, "Cycle complete");

        if self.sleeper.sleep(self.config.interval) == Sleep::Interrupted {
            tracing::debug!("Interrupted during pause");
            self.state = WigglerState::Stopping;
        }

        Ok(Cycle::Completed(position))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}
