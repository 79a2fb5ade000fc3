//! In-memory doubles for the pointer and sleeper seams.

use crate::pointer::{PointerDevice, PointerError, Position};
use crate::shutdown::{Sleep, Sleeper};
use std::time::Duration;

/// Pointer that records every read and placement.
///
/// With `max_x` set, placements are clipped to `0..=max_x` the way the
/// host clips the cursor to the screen.
#[derive(Debug, Default)]
pub struct ScriptedPointer {
    pub current: Position,
    pub placements: Vec<Position>,
    pub reads: Vec<Position>,
    pub fail_query: bool,
    pub fail_place: bool,
    pub max_x: Option<i32>,
}

impl ScriptedPointer {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            current: Position::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_max_x(mut self, max_x: i32) -> Self {
        self.max_x = Some(max_x);
        self
    }
}

impl PointerDevice for ScriptedPointer {
    fn position(&mut self) -> Result<Position, PointerError> {
        if self.fail_query {
            return Err(PointerError::Query("scripted failure".to_string()));
        }
        self.reads.push(self.current);
        Ok(self.current)
    }

    fn place(&mut self, position: Position) -> Result<(), PointerError> {
        if self.fail_place {
            return Err(PointerError::Place("scripted failure".to_string()));
        }
        let position = match self.max_x {
            Some(max_x) => Position::new(position.x.clamp(0, max_x), position.y),
            None => position,
        };
        self.placements.push(position);
        self.current = position;
        Ok(())
    }
}

/// Sleeper that never blocks.
///
/// Records requested durations. Interrupts either on the n-th sleep call
/// (1-based) or on the n-th sleep of at least `long` duration.
#[derive(Debug, Default)]
pub struct ScriptedSleeper {
    pub slept: Vec<Duration>,
    interrupt_on_call: Option<usize>,
    interrupt_on_long: Option<(Duration, usize)>,
    long_count: usize,
    triggered: bool,
}

impl ScriptedSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupt_on_sleep(n: usize) -> Self {
        Self {
            interrupt_on_call: Some(n),
            ..Self::default()
        }
    }

    pub fn interrupt_on_long_sleep(long: Duration, n: usize) -> Self {
        Self {
            interrupt_on_long: Some((long, n)),
            ..Self::default()
        }
    }

    pub fn already_interrupted() -> Self {
        Self {
            triggered: true,
            ..Self::default()
        }
    }
}

impl Sleeper for ScriptedSleeper {
    fn sleep(&mut self, duration: Duration) -> Sleep {
        if self.triggered {
            return Sleep::Interrupted;
        }
        self.slept.push(duration);

        if self.interrupt_on_call == Some(self.slept.len()) {
            self.triggered = true;
        }
        if let Some((long, n)) = self.interrupt_on_long {
            if duration >= long {
                self.long_count += 1;
                if self.long_count == n {
                    self.triggered = true;
                }
            }
        }

        if self.triggered {
            Sleep::Interrupted
        } else {
            Sleep::Completed
        }
    }

    fn interrupted(&self) -> bool {
        self.triggered
    }
}
