//! Timed cursor movement.
//!
//! A move is spread over its duration as a short run of absolute
//! placements along the straight line from start to target, with a pause
//! before each placement. The number of placements follows the pixel
//! distance but never lets the per-step pause drop below a floor, so a
//! 10 px move over 100 ms with a 50 ms floor becomes two 50 ms steps.

use super::{PointerDevice, PointerError, Position};
use crate::shutdown::{Sleep, Sleeper};
use std::time::Duration;

/// Step count and per-step pause for one timed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenPlan {
    pub steps: u32,
    pub pause: Duration,
}

impl TweenPlan {
    /// Plans a move of `(dx, dy)` over `duration`.
    ///
    /// A zero duration yields a single placement with no pause.
    pub fn new(dx: i32, dy: i32, duration: Duration, min_step_pause: Duration) -> Self {
        let distance = dx.unsigned_abs().max(dy.unsigned_abs());

        if duration.is_zero() || distance == 0 {
            return Self {
                steps: 1,
                pause: Duration::ZERO,
            };
        }

        let mut steps = distance;
        let mut pause = duration / steps;

        if pause < min_step_pause && !min_step_pause.is_zero() {
            let fitted = duration.as_nanos() / min_step_pause.as_nanos();
            steps = u32::try_from(fitted).unwrap_or(u32::MAX).clamp(1, distance);
            pause = duration / steps;
        }

        Self { steps, pause }
    }
}

/// Linear interpolation between `start` and `target` at step `i` of `steps`.
fn lerp(start: Position, target: Position, i: u32, steps: u32) -> Position {
    if i >= steps {
        return target;
    }
    let t = f64::from(i) / f64::from(steps);
    let x = f64::from(start.x) + (f64::from(target.x) - f64::from(start.x)) * t;
    let y = f64::from(start.y) + (f64::from(target.y) - f64::from(start.y)) * t;
    Position::new(x.round() as i32, y.round() as i32)
}

/// Moves the cursor from `start` to `target` over `duration`.
///
/// The endpoints are taken as given rather than read back from the device,
/// so a leg clipped at the screen edge does not skew the next one.
///
/// Each pause goes through `sleeper`, so an interrupt stops the move
/// part-way and returns [`Sleep::Interrupted`]. Device errors are returned
/// as-is.
pub fn glide<P, S>(
    device: &mut P,
    sleeper: &mut S,
    start: Position,
    target: Position,
    duration: Duration,
    min_step_pause: Duration,
) -> Result<Sleep, PointerError>
where
    P: PointerDevice + ?Sized,
    S: Sleeper + ?Sized,
{
    let dx = target.x.saturating_sub(start.x);
    let dy = target.y.saturating_sub(start.y);
    let plan = TweenPlan::new(dx, dy, duration, min_step_pause);

    tracing::trace!(
        %start,
        %target,
        steps = plan.steps,
        pause_ms = plan.pause.as_millis() as u64,
        "Gliding cursor"
    );

    for i in 1..=plan.steps {
        if !plan.pause.is_zero() {
            if sleeper.sleep(plan.pause) == Sleep::Interrupted {
                return Ok(Sleep::Interrupted);
            }
        } else if sleeper.interrupted() {
            return Ok(Sleep::Interrupted);
        }
        device.place(lerp(start, target, i, plan.steps))?;
    }

    Ok(Sleep::Completed)
}
