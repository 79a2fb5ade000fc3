//! Pointer access.
//!
//! The wiggle loop only needs two things from the host: where the cursor
//! is, and a way to put it somewhere else. [`PointerDevice`] is that seam;
//! [`SystemPointer`] is the real backend and tests use an in-memory one.

pub mod system;
pub mod tween;

pub use system::*;
pub use tween::*;

use std::fmt;

/// A screen-space cursor coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Host input capability used by the wiggler.
pub trait PointerDevice {
    /// Reads the current cursor position.
    fn position(&mut self) -> Result<Position, PointerError>;

    /// Places the cursor at an absolute position.
    fn place(&mut self, position: Position) -> Result<(), PointerError>;
}

/// Errors that can occur while talking to the input subsystem.
#[derive(Debug)]
pub enum PointerError {
    /// No usable input subsystem on this host.
    Unavailable(String),
    /// Reading the cursor position failed.
    Query(String),
    /// Moving the cursor failed.
    Place(String),
}

impl fmt::Display for PointerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerError::Unavailable(e) => write!(f, "Input subsystem unavailable: {}", e),
            PointerError::Query(e) => write!(f, "Failed to read cursor position: {}", e),
            PointerError::Place(e) => write!(f, "Failed to move cursor: {}", e),
        }
    }
}

impl std::error::Error for PointerError {}
