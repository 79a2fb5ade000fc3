//! The host pointer backend.
//!
//! Only Windows has one. Elsewhere every call on [`SystemPointer`] fails
//! with [`PointerError::Unavailable`], which the binary treats as fatal.

use super::{PointerDevice, PointerError, Position};

/// Pointer device backed by the host's input subsystem.
///
/// Construction never touches the input subsystem; a missing desktop or
/// unsupported platform surfaces on the first read.
#[derive(Debug, Default)]
pub struct SystemPointer {
    _private: (),
}

impl SystemPointer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(windows)]
impl PointerDevice for SystemPointer {
    fn position(&mut self) -> Result<Position, PointerError> {
        crate::winapi_utils::get_cursor_pos()
            .map(Position::from)
            .map_err(|e| PointerError::Query(e.to_string()))
    }

    fn place(&mut self, position: Position) -> Result<(), PointerError> {
        crate::winapi_utils::set_cursor_pos(position.x, position.y)
            .map_err(|e| PointerError::Place(e.to_string()))
    }
}

#[cfg(not(windows))]
impl PointerDevice for SystemPointer {
    fn position(&mut self) -> Result<Position, PointerError> {
        Err(unsupported())
    }

    fn place(&mut self, _position: Position) -> Result<(), PointerError> {
        Err(unsupported())
    }
}

#[cfg(not(windows))]
fn unsupported() -> PointerError {
    PointerError::Unavailable(format!(
        "cursor control is not supported on {}",
        std::env::consts::OS
    ))
}
