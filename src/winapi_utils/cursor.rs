//! Cursor-related WinAPI wrappers.
//!
//! Thin safe wrappers over `GetCursorPos` / `SetCursorPos`.

use windows::Win32::Foundation::POINT;
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, SetCursorPos};

/// Gets the cursor position in screen coordinates.
///
/// Fails when the calling process has no access to the input desktop
/// (e.g., the workstation is locked or running as a service).
///
/// # Example
/// ```no_run
/// use wiggler::winapi_utils::get_cursor_pos;
///
/// let (x, y) = get_cursor_pos()?;
/// println!("Cursor at {}, {}", x, y);
/// # Ok::<(), windows::core::Error>(())
/// ```
pub fn get_cursor_pos() -> windows::core::Result<(i32, i32)> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point)? };
    Ok((point.x, point.y))
}

/// Moves the cursor to the given screen coordinates.
///
/// Windows clips the position to the virtual screen.
pub fn set_cursor_pos(x: i32, y: i32) -> windows::core::Result<()> {
    unsafe { SetCursorPos(x, y) }
}
