//! Wiggler - keeps the workstation awake by nudging the mouse cursor.
//!
//! Every few seconds the cursor is moved a few pixels right and straight
//! back, which idle detection counts as user activity.

pub mod pointer;
pub mod shutdown;
#[cfg(test)]
mod testing;
#[cfg(windows)]
pub mod winapi_utils;
pub mod wiggler;
