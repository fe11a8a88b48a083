//! Terminal screen clearing.
//!
//! The console clears the screen between menu iterations, matching the
//! classic full-screen menu feel. Clearing is cosmetic: callers treat a
//! failure as a warning, never as a reason to stop the loop.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Clears the terminal and moves the cursor to the top-left corner.
///
/// # Errors
///
/// Returns the underlying I/O error if the terminal commands cannot be
/// written or flushed.
pub fn clear(out: &mut impl Write) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}
