#![forbid(unsafe_code)]

//! Keeping view state consistent with model transitions.
//!
//! Three small mechanisms, all deliberately decoupled from rendering:
//!
//! - [`scroll_into_view`]: minimal-movement scrolling so the active entry is
//!   visible without recentering on every step.
//! - [`ScrollLock`]: saves the document scroll offset while the palette is
//!   open and restores it on close, so an open-browse-close cycle is a no-op
//!   for the underlying page position.
//! - [`FocusDeferral`]: focus requested during a transition is armed and
//!   consumed on the next event-loop tick, after the overlay exists; closing
//!   before the tick cancels it.
//!
//! [`TerminalGuard`] is the RAII wrapper around raw mode and the alternate
//! screen; drop order guarantees the terminal is restored even on panic
//! unwind.

use std::io::{self, Write};

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

// ─────────────────────────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────────────────────────

/// Adjust `offset` just enough that `active` is within the `viewport` rows
/// starting at `offset`. Already-visible entries leave the offset untouched.
#[must_use]
pub fn scroll_into_view(offset: usize, active: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return offset;
    }
    if active < offset {
        active
    } else if active >= offset + viewport {
        active + 1 - viewport
    } else {
        offset
    }
}

/// Saved document scroll position for the duration of a modal overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLock {
    saved: Option<usize>,
}

impl ScrollLock {
    /// Engage the lock, remembering the current offset. Re-engaging while
    /// already locked keeps the original saved offset.
    pub fn engage(&mut self, current_offset: usize) {
        if self.saved.is_none() {
            self.saved = Some(current_offset);
        }
    }

    /// Release the lock, yielding the offset to restore.
    pub fn release(&mut self) -> Option<usize> {
        self.saved.take()
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.saved.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Deferred Focus
// ─────────────────────────────────────────────────────────────────────────────

/// One-shot focus request consumed on the next event-loop tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusDeferral {
    pending: bool,
}

impl FocusDeferral {
    /// Arm the deferral. Arming twice before a tick is the same as once.
    pub fn arm(&mut self) {
        self.pending = true;
    }

    /// Cancel a pending deferral, e.g. when the target closed before the
    /// tick ran.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Consume the deferral if armed. Returns true exactly once per arm.
    pub fn fire(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Terminal Guard
// ─────────────────────────────────────────────────────────────────────────────

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalGuard {
    out: io::Stdout,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, hiding the cursor.
    pub fn acquire() -> io::Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }

    /// The writer for frame output.
    pub fn writer(&mut self) -> &mut io::Stdout {
        &mut self.out
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = self.out.flush();
    }
}
