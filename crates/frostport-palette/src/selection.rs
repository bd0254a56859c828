#![forbid(unsafe_code)]

//! The palette selection state machine.
//!
//! One integer tracks the active position in the aggregated sequence.
//!
//! # Invariants
//!
//! 1. `active` is always in `[0, len)` against the current sequence, or
//!    exactly 0 when the sequence is empty.
//! 2. Any query edit resets the index to 0; a changed list invalidates
//!    positional meaning.
//! 3. When the sequence shrinks below the index for any other reason,
//!    [`PaletteState::sync_len`] clamps it back into range before the next
//!    observable state.

use crate::action::Effect;
use crate::aggregate::PaletteEntry;

/// Palette-scoped selection state: visibility, a query independent of the
/// main search field, and the active index.
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    open: bool,
    query: String,
    active: usize,
}

impl PaletteState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Open the palette: clear the query and reset the selection.
    pub fn open_palette(&mut self) {
        self.open = true;
        self.query.clear();
        self.active = 0;
    }

    /// Close the palette: clear the query and reset the selection. Every
    /// dismissal path funnels through here.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.active = 0;
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open_palette();
        }
    }

    /// Step the selection forward with wraparound. No-op on an empty
    /// sequence.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.active = (self.active + 1) % len;
        }
    }

    /// Step the selection backward with wraparound. No-op on an empty
    /// sequence.
    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.active = (self.active + len - 1) % len;
        }
    }

    /// Append a character to the palette query. Resets the selection.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.active = 0;
    }

    /// Remove the last character of the palette query. Resets the selection.
    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.active = 0;
        }
    }

    /// Clear the palette query. Resets the selection.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.active = 0;
    }

    /// Re-establish the index invariant after the aggregated sequence
    /// changed length for any reason other than a direct query edit. Clamps
    /// rather than resets, so shrinking by one does not jump to the top.
    pub fn sync_len(&mut self, len: usize) {
        if len == 0 {
            self.active = 0;
        } else if self.active > len - 1 {
            self.active = len - 1;
        }
    }

    /// Activate the selected entry: yield its effect and close the palette.
    /// Returns `None` on an empty sequence.
    pub fn commit(&mut self, entries: &[PaletteEntry]) -> Option<Effect> {
        let effect = entries.get(self.active).map(|entry| entry.effect.clone());
        if effect.is_some() {
            tracing::debug!(index = self.active, "palette commit");
            self.close();
        }
        effect
    }
}
