#![forbid(unsafe_code)]

//! Unified command palette for the Frostport portal.
//!
//! The palette merges two heterogeneous sources into one keyboard-navigable
//! sequence: the fixed registry of invocable actions and a ranked, capped
//! subset of the document catalog. Actions always precede docs, each run
//! contiguous; index arithmetic elsewhere depends on that ordering.
//!
//! - [`action`]: the action registry and the closed [`action::Effect`] type.
//! - [`aggregate`]: merging actions and docs into [`aggregate::PaletteEntry`]s.
//! - [`selection`]: the active-index state machine.

pub mod action;
pub mod aggregate;
pub mod selection;

pub use action::{ActionRegistry, Effect, PaletteAction};
pub use aggregate::{EntryKind, PALETTE_DOC_CAP, PaletteEntry, aggregate};
pub use selection::PaletteState;
