#![forbid(unsafe_code)]

//! Terminal front end for the Frostport docs portal.
//!
//! The binary wires the core catalog and palette crates to a crossterm
//! event loop: [`cli`] and [`prefs`] resolve startup state, [`app`] owns the
//! session, [`view`] renders frames, and [`viewsync`] keeps scroll and focus
//! consistent across palette transitions.

pub mod app;
pub mod cli;
pub mod copy;
pub mod launch;
pub mod logging;
pub mod prefs;
pub mod view;
pub mod viewsync;
