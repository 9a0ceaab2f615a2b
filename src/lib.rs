//! Sideways: a side-scrolling shoot-'em-up simulation.
//!
//! The library holds the whole game: entities, update rules, wave layouts and
//! the mode state machine.  Rendering and input live in the binary.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod waves;
