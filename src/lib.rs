//! Chess rules engine.
//!
//! [`game_repr`] holds the rules: positions, move geometry, legality,
//! check and draw detection, and the [`attempt_move`](game_repr::Position::attempt_move)
//! entry point. The remaining modules are thin collaborators built on the
//! public state of a position.

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod notation;
pub mod orchestrator;
pub mod render;
