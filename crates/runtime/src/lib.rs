//! Battle orchestration for the skirmish combat engine.
//!
//! This crate wires content, configuration and the deterministic core rules into
//! a round-based battle loop. Consumers build a [`Battle`] through
//! [`BattleBuilder`], then drive it round by round or run it to completion and
//! render the emitted [`BattleEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`battle`] hosts the round loop and its builder
//! - [`config`] reads runtime settings from the environment
//! - [`events`] defines what a battle reports to its observers
//! - [`error`] wraps core and content failures
pub mod battle;
pub mod config;
pub mod error;
pub mod events;

pub use battle::{Battle, BattleBuilder, BattleReport};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{BattleEvent, Outcome};
