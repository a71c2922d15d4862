//! Rules engine trait and game results.
//!
//! `Game` implements `RulesEngine`; drivers such as the self-play runner only
//! talk to the trait.

pub mod engine;

pub use engine::{GameResult, LossReason, RulesEngine};
