//! Adaptive assessment core for a school question bank: assembles
//! stratified diagnostic papers, drives an adaptive-difficulty practice
//! loop, and scores completed sessions into a per-topic weakness ranking.
//!
//! Question authoring and attempt persistence live outside this crate and
//! are reached through the [`store::QuestionPool`] and
//! [`store::AttemptStore`] interfaces.

pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod store;

pub use error::{EngineError, EngineResult};
pub use services::EngineState;
