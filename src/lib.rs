//! crew - Shared To-Do Board Library
//!
//! This library provides the core functionality for the crew CLI tool:
//! a to-do board where teammates own dated tasks, persisted between runs.
//!
//! # Core Concepts
//!
//! - **Roster**: the unique, sorted set of teammate names
//! - **Board**: per-teammate task groups, ordered by due date
//! - **Snapshot**: the persisted serialization of roster + board, rewritten
//!   after every mutation
//! - **Selection**: the remembered selector choice, keyed by name
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `ui`: interactive board on ratatui
//! - `app`: application controller owning all business state
//! - `roster`: teammate registry
//! - `board`: task group store
//! - `snapshot`: serialize/deserialize of the persisted form
//! - `storage`: key-value persistence adapter
//! - `date`: calendar-day helpers
//! - `config`: configuration loading from `crew.toml`
//! - `error`: error types and result aliases
//! - `output`: shared CLI output formatting

pub mod app;
pub mod board;
pub mod cli;
pub mod config;
pub mod date;
pub mod error;
pub mod output;
pub mod roster;
pub mod snapshot;
pub mod storage;
pub mod ui;

pub use error::{Error, Result};
