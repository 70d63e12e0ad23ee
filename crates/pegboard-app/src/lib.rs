//! Shared library module for the Pegboard terminal front-end.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub const DEFAULT_BEST_TIME_FILE: &str = "pegboard-best-time.json";
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

pub mod action;
pub mod app;
pub mod persistence;
pub mod ui;

pub use self::app::PegboardApp;
