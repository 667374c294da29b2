//! todoterm - a terminal client for a REST to-do API
//!
//! The library keeps a cached copy of the remote task list and derives the
//! visible list from it with a pure filter, sort and search pipeline. Every
//! write goes straight to the API and is followed by a full reload.
//!
//! # Modules
//!
//! * [`backend`] - Task store trait and its HTTP implementation
//! * [`config`] - Application configuration management
//! * [`pipeline`] - Filter, sort and search over the cached list
//! * [`task`] - Task records as exchanged with the API
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and text helpers

/// Task store abstraction and the reqwest-based client
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// Pure derivation of the visible task list
pub mod pipeline;

/// Task, draft and health report records
pub mod task;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and terminal-safe text
pub mod utils;
