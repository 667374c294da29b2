//! Core UI functionality for todoterm.
//!
//! This module contains the fundamental building blocks for the user interface:
//! the [`Action`] vocabulary, the [`Component`] trait, terminal event polling and
//! the background [`TaskManager`] that runs store requests off the UI loop.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into actions
//! 2. **Actions** describe every state transition, whether user or network driven
//! 3. **Events** are produced by the [`EventHandler`]
//! 4. **Jobs** are spawned by the [`TaskManager`] and answer with actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, HealthOutcome};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{JobId, MutationRequest, TaskManager};
