//! Core logic for the multi-course study planner
//!
//! Three thin pieces: a proportional time [`allocator`], a calendar
//! [`dates`] mapper, and the [`planner`] bridge that turns both into a
//! prompt for an external completion model and validates the reply.

pub mod allocator;
pub mod config;
pub mod dates;
pub mod error;
pub mod llm;
pub mod planner;

pub use config::AppConfig;
pub use error::{PlannerError, Result};
