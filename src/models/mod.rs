//! Data models for the console
//!
//! This module contains the value types exchanged between the dispatcher,
//! its collaborators and front ends.

pub mod command_result;
pub mod mode;

pub use command_result::{format_execution_time, CommandResult};
pub use mode::Mode;
