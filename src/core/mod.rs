//! Workflow command encoding.

pub mod annotation;
pub mod command;
pub mod escape;
pub mod output;
