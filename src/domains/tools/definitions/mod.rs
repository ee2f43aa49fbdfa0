//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own module.

pub mod animation;

pub use animation::{GenerateAnimationParams, GenerateAnimationTool};
