//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod calculate;

pub use calculate::{
    CalculateParams, CalculateTool, CalculationOutput, Operation, calculate,
};
