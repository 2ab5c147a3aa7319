//! Shared configuration, error and constant definitions for vcfsheet.

pub mod config;
pub mod constants;
pub mod error;
