//! HTTP adapter for vcfsheet: upload a VCF file, preview it, pick columns,
//! and download the spreadsheet.

pub mod app;
pub mod config;
pub mod error;
