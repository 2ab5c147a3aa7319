//! File, session and export services behind the vcfsheet HTTP API.

pub mod convert;
pub mod error;
pub mod export;
pub mod session;
pub mod storage;
pub mod upload;
