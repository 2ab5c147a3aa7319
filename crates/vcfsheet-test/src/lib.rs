//! vcfsheet - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `vcfsheet_test::` paths.

pub mod component {
    pub use vcfsheet_service::*;

    // Re-export config from both core and app
    pub mod config {
        pub use vcfsheet_app::config::ConfigHandler;
        pub use vcfsheet_core::config::*;
    }

    pub mod constants {
        pub use vcfsheet_core::constants::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use vcfsheet_app::*;

    pub mod api {
        pub use vcfsheet_app::app::api::*;
    }
}

pub use vcfsheet_rfc as rfc;
