//! Cadence session series server - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can reach
//! every layer through `cadence_test::` paths.

#![expect(
    ambiguous_glob_reexports,
    reason = "core and service both export an `error` module"
)]

pub mod component {
    pub use cadence_core::*;
    pub use cadence_service::*;

    // Config types from core together with the depot handler from app
    pub mod config {
        pub use cadence_app::config::ConfigHandler;
        pub use cadence_core::config::*;
    }

    // Store trait and implementations together with the depot handler from app
    pub mod store {
        pub use cadence_app::store_handler::SessionStoreHandler;
        pub use cadence_service::store::*;
    }
}

pub mod app {
    pub use cadence_app::*;

    pub mod api {
        pub use cadence_app::app::api::*;
    }
}
