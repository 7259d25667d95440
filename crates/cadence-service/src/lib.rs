//! Recurring activity session generation.
//!
//! ## Summary
//! Expands a manually entered base session into a weekly series of
//! session-creation requests, and hands those requests to a session store.

pub mod error;
pub mod series;
pub mod store;
