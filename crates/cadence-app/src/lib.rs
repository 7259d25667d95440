//! HTTP front end for recurring session series.

pub mod app;
pub mod config;
pub mod error;
pub mod store_handler;
