//! Library crate for pl-explorer.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Typed API models and HTTP client (`api`)
//! - Command-line configuration (`config`)
//! - Debounced search commit (`debounce`)
//! - Error and result types (`error`)
//! - Pagination window computation (`pagination`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `pl-explorer` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod pagination;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{ApiError, DynError, Result};
