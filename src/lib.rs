//! Robot API Mock
//!
//! A mock of a robotic-device HTTP control API that hands out synthetic
//! identifiers for protocol uploads, run creation, and run actions so that
//! client software can be exercised in automated tests without hardware.

pub mod api;
pub mod config;
pub mod error;

pub use error::{AppError, Result};

/// Application state shared across all handlers
pub struct AppState {
    pub settings: config::Settings,
}
