//! Selecta - searchable dropdown demo
//!
//! Terminal host for the `selecta_ui` dropdown demo page. Reads an optional
//! JSON config and drives three dropdowns from typed commands.

pub mod app;
pub mod command;
pub mod config;
pub mod error;

pub use app::DemoApp;
pub use command::Command;
pub use config::{DemoConfig, LogLevel};
pub use error::{AppError, CommandError};
