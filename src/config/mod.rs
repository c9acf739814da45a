//! Configuration management for racetable.
//!
//! Provides XDG-compliant paths and JSON application settings.

mod settings;

pub use settings::{AppSettings, Paths};
