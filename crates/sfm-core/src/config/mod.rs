//! Configuration management for SFM.
//!
//! User preferences ([`settings::Config`]) are stored as a TOML file and
//! loaded once at startup.

pub mod settings;
