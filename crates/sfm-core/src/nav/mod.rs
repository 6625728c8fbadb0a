//! Navigation state for SFM.
//!
//! This module contains the single-slot [`clipboard::Clipboard`] and the
//! [`path`] helpers that resolve entry names and typed targets against the
//! current directory.

pub mod clipboard;
pub mod path;
