//! Atelier Core - Shared types library.
//!
//! Common types used by the Atelier backend. This crate contains only types
//! and traits - no I/O, no database access, no HTTP - which keeps it
//! lightweight and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and validated emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
