//! Domain types for the forest notary registry.
//!
//! Identifiers serialize as human-readable strings (hex-encoded addresses,
//! zero-padding-stripped forest labels); the raw fixed-size bytes remain
//! available through accessors for storage-key use.

pub mod address;
pub mod forest;

pub use address::*;
pub use forest::*;
