//! Access-controlled forest verification registry.
//!
//! Records forests under fixed-size names and, per forest, an append-only
//! log of verification events. Mutations are owner-only and atomic; every
//! successful mutation publishes a [`RegistryEvent`] on a broadcast channel
//! for external watchers. Reads are lock-guarded snapshots with no side
//! effects.

pub mod clock;
pub mod errors;
pub mod events;
pub mod registry;

pub use clock::{Clock, SystemClock};
pub use errors::{RegistryError, Result};
pub use events::RegistryEvent;
pub use registry::{ForestRegistry, RegistryConfig};
