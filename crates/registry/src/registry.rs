//! Forest registry state machine.

use crate::clock::{Clock, SystemClock};
use crate::errors::{RegistryError, Result};
use crate::events::{EventBus, RegistryEvent};
use notary_types::{Address, Forest, ForestName, Verification};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Configuration for [`ForestRegistry`].
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Capacity of the broadcast channel backing event subscriptions.
    pub event_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            event_capacity: 256,
        }
    }
}

/// Stored record: forest metadata plus its append-only verification log.
#[derive(Debug, Clone)]
struct ForestEntry {
    forest: Forest,
    verifications: Vec<Verification>,
}

#[derive(Debug, Default)]
struct RegistryState {
    forests: HashMap<ForestName, ForestEntry>,
    forests_count: u64,
}

/// Access-controlled forest registry.
///
/// Holds the owner identity fixed at construction, a mapping from forest
/// name to forest record, and per-forest append-only verification logs.
/// Guards and mutation run under a single write-lock acquisition, so a
/// failed call leaves state exactly as before and intermediate state is
/// never visible. Map presence is the existence indicator; there is no
/// zero-timestamp sentinel.
pub struct ForestRegistry {
    owner: Address,
    clock: Arc<dyn Clock>,
    events: EventBus,
    state: RwLock<RegistryState>,
}

impl ForestRegistry {
    /// Create a registry owned by `owner`, using the system clock.
    pub fn new(owner: Address, config: RegistryConfig) -> Self {
        Self::with_clock(owner, config, Arc::new(SystemClock))
    }

    /// Create a registry with an explicit processing-time source.
    pub fn with_clock(owner: Address, config: RegistryConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            owner,
            clock,
            events: EventBus::new(config.event_capacity),
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Register a new forest under `name`.
    ///
    /// Owner-only. Fails with [`RegistryError::DuplicateForest`] when the
    /// name is already present.
    pub fn register_forest(&self, caller: &Address, name: ForestName) -> Result<()> {
        let mut state = self.state.write();

        self.authorize(caller)?;
        if state.forests.contains_key(&name) {
            warn!(forest = %name, "rejected duplicate forest registration");
            return Err(RegistryError::DuplicateForest);
        }

        let created_at = self.clock.now();
        state.forests.insert(
            name,
            ForestEntry {
                forest: Forest {
                    name,
                    verifications_count: 0,
                    created_at,
                },
                verifications: Vec::new(),
            },
        );
        state.forests_count += 1;
        drop(state);

        info!(forest = %name, created_at, "forest registered");
        self.events.publish(RegistryEvent::ForestRegistered { name });
        Ok(())
    }

    /// Append a verification to the log of `name`.
    ///
    /// Owner-only. `acquired_at` is caller-supplied and recorded as-is; no
    /// ordering against earlier entries is enforced, since measurements may
    /// arrive out of physical-time order. Fails with
    /// [`RegistryError::UnknownForest`] when the name is not registered.
    pub fn add_verification(
        &self,
        caller: &Address,
        name: ForestName,
        value: u64,
        acquired_at: u64,
    ) -> Result<()> {
        let mut state = self.state.write();

        self.authorize(caller)?;
        let entry = state
            .forests
            .get_mut(&name)
            .ok_or(RegistryError::UnknownForest)?;

        let created_at = self.clock.now();
        entry.verifications.push(Verification {
            value,
            acquired_at,
            created_at,
        });
        entry.forest.verifications_count += 1;
        drop(state);

        info!(forest = %name, value, acquired_at, "verification appended");
        self.events.publish(RegistryEvent::ForestVerificationAdded {
            forest_name: name,
            value,
            acquired_at,
            created_at,
        });
        Ok(())
    }

    /// Read the verification at `index` of the log of `name`.
    ///
    /// Fails with [`RegistryError::UnknownForest`] for an unregistered name
    /// and [`RegistryError::IndexOutOfBounds`] for an unpopulated index.
    pub fn get_verification(&self, name: ForestName, index: u64) -> Result<Verification> {
        let state = self.state.read();
        let entry = state
            .forests
            .get(&name)
            .ok_or(RegistryError::UnknownForest)?;

        let count = entry.forest.verifications_count;
        if index >= count {
            return Err(RegistryError::IndexOutOfBounds { index, count });
        }
        Ok(entry.verifications[index as usize])
    }

    /// Snapshot of the record for `name`, if registered.
    pub fn forest(&self, name: ForestName) -> Option<Forest> {
        let state = self.state.read();
        state.forests.get(&name).map(|entry| entry.forest.clone())
    }

    /// Total number of distinct registered forests.
    pub fn forests_count(&self) -> u64 {
        self.state.read().forests_count
    }

    /// The identity fixed at construction as the only authorized mutator.
    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// Attach an external watcher to the notification sink.
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    fn authorize(&self, caller: &Address) -> Result<()> {
        if caller != &self.owner {
            warn!(caller = %caller, "rejected mutation from non-owner");
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }
}
