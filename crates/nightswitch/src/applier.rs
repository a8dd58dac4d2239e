//! Turning the theme on and off.
//!
//! [`ThemeApplier`] pairs an injected [`PreferenceStore`] with an injected
//! [`Inverter`] and exposes the two transitions. Each transition drives the
//! engine first and records the choice second, so the stored value always
//! reflects the last transition that completed.

use tracing::debug;

use crate::inverter::{default_fetch, Inverter};
use crate::store::{PreferenceStore, StoreError, DARK_MODE_KEY};

/// Applies a theme transition to an engine and records it in a store.
///
/// Both operations are synchronous and idempotent: activating twice leaves
/// the engine enabled and the preference at `"true"`, deactivating twice
/// leaves it disabled and at `"false"`.
pub struct ThemeApplier<'a> {
    store: &'a mut dyn PreferenceStore,
    inverter: &'a mut dyn Inverter,
}

impl<'a> ThemeApplier<'a> {
    /// Creates an applier over the given store and engine.
    pub fn new(store: &'a mut dyn PreferenceStore, inverter: &'a mut dyn Inverter) -> Self {
        Self { store, inverter }
    }

    /// Turns dark mode on: installs the default fetch hook, enables the
    /// engine, and stores `"true"`.
    pub fn activate(&mut self) -> Result<(), StoreError> {
        self.inverter.set_fetch_method(default_fetch());
        self.inverter.enable();
        self.store.set(DARK_MODE_KEY, "true")?;
        debug!("dark mode activated");
        Ok(())
    }

    /// Turns dark mode off: disables the engine and stores `"false"`.
    pub fn deactivate(&mut self) -> Result<(), StoreError> {
        self.inverter.disable();
        self.store.set(DARK_MODE_KEY, "false")?;
        debug!("dark mode deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::NoopInverter;

    #[test]
    fn activate_records_true() {
        let mut store = MemoryStore::new();
        let mut engine = NoopInverter;

        ThemeApplier::new(&mut store, &mut engine)
            .activate()
            .unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn activate_is_idempotent() {
        let mut store = MemoryStore::new();
        let mut engine = NoopInverter;
        let mut applier = ThemeApplier::new(&mut store, &mut engine);

        applier.activate().unwrap();
        applier.activate().unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn deactivate_then_activate_ends_true() {
        let mut store = MemoryStore::new();
        let mut engine = NoopInverter;
        let mut applier = ThemeApplier::new(&mut store, &mut engine);

        applier.deactivate().unwrap();
        applier.activate().unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }
}
