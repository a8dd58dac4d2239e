//! The inversion engine capability.
//!
//! The engine that actually recolors a surface is an external collaborator;
//! this crate only drives it. [`Inverter`] is the exact capability set the
//! crate needs: turn inversion on, turn it off, and hand the engine a fetch
//! hook for pulling in any resources it needs (stylesheet fixes, site
//! overrides).

use std::io;

/// Resource-fetching hook handed to the engine before it is enabled.
///
/// Engines resolve resources by name; the hook maps a name to bytes.
pub type FetchMethod = Box<dyn FnMut(&str) -> io::Result<Vec<u8>> + Send>;

/// The environment's default fetch capability: a plain filesystem read.
pub fn default_fetch() -> FetchMethod {
    Box::new(|resource| std::fs::read(resource))
}

/// Capability set of an external color-inversion engine.
///
/// Modeled as a trait so hosts inject a real engine and tests inject a
/// recording stub. All three operations are infallible from this crate's
/// point of view; engine-internal failures stay engine-internal.
pub trait Inverter {
    /// Turns inversion on. Idempotent.
    fn enable(&mut self);

    /// Turns inversion off. Idempotent.
    fn disable(&mut self);

    /// Installs the hook the engine uses to fetch resources.
    fn set_fetch_method(&mut self, fetch: FetchMethod);
}

/// An engine that does nothing. Useful when only the stored preference
/// matters, or as a placeholder before a real engine is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopInverter;

impl Inverter for NoopInverter {
    fn enable(&mut self) {}

    fn disable(&mut self) {}

    fn set_fetch_method(&mut self, _fetch: FetchMethod) {}
}
