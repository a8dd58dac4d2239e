//! # Nightswitch - Dark-Mode Preference Resolution
//!
//! `nightswitch` decides whether a dark visual theme should be active and
//! keeps the user's last choice persistent. It owns the decision and the
//! persistence; the actual color inversion is performed by an external
//! engine reached through the [`Inverter`] capability.
//!
//! ## Core Concepts
//!
//! - [`PreferenceStore`]: key/value persistence for the single `dark-mode`
//!   key ([`MemoryStore`] in process, [`FileStore`] on disk)
//! - [`Inverter`]: the inversion engine's capability set (`enable`,
//!   `disable`, `set_fetch_method`)
//! - [`ThemeApplier`]: turns the engine on or off and records the choice
//! - [`resolve_startup`]: the once-per-start decision combining the stored
//!   preference with the OS color-scheme signal
//! - [`ColorMode`] / [`detect_system_mode`]: the ambient signal, overridable
//!   for tests via [`set_mode_detector`]
//!
//! ## Quick Start
//!
//! ```rust
//! use nightswitch::{resolve_startup, MemoryStore, NoopInverter};
//!
//! let mut store = MemoryStore::new();
//! let mut engine = NoopInverter;
//!
//! // Run once at startup: reads the stored preference, falls back to the
//! // OS signal, and drives the engine accordingly.
//! resolve_startup(&mut store, &mut engine).unwrap();
//! ```
//!
//! ## Explicit Toggling
//!
//! ```rust
//! use nightswitch::{MemoryStore, NoopInverter, Preference, ThemeApplier};
//!
//! let mut store = MemoryStore::new();
//! let mut engine = NoopInverter;
//!
//! ThemeApplier::new(&mut store, &mut engine).activate().unwrap();
//! assert_eq!(Preference::load(&store).unwrap(), Some(Preference::Dark));
//! ```
//!
//! ## Injection Over Ambient State
//!
//! Nothing in this crate reaches for global storage or a global engine: the
//! store and the inverter are arguments everywhere, so hosts choose the
//! backing (a YAML file, an in-memory map, a test double) and tests never
//! touch the real OS. The one process-global is the mode detector, which
//! exists precisely so tests can pin the ambient signal.

mod applier;
mod detect;
mod inverter;
mod preference;
mod resolver;
mod store;

pub use applier::ThemeApplier;
pub use detect::{detect_system_mode, set_mode_detector, ColorMode};
pub use inverter::{default_fetch, FetchMethod, Inverter, NoopInverter};
pub use preference::Preference;
pub use resolver::resolve_startup;
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, DARK_MODE_KEY};
