//! The ambient color-scheme signal.
//!
//! When no preference is stored, the resolver falls back to whatever
//! appearance the OS reports. [`detect_system_mode`] is that probe, and it
//! is the one piece of process-global state in the crate: tests (and hosts
//! with a better source of truth) replace it via [`set_mode_detector`]
//! rather than mocking the OS.
//!
//! ```rust
//! use nightswitch::{set_mode_detector, ColorMode};
//!
//! // Pin the signal for a test
//! set_mode_detector(|| ColorMode::Dark);
//! ```

use dark_light::{detect as detect_os_scheme, Mode as OsScheme};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// What the environment says about the user's preferred appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// No dark signal; the default appearance.
    Light,
    /// The environment asks for a dark appearance.
    Dark,
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Replaces the ambient-signal probe, process-wide, until replaced again.
///
/// A GUI toolkit with its own appearance API can install its answer here;
/// tests install a constant.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Asks the current probe for the ambient color scheme.
///
/// The default probe goes through the `dark-light` crate. Anything short
/// of a positive dark answer — light, unspecified, or a probe failure —
/// comes back as [`ColorMode::Light`], so only an explicit dark signal can
/// turn the theme on.
pub fn detect_system_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_scheme() {
        Ok(OsScheme::Dark) => ColorMode::Dark,
        Ok(OsScheme::Light) | Ok(OsScheme::Unspecified) | Err(_) => ColorMode::Light,
    }
}
