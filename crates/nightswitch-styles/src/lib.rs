//! # Nightswitch Styles - Build-Time Style Configuration
//!
//! A typed model of the declarative document an external CSS build tool
//! consumes: content scan globs, the dark-mode strategy, responsive
//! breakpoints, variant extensions, plugins, and palette additions.
//!
//! This crate has no runtime coupling to `nightswitch` itself; the two
//! meet only in the product they configure. The build tool's pipeline is
//! out of scope here, as is any CSS generation: this is the data, loaded
//! from and dumped to YAML, plus the validation serde cannot express.
//!
//! ```rust
//! use nightswitch_styles::{DarkModeStrategy, StyleConfig};
//!
//! let config = StyleConfig::site_default();
//! assert_eq!(config.dark_mode, DarkModeStrategy::Disabled);
//!
//! let yaml = config.to_yaml().unwrap();
//! assert_eq!(StyleConfig::from_yaml(&yaml).unwrap(), config);
//! ```

mod color;
mod config;

pub use color::Rgb;
pub use config::{
    blue_gray, Breakpoint, ColorScale, DarkModeStrategy, PaletteExtension, PixelWidth, Plugin,
    StyleConfig, StyleConfigError, VariantConfig,
};
