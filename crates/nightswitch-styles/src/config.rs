//! The style-build configuration document.
//!
//! This is declarative data handed to an external CSS build tool: which
//! source files to scan for class names, how (whether) the tool's own
//! dark-mode pass runs, the responsive breakpoints, per-utility variant
//! extensions, the plugin list, and palette additions. Nothing here
//! executes at runtime.
//!
//! # YAML Form
//!
//! ```yaml
//! content:
//!   - "./_includes/**/*.html"
//!   - "./_layouts/**/*.html"
//! dark_mode: disabled
//! screens:
//!   - { name: sm, min_width: 640px }
//!   - { name: md, min_width: 768px }
//! variants:
//!   extend:
//!     grayscale: [hover, focus]
//!   overrides:
//!     container: []
//! plugins: [typography]
//! palette:
//!   blue-gray:
//!     50: "#f8fafc"
//!     900: "#0f172a"
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;

/// Error type for loading and validating a [`StyleConfig`].
#[derive(Debug, Error)]
pub enum StyleConfigError {
    /// The document is not valid YAML for this model.
    #[error("invalid style configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A breakpoint name appears twice.
    #[error("duplicate breakpoint name '{0}'")]
    DuplicateBreakpoint(String),

    /// A breakpoint has an empty name.
    #[error("breakpoint with empty name")]
    EmptyBreakpointName,

    /// Breakpoint widths must strictly increase in declaration order.
    #[error("breakpoint '{name}' ({width}) does not widen the one before it")]
    BreakpointOrder { name: String, width: PixelWidth },
}

/// A CSS pixel width, written `"640px"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PixelWidth(pub u32);

impl PixelWidth {
    /// Parses the exact `"640px"` form: decimal digits immediately
    /// followed by `px`, no surrounding or interior whitespace.
    pub fn parse(s: &str) -> Result<Self, String> {
        let digits = s
            .strip_suffix("px")
            .ok_or_else(|| format!("Invalid width '{}': expected the form '640px'", s))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid width '{}': expected the form '640px'", s));
        }
        digits
            .parse::<u32>()
            .map(PixelWidth)
            .map_err(|_| format!("Invalid width '{}': expected the form '640px'", s))
    }
}

impl fmt::Display for PixelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl TryFrom<String> for PixelWidth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PixelWidth::parse(&value)
    }
}

impl From<PixelWidth> for String {
    fn from(width: PixelWidth) -> Self {
        width.to_string()
    }
}

/// A named responsive breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: PixelWidth,
}

impl Breakpoint {
    pub fn new(name: &str, min_width_px: u32) -> Self {
        Self {
            name: name.to_string(),
            min_width: PixelWidth(min_width_px),
        }
    }
}

/// How the build tool's own dark-mode pass runs.
///
/// `Disabled` is the shipped default: the tool generates no dark variants
/// because inversion happens at runtime, outside the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    #[default]
    Disabled,
    /// Dark variants keyed off a `prefers-color-scheme` media query.
    Media,
    /// Dark variants keyed off a CSS class on the document root.
    Class,
}

/// Per-utility variant configuration.
///
/// `extend` adds variants to a utility's defaults; `overrides` replaces
/// them wholesale (an empty list strips a utility of variants entirely).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extend: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, Vec<String>>,
}

/// A build-tool plugin reference.
///
/// Known plugins get a variant; anything else survives as `Other` so a
/// document mentioning plugins this crate has never heard of still loads
/// and dumps faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Plugin {
    /// Prose styling for long-form content.
    Typography,
    Other(String),
}

impl From<String> for Plugin {
    fn from(value: String) -> Self {
        match value.as_str() {
            "typography" => Plugin::Typography,
            _ => Plugin::Other(value),
        }
    }
}

impl From<Plugin> for String {
    fn from(plugin: Plugin) -> Self {
        match plugin {
            Plugin::Typography => "typography".to_string(),
            Plugin::Other(name) => name,
        }
    }
}

/// A weighted color scale (`50` lightest through `900` darkest).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(pub BTreeMap<u16, Rgb>);

/// Named color groups grafted onto the tool's stock palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteExtension(pub BTreeMap<String, ColorScale>);

/// The full configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Glob patterns for the sources scanned for class names.
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub dark_mode: DarkModeStrategy,
    #[serde(default)]
    pub screens: Vec<Breakpoint>,
    #[serde(default)]
    pub variants: VariantConfig,
    #[serde(default)]
    pub plugins: Vec<Plugin>,
    #[serde(default, skip_serializing_if = "palette_is_empty")]
    pub palette: PaletteExtension,
}

fn palette_is_empty(palette: &PaletteExtension) -> bool {
    palette.0.is_empty()
}

impl StyleConfig {
    /// Loads and validates a document from YAML.
    pub fn from_yaml(raw: &str) -> Result<Self, StyleConfigError> {
        let config: StyleConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Dumps the document back to YAML.
    pub fn to_yaml(&self) -> Result<String, StyleConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks the structural rules serde cannot express: breakpoint names
    /// are non-empty and unique, widths strictly ascend.
    pub fn validate(&self) -> Result<(), StyleConfigError> {
        let mut seen = std::collections::BTreeSet::new();
        let mut previous: Option<PixelWidth> = None;
        for breakpoint in &self.screens {
            if breakpoint.name.is_empty() {
                return Err(StyleConfigError::EmptyBreakpointName);
            }
            if !seen.insert(breakpoint.name.as_str()) {
                return Err(StyleConfigError::DuplicateBreakpoint(
                    breakpoint.name.clone(),
                ));
            }
            if let Some(prev) = previous {
                if breakpoint.min_width <= prev {
                    return Err(StyleConfigError::BreakpointOrder {
                        name: breakpoint.name.clone(),
                        width: breakpoint.min_width,
                    });
                }
            }
            previous = Some(breakpoint.min_width);
        }
        Ok(())
    }

    /// The configuration the site ships with: three content globs, the
    /// four stock breakpoints, grayscale/margin variant extensions with
    /// container variants stripped, the typography plugin, and the
    /// blue-gray color group.
    pub fn site_default() -> Self {
        let mut extend = BTreeMap::new();
        extend.insert(
            "grayscale".to_string(),
            vec!["hover".to_string(), "focus".to_string()],
        );
        extend.insert("margin".to_string(), vec!["last".to_string()]);

        let mut overrides = BTreeMap::new();
        overrides.insert("container".to_string(), Vec::new());

        let mut palette = BTreeMap::new();
        palette.insert("blue-gray".to_string(), blue_gray());

        Self {
            content: vec![
                "./_includes/**/*.html".to_string(),
                "./_layouts/**/*.html".to_string(),
                "./blog/index.html".to_string(),
            ],
            dark_mode: DarkModeStrategy::Disabled,
            screens: vec![
                Breakpoint::new("sm", 640),
                Breakpoint::new("md", 768),
                Breakpoint::new("lg", 1024),
                Breakpoint::new("xl", 1280),
            ],
            variants: VariantConfig { extend, overrides },
            plugins: vec![Plugin::Typography],
            palette: PaletteExtension(palette),
        }
    }
}

/// The blue-gray scale grafted onto the stock palette.
pub fn blue_gray() -> ColorScale {
    let weights: [(u16, &str); 10] = [
        (50, "#f8fafc"),
        (100, "#f1f5f9"),
        (200, "#e2e8f0"),
        (300, "#cbd5e1"),
        (400, "#94a3b8"),
        (500, "#64748b"),
        (600, "#475569"),
        (700, "#334155"),
        (800, "#1e293b"),
        (900, "#0f172a"),
    ];
    ColorScale(
        weights
            .iter()
            .map(|(weight, hex)| {
                // The table is hand-checked hex; parse cannot fail.
                (*weight, Rgb::parse(hex).unwrap())
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_default_validates() {
        StyleConfig::site_default().validate().unwrap();
    }

    #[test]
    fn site_default_matches_the_shipped_document() {
        let config = StyleConfig::site_default();
        assert_eq!(config.content.len(), 3);
        assert_eq!(config.dark_mode, DarkModeStrategy::Disabled);
        assert_eq!(config.screens.len(), 4);
        assert_eq!(config.screens[0], Breakpoint::new("sm", 640));
        assert_eq!(config.screens[3], Breakpoint::new("xl", 1280));
        assert_eq!(config.plugins, vec![Plugin::Typography]);

        let scale = &config.palette.0["blue-gray"];
        assert_eq!(scale.0[&50], Rgb::parse("#f8fafc").unwrap());
        assert_eq!(scale.0[&900], Rgb::parse("#0f172a").unwrap());
    }

    #[test]
    fn variant_extensions_cover_both_utilities() {
        let config = StyleConfig::site_default();
        assert_eq!(
            config.variants.extend["grayscale"],
            vec!["hover".to_string(), "focus".to_string()]
        );
        assert_eq!(config.variants.extend["margin"], vec!["last".to_string()]);
        assert!(config.variants.overrides["container"].is_empty());
    }

    #[test]
    fn unknown_plugins_survive_a_load_dump_cycle() {
        let config = StyleConfig::from_yaml("plugins: [typography, aspect-ratio]").unwrap();
        assert_eq!(
            config.plugins,
            vec![Plugin::Typography, Plugin::Other("aspect-ratio".into())]
        );

        let dumped = config.to_yaml().unwrap();
        let reloaded = StyleConfig::from_yaml(&dumped).unwrap();
        assert_eq!(reloaded.plugins, config.plugins);
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config = StyleConfig::from_yaml("{}").unwrap();
        assert_eq!(config, StyleConfig::default());
        assert_eq!(config.dark_mode, DarkModeStrategy::Disabled);
    }

    #[test]
    fn malformed_palette_color_is_a_parse_error() {
        let err = StyleConfig::from_yaml("palette:\n  accent:\n    500: \"#a\u{e9}123\"\n")
            .unwrap_err();
        assert!(matches!(err, StyleConfigError::Parse(_)));
    }

    #[test]
    fn duplicate_breakpoint_names_are_rejected() {
        let err = StyleConfig::from_yaml(
            r#"
screens:
  - { name: sm, min_width: 640px }
  - { name: sm, min_width: 768px }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, StyleConfigError::DuplicateBreakpoint(name) if name == "sm"));
    }

    #[test]
    fn non_ascending_breakpoints_are_rejected() {
        let err = StyleConfig::from_yaml(
            r#"
screens:
  - { name: sm, min_width: 768px }
  - { name: md, min_width: 640px }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, StyleConfigError::BreakpointOrder { .. }));
    }

    #[test]
    fn pixel_width_parses_and_displays() {
        assert_eq!(PixelWidth::parse("640px").unwrap(), PixelWidth(640));
        assert_eq!(PixelWidth(1280).to_string(), "1280px");
        assert!(PixelWidth::parse("640").is_err());
        assert!(PixelWidth::parse("px").is_err());
        assert!(PixelWidth::parse("wide").is_err());
        assert!(PixelWidth::parse("640 px").is_err());
        assert!(PixelWidth::parse(" 640px ").is_err());
        assert!(PixelWidth::parse("-640px").is_err());
    }
}
