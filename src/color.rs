use color::DynamicColor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Wrapper around the `DynamicColor` type from the color crate.
/// This provides convenience methods for working with colors in node options
/// and canvas paint state.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Fully transparent black, the baseline for canvas shadow state.
    pub fn transparent() -> Self {
        Self::new("rgba(0,0,0,0)").unwrap()
    }

    /// The half-opaque black used for drop shadows.
    pub fn shadow() -> Self {
        Self::new("rgba(0,0,0,0.5)").unwrap()
    }

    /// True when the color contributes nothing when painted.
    pub fn is_transparent(&self) -> bool {
        self.color.components[3] == 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

// Canvas implementations and SVG attributes consume colors as CSS strings.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::new(&s).map_err(serde::de::Error::custom)
    }
}
