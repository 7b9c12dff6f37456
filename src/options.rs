//! Per-node rendering options.
//!
//! A [`NodeOptions`] bag is owned by every node glyph and replaced wholesale
//! via `set_options`. All fields carry serde defaults so the bag can be
//! deserialized from a host application's configuration with only the keys
//! the user cares about.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Configuration bag for one node glyph.
///
/// Replacing the bag does not trigger a resize; callers must resize
/// explicitly afterward if geometry-affecting options changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeOptions {
    /// Radius-like scalar controlling the glyph extent.
    pub size: f32,

    /// Stroke width of the glyph outline, also added to border distances.
    pub border_width: f32,

    /// Stroke width while selected. When absent, selection uses twice
    /// `border_width`.
    pub border_width_selected: Option<f32>,

    /// Label text placed underneath the glyph. Measured, not painted, by
    /// this crate.
    pub label: Option<String>,

    /// Font size handed to the label measurer.
    pub font_size: f32,

    pub color: ColorOptions,

    pub shadow: ShadowOptions,
}

impl Default for NodeOptions {
    fn default() -> Self {
        Self {
            size: 25.0,
            border_width: 1.0,
            border_width_selected: None,
            label: None,
            font_size: 14.0,
            color: ColorOptions::default(),
            shadow: ShadowOptions::default(),
        }
    }
}

impl NodeOptions {
    /// Stroke width for the given selection state, falling back to twice the
    /// plain border width when no selected width is configured.
    pub fn selection_border_width(&self, selected: bool) -> f32 {
        if selected {
            self.border_width_selected
                .unwrap_or(2.0 * self.border_width)
        } else {
            self.border_width
        }
    }
}

/// Fill and border colors for the neutral, selected and hovered states.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    pub background: Color,
    pub border: Color,
    pub highlight: StateColors,
    pub hover: StateColors,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: Color::new("#97C2FC").unwrap(),
            border: Color::new("#2B7CE9").unwrap(),
            highlight: StateColors::default(),
            hover: StateColors::default(),
        }
    }
}

impl ColorOptions {
    /// Background color for the given interaction state.
    pub fn background_for(&self, selected: bool, hover: bool) -> &Color {
        if selected {
            &self.highlight.background
        } else if hover {
            &self.hover.background
        } else {
            &self.background
        }
    }

    /// Border color for the given interaction state.
    pub fn border_for(&self, selected: bool, hover: bool) -> &Color {
        if selected {
            &self.highlight.border
        } else if hover {
            &self.hover.border
        } else {
            &self.border
        }
    }
}

/// Color pair for a highlighted or hovered glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateColors {
    pub background: Color,
    pub border: Color,
}

impl Default for StateColors {
    fn default() -> Self {
        Self {
            background: Color::new("#D2E5FF").unwrap(),
            border: Color::new("#2B7CE9").unwrap(),
        }
    }
}

/// Drop-shadow styling applied while filling the glyph.
///
/// The painted shadow color is a fixed half-opaque black; options only
/// control the blur size and offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowOptions {
    pub enabled: bool,
    /// Blur radius of the shadow.
    pub size: f32,
    /// Horizontal shadow offset.
    pub x: f32,
    /// Vertical shadow offset.
    pub y: f32,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            size: 10.0,
            x: 5.0,
            y: 5.0,
        }
    }
}
