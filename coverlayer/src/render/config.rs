//! Render configuration.

use std::fmt;
use std::str::FromStr;

use super::color::Rgba;
use crate::config::{
    DEFAULT_OPACITY, DEFAULT_OUTLINE_WIDTH, DEFAULT_RADIUS, DEFAULT_USE_ABSOLUTE_RADIUS,
};

/// How circles interact with the tile background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    /// Tile is filled with the layer color and circles are cut out of it.
    #[default]
    Mask,
    /// Tile starts transparent and circles are painted onto it.
    Stamp,
}

impl MaskMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskMode::Mask => "mask",
            MaskMode::Stamp => "stamp",
        }
    }
}

impl fmt::Display for MaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mask" => Ok(MaskMode::Mask),
            "stamp" => Ok(MaskMode::Stamp),
            other => Err(format!("unknown mode '{}' (expected mask or stamp)", other)),
        }
    }
}

/// Appearance of a coverage layer.
///
/// # Example
///
/// ```
/// use coverlayer::render::{MaskMode, RenderConfig, Rgba};
///
/// let config = RenderConfig::default()
///     .with_radius(80.0)
///     .with_mode(MaskMode::Stamp)
///     .with_color(Rgba::rgb(0x33, 0x88, 0xff));
///
/// assert!(config.use_absolute_radius);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Default circle radius, meters when `use_absolute_radius` else pixels
    pub radius: f64,
    pub use_absolute_radius: bool,
    pub color: Rgba,
    /// Layer opacity in `0.0..=1.0`
    pub opacity: f32,
    pub mode: MaskMode,
    /// Circle outline color; no outline when `None`
    pub outline_color: Option<Rgba>,
    pub outline_width: f32,
    /// Draw tile borders and coordinates
    pub debug: bool,
}

impl RenderConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_absolute_radius(mut self, use_absolute_radius: bool) -> Self {
        self.use_absolute_radius = use_absolute_radius;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_mode(mut self, mode: MaskMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_outline(mut self, color: Rgba, width: f32) -> Self {
        self.outline_color = Some(color);
        self.outline_width = width;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Layer color with the layer opacity applied.
    pub fn fill_color(&self) -> Rgba {
        self.color.with_opacity(self.opacity)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            use_absolute_radius: DEFAULT_USE_ABSOLUTE_RADIUS,
            color: Rgba::BLACK,
            opacity: DEFAULT_OPACITY,
            mode: MaskMode::default(),
            outline_color: None,
            outline_width: DEFAULT_OUTLINE_WIDTH,
            debug: false,
        }
    }
}
