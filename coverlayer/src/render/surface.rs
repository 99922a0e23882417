//! Drawing surface abstraction.
//!
//! The renderer only ever issues a handful of primitives, so any 2D raster
//! backend can host coverage tiles by implementing [`RasterSurface`]. The
//! crate ships [`RasterTile`](super::RasterTile), backed by `tiny-skia`.

use super::color::Rgba;

/// How subsequent draws combine with existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Paint over existing pixels.
    #[default]
    SourceOver,
    /// Remove existing pixels where the source is drawn, scaled by source alpha.
    DestinationOut,
}

/// A square raster the renderer draws onto.
///
/// Coordinates are tile-local pixels with the origin at the top-left corner.
pub trait RasterSurface {
    /// Edge length in pixels.
    fn size(&self) -> u32;

    /// Set the composite mode used by all following draws.
    fn set_composite(&mut self, mode: CompositeMode);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Fill a full circle (complete arc) of radius `r` centred at `(cx, cy)`.
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba);

    fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba, width: f32);

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba, line_width: f32);
}
