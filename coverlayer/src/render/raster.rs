//! `tiny-skia` backed tile raster.

use std::io::Cursor;

use image::{ImageFormat, Rgba as ImageRgba, RgbaImage};
use tiny_skia::{BlendMode, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::color::Rgba;
use super::error::RenderError;
use super::surface::{CompositeMode, RasterSurface};
use crate::config::MAX_TILE_SIZE;

/// A square RGBA tile raster.
///
/// Pixels are stored premultiplied by `tiny-skia`; accessors return straight
/// alpha values.
///
/// # Example
///
/// ```
/// use coverlayer::render::{RasterSurface, RasterTile, Rgba};
///
/// let mut tile = RasterTile::new(16).unwrap();
/// tile.fill_rect(0.0, 0.0, 16.0, 16.0, Rgba::BLACK);
/// assert_eq!(tile.pixel(8, 8), Some(Rgba::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct RasterTile {
    pixmap: Pixmap,
    blend_mode: BlendMode,
}

impl RasterTile {
    /// Allocate a fully transparent tile of `size`×`size` pixels.
    pub fn new(size: u32) -> Result<Self, RenderError> {
        if size > MAX_TILE_SIZE {
            return Err(RenderError::InvalidTileSize(size));
        }
        let pixmap = Pixmap::new(size, size).ok_or(RenderError::InvalidTileSize(size))?;
        Ok(Self {
            pixmap,
            blend_mode: BlendMode::SourceOver,
        })
    }

    /// Straight-alpha color at `(x, y)`, `None` outside the tile.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    /// Copy into a straight-alpha `image` buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let size = self.size();
        RgbaImage::from_fn(size, size, |x, y| {
            let c = self.pixel(x, y).unwrap_or(Rgba::TRANSPARENT);
            ImageRgba([c.r, c.g, c.b, c.a])
        })
    }

    /// Encode the tile as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.to_rgba_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn paint(&self, color: Rgba) -> Paint<'static> {
        let mut paint = Paint {
            anti_alias: true,
            blend_mode: self.blend_mode,
            ..Default::default()
        };
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint
    }
}

impl RasterSurface for RasterTile {
    fn size(&self) -> u32 {
        self.pixmap.width()
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.blend_mode = match mode {
            CompositeMode::SourceOver => BlendMode::SourceOver,
            CompositeMode::DestinationOut => BlendMode::DestinationOut,
        };
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            let paint = self.paint(color);
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
            let paint = self.paint(color);
            self.pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba, width: f32) {
        if width <= 0.0 {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
            let paint = self.paint(color);
            self.pixmap.stroke_path(
                &path,
                &paint,
                &Stroke {
                    width,
                    ..Default::default()
                },
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba, line_width: f32) {
        if line_width <= 0.0 {
            return;
        }
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            let path = PathBuilder::from_rect(rect);
            let paint = self.paint(color);
            self.pixmap.stroke_path(
                &path,
                &paint,
                &Stroke {
                    width: line_width,
                    ..Default::default()
                },
                Transform::identity(),
                None,
            );
        }
    }
}
