//! Debug overlay: tile border and coordinate label.
//!
//! The label is drawn with a tiny built-in bitmap font so the overlay has no
//! font file dependency. Only the characters a tile label needs are defined;
//! anything else renders as blank space.

use super::color::Rgba;
use super::surface::{CompositeMode, RasterSurface};
use crate::coord::TileCoord;

/// Overlay color (`#f55`).
pub const DEBUG_COLOR: Rgba = Rgba::rgb(0xff, 0x55, 0x55);

/// Label position, top-left of the first glyph.
const LABEL_ORIGIN: (f32, f32) = (20.0, 20.0);

/// Glyph cell edge length in pixels.
const GLYPH_SCALE: f32 = 2.0;

const GLYPH_WIDTH: usize = 3;
const GLYPH_HEIGHT: usize = 5;

/// Rows of a 3×5 glyph, most significant of the low three bits is the left column.
fn glyph(c: char) -> [u8; GLYPH_HEIGHT] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'x' => [0b000, 0b101, 0b010, 0b101, 0b000],
        'y' => [0b101, 0b101, 0b011, 0b001, 0b110],
        'z' => [0b000, 0b111, 0b010, 0b100, 0b111],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        _ => [0; GLYPH_HEIGHT],
    }
}

/// Text shown on a debug tile.
pub fn debug_label(tile: &TileCoord) -> String {
    format!("x: {}, y: {}, z: {}", tile.col, tile.row, tile.zoom)
}

/// Draw `text` with the bitmap font, top-left at `(x, y)`.
pub fn draw_text<S: RasterSurface + ?Sized>(surface: &mut S, text: &str, x: f32, y: f32, color: Rgba) {
    let advance = (GLYPH_WIDTH + 1) as f32 * GLYPH_SCALE;

    for (i, c) in text.chars().enumerate() {
        let left = x + i as f32 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    surface.fill_rect(
                        left + col as f32 * GLYPH_SCALE,
                        y + row as f32 * GLYPH_SCALE,
                        GLYPH_SCALE,
                        GLYPH_SCALE,
                        color,
                    );
                }
            }
        }
    }
}

/// Draw the border and coordinate label over a finished tile.
pub fn draw_debug_overlay<S: RasterSurface + ?Sized>(surface: &mut S, tile: &TileCoord) {
    let size = surface.size() as f32;
    surface.set_composite(CompositeMode::SourceOver);
    // inset by half the line width so the whole stroke lands on the tile
    surface.stroke_rect(0.5, 0.5, size - 1.0, size - 1.0, DEBUG_COLOR, 1.0);
    draw_text(
        surface,
        &debug_label(tile),
        LABEL_ORIGIN.0,
        LABEL_ORIGIN.1,
        DEBUG_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RasterTile;

    #[test]
    fn test_label_format() {
        assert_eq!(
            debug_label(&TileCoord::new(4, 7, 3)),
            "x: 4, y: 7, z: 3"
        );
    }

    #[test]
    fn test_every_label_char_has_a_glyph() {
        for c in "0123456789xyz:,".chars() {
            assert!(glyph(c).iter().any(|row| *row != 0), "no glyph for {:?}", c);
        }
        assert_eq!(glyph(' '), [0; GLYPH_HEIGHT]);
    }

    #[test]
    fn test_overlay_draws_border_and_label() {
        let mut tile = RasterTile::new(256).unwrap();
        draw_debug_overlay(&mut tile, &TileCoord::new(1, 2, 3));

        // border
        assert!(tile.pixel(0, 128).unwrap().a > 0);
        assert!(tile.pixel(255, 128).unwrap().a > 0);
        assert_eq!(tile.pixel(128, 0).unwrap().r, 0xff);
        // first column of 'x' is lit on its second row
        assert_eq!(tile.pixel(20, 22), Some(DEBUG_COLOR));
        // interior away from the label is untouched
        assert!(tile.pixel(128, 200).unwrap().a == 0);
    }

    #[test]
    fn test_overlay_resets_composite_mode() {
        let mut tile = RasterTile::new(64).unwrap();
        tile.set_composite(CompositeMode::DestinationOut);
        draw_debug_overlay(&mut tile, &TileCoord::new(0, 0, 0));
        assert!(!tile.is_blank());
    }
}
