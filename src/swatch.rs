//! Rasterises a palette into a grid of color tiles.

use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut},
    rect::Rect,
};
use serde::Deserialize;

use crate::colors::{contrast_ink, hsl_to_rgba};
use crate::error::SwatchError;
use crate::record::ColorRecord;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Largest image `render_palette` will allocate (256 MiB of RGBA).
pub const MAX_PIXELS: u64 = 1 << 26;

/// Geometry of the rendered grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwatchLayout {
    pub columns: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub gap: u32,
    /// Height of the band at the bottom of each tile showing the locally
    /// converted HSL color. Zero hides it.
    pub preview_band: u32,
}

impl Default for SwatchLayout {
    fn default() -> Self {
        Self {
            columns: 10,
            tile_width: 64,
            tile_height: 64,
            gap: 8,
            preview_band: 8,
        }
    }
}

impl SwatchLayout {
    /// Image dimensions needed for `count` tiles, or `None` when the grid would
    /// exceed [`MAX_PIXELS`] or the `i32` coordinate range used for drawing.
    pub fn dimensions(&self, count: usize) -> Option<(u32, u32)> {
        if count == 0 || self.columns == 0 {
            return Some((0, 0));
        }
        let count = u32::try_from(count).ok()?;
        let columns = self.columns.min(count);
        let rows = count.div_ceil(self.columns);
        let width = span(columns, self.tile_width, self.gap)?;
        let height = span(rows, self.tile_height, self.gap)?;

        i32::try_from(width).ok()?;
        i32::try_from(height).ok()?;
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return None;
        }
        Some((width, height))
    }

    /// Top-left corner of tile `index`. Only valid for layouts accepted by
    /// [`SwatchLayout::dimensions`], which bounds every corner by the image size.
    fn origin(&self, index: u32) -> (u32, u32) {
        let column = index % self.columns;
        let row = index / self.columns;
        (
            column * self.tile_width + column * self.gap,
            row * self.tile_height + row * self.gap,
        )
    }
}

/// Length of `n >= 1` tiles of size `tile` separated by `gap`.
fn span(n: u32, tile: u32, gap: u32) -> Option<u32> {
    n.checked_mul(tile)?.checked_add((n - 1).checked_mul(gap)?)
}

/// Renders one tile per record, left to right then top to bottom.
///
/// Each tile is filled with the color reported by the service, framed with the
/// ink that contrasts best with it, and carries a bottom band with the local
/// HSL conversion of the record's `hsl` block so the two can be compared.
/// An empty palette, or a layout with no columns or empty tiles, yields a 0x0 image.
///
/// # Errors
///
/// Returns [`SwatchError::TooLarge`] when the layout does not fit in an image.
pub fn render_palette(
    colors: &[ColorRecord],
    layout: &SwatchLayout,
) -> Result<RgbaImage, SwatchError> {
    if layout.tile_width == 0 || layout.tile_height == 0 {
        return Ok(RgbaImage::new(0, 0));
    }
    let (width, height) = layout
        .dimensions(colors.len())
        .ok_or(SwatchError::TooLarge(colors.len()))?;
    let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
    if width == 0 {
        return Ok(canvas);
    }

    for (index, record) in colors.iter().enumerate() {
        let (x, y) = layout.origin(index as u32);
        let fill = Rgba([record.rgb.r, record.rgb.g, record.rgb.b, 255]);
        let tile = Rect::at(x as i32, y as i32)
            .of_size(layout.tile_width, layout.tile_height);
        draw_filled_rect_mut(&mut canvas, tile, fill);

        let band = layout.preview_band.min(layout.tile_height);
        if band > 0 {
            let preview = hsl_to_rgba(
                record.hsl.h as f32,
                record.hsl.s as f32,
                record.hsl.l as f32,
                255,
            );
            let band_rect = Rect::at(x as i32, (y + layout.tile_height - band) as i32)
                .of_size(layout.tile_width, band);
            draw_filled_rect_mut(&mut canvas, band_rect, preview);
        }

        draw_hollow_rect_mut(&mut canvas, tile, contrast_ink(fill));
    }

    Ok(canvas)
}
