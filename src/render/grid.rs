use tiny_skia::Color;

use super::canvas::Canvas;
use super::config::RenderOptions;
use super::layout::Layout;

const CELL_LIGHT: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);
const CELL_DARK: (u8, u8, u8) = (0xE0, 0xE0, 0xE0);
const TAG_ON_LIGHT: (u8, u8, u8) = (0xA0, 0xA0, 0xA0);
const TAG_ON_DARK: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

fn opaque((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgba8(r, g, b, 255)
}

/// Two-character tag for a grid cell: column letter then row digit.
pub(super) fn cell_tag(col: u32, row: u32) -> String {
    let letter = char::from_u32('A' as u32 + col).unwrap_or('?');
    let digit = char::from_u32('1' as u32 + row).unwrap_or('?');
    format!("{letter}{digit}")
}

/// Draws the checkerboard background with per-cell tags so a challenge
/// answer can name a grid cell instead of pixel coordinates.
///
/// Tags are sized to at most half the smaller cell dimension and never
/// larger than the molecule's base font size. The tag baseline is offset by
/// the base-size ascent, matching the original depiction exactly.
pub(super) fn draw_grid(canvas: &mut Canvas<'_>, layout: &Layout, options: &RenderOptions) {
    let unit_x = layout.width as f32 / options.grid_count_x as f32;
    let unit_y = layout.height as f32 / options.grid_count_y as f32;
    let tag_size = (unit_x.min(unit_y) / 2.0).min(layout.font_size);

    for col in 0..options.grid_count_x {
        for row in 0..options.grid_count_y {
            let x = col as f32 * unit_x;
            let y = row as f32 * unit_y;
            let fill = if (col + row) % 2 == 0 {
                CELL_LIGHT
            } else {
                CELL_DARK
            };
            canvas.fill_rect(x, y, unit_x, unit_y, opaque(fill));
        }
    }

    let base = canvas.metrics(layout.font_size);
    for col in 0..options.grid_count_x {
        for row in 0..options.grid_count_y {
            let x = col as f32 * unit_x;
            let y = row as f32 * unit_y;
            let color = if (col + row) % 2 == 0 {
                TAG_ON_LIGHT
            } else {
                TAG_ON_DARK
            };
            canvas.draw_text(
                &cell_tag(col, row),
                x + tag_size * 0.25,
                y + base.ascent,
                tag_size,
                opaque(color),
            );
        }
    }
}
