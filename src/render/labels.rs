//! Atom label pass: decides label content and placement for every atom and
//! records the directional extents later consumed by bond clipping.
//!
//! Must run to completion before any bond is drawn; the bond pass reads the
//! extent table this pass writes.

use std::collections::BTreeSet;

use tiny_skia::Color;

use super::canvas::Canvas;
use super::layout::Layout;
use crate::model::molecule::Molecule;
use crate::model::types::Direction;

const TEXT_COLOR: Color = Color::BLACK;
const STEREO_MARK: &str = "*";

/// Draws all atom labels in ascending index order and finalizes the label
/// extent table in `layout`.
pub(super) fn draw_labels(
    canvas: &mut Canvas<'_>,
    molecule: &Molecule,
    layout: &mut Layout,
    stereocenters: &BTreeSet<usize>,
) {
    let font_size = layout.font_size;
    let base = canvas.metrics(font_size);
    // Baseline offset that vertically centers a glyph on its anchor point.
    let centering = (base.ascent - base.descent) / 2.0;

    layout.reset_labels(molecule.atom_count());

    for (index, atom) in molecule.atoms.iter().enumerate() {
        let cx = layout.transform_x(atom.x);
        let cy = layout.transform_y(atom.y);
        let marked = stereocenters.contains(&index);

        if atom.is_implicit_carbon() {
            // Bare-vertex convention: no glyph, zero extents. A stereo
            // marker is pushed out to the spare side so it cannot be read
            // as a label on the vertex itself.
            if marked {
                let star_width = canvas.text_width(STEREO_MARK, font_size);
                let radius = star_width / 4.0 + font_size / 4.0;
                let (ox, oy) = atom.spare_space.offset();
                let mx = cx + 2.0 * radius * ox;
                let my = cy + 2.0 * radius * oy;
                canvas.draw_text_centered(STEREO_MARK, mx, my + centering, font_size, TEXT_COLOR);
            }
            continue;
        }

        let symbol = atom.element.symbol();
        let half_width = canvas.text_width(symbol, font_size) / 2.0;
        {
            let label = layout.label_mut(index);
            label.left = half_width;
            label.right = half_width;
            label.top = base.ascent / 2.0;
            label.bottom = (base.descent / 2.0 + base.ascent) / 2.0;
        }
        canvas.draw_text_centered(symbol, cx, cy + centering, font_size, TEXT_COLOR);

        if marked {
            let star_width = canvas.text_width(STEREO_MARK, font_size);
            let left = layout.label(index).left;
            canvas.draw_text_centered(
                STEREO_MARK,
                cx - left,
                cy + centering,
                font_size,
                TEXT_COLOR,
            );
            layout.label_mut(index).left += star_width;
        }

        if atom.charge != 0 {
            let text = charge_suffix(atom.charge);
            let charge_size = font_size / 1.5;
            let charge_width = canvas.text_width(&text, charge_size);
            let charge_metrics = canvas.metrics(charge_size);
            let charge_centering = (charge_metrics.ascent - charge_metrics.descent) / 2.0;
            canvas.draw_text_centered(
                &text,
                cx + layout.label(index).right + charge_width / 2.0,
                cy - base.ascent / 3.0 + charge_centering,
                charge_size,
                TEXT_COLOR,
            );
        }

        if atom.hydrogen_count > 0 {
            let count = atom.hydrogen_count;
            let count_width = if count > 1 {
                canvas.text_width(&count.to_string(), font_size / 2.0)
            } else {
                0.0
            };
            let h_width = canvas.text_width("H", font_size);
            let (hx, hy) = match atom.spare_space {
                Direction::Bottom => {
                    layout.label_mut(index).bottom += base.ascent;
                    (cx, cy + base.ascent)
                }
                Direction::Left => {
                    let hx = cx - layout.label(index).left - h_width / 2.0 - count_width;
                    layout.label_mut(index).left += h_width + count_width;
                    (hx, cy)
                }
                Direction::Top => {
                    layout.label_mut(index).top += base.ascent;
                    (cx, cy - base.ascent)
                }
                Direction::Right => {
                    let hx = cx + layout.label(index).right + h_width / 2.0;
                    layout.label_mut(index).right += h_width + count_width;
                    (hx, cy)
                }
            };
            canvas.draw_text_centered("H", hx, hy + centering, font_size, TEXT_COLOR);
            if count > 1 {
                canvas.draw_text_centered(
                    &count.to_string(),
                    hx + h_width / 2.0 + count_width / 2.0,
                    hy + base.ascent / 2.0,
                    font_size / 2.0,
                    TEXT_COLOR,
                );
            }
        }
    }
}

/// Superscript-style charge suffix: "+", "-", "2+", "3-", ...
fn charge_suffix(charge: i32) -> String {
    match charge {
        1 => "+".to_string(),
        -1 => "-".to_string(),
        c if c > 0 => format!("{c}+"),
        c => format!("{}-", -c),
    }
}
