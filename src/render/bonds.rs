//! Bond pass: clips each bond against the endpoint labels' recorded
//! extents, then draws 1-3 parallel strokes by bond order.
//!
//! Precondition: the label pass has already populated the extent table in
//! [`Layout`] for every atom of the molecule.

use tiny_skia::Color;

use super::canvas::Canvas;
use super::error::Error;
use super::layout::{LabelBox, Layout};
use crate::model::molecule::Molecule;

const BOND_COLOR: Color = Color::BLACK;

/// Java-style signum: zero maps to zero, so an axis-aligned ray never
/// acquires a spurious sideways component.
fn signum(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clips the ray from `(x, y)` toward `(x2, y2)` against the asymmetric
/// bounding box around `(x, y)`, returning the point where the ray exits
/// the box.
///
/// The effective half-extents are the two box sides facing the ray; the
/// ray's absolute angle is compared against the corner angle `atan2(h, w)`
/// to decide whether it exits through the horizontal or vertical edge. Zero
/// extents leave the ray origin unchanged.
pub(super) fn clip_to_label(x: f32, y: f32, x2: f32, y2: f32, ext: LabelBox) -> (f32, f32) {
    let w = if x2 > x { ext.right } else { ext.left };
    let h = if y2 < y { ext.top } else { ext.bottom };
    let corner = h.atan2(w);
    let sig_x = signum(x2 - x);
    let sig_y = signum(y2 - y);
    let ray = (y2 - y).abs().atan2((x2 - x).abs());
    if ray > corner {
        (x + sig_x * h / ray.tan(), y + sig_y * h)
    } else {
        (x + sig_x * w, y + sig_y * w * ray.tan())
    }
}

/// Draws every bond of `molecule` onto the canvas.
pub(super) fn draw_bonds(
    canvas: &mut Canvas<'_>,
    molecule: &Molecule,
    layout: &Layout,
) -> Result<(), Error> {
    for (index, bond) in molecule.bonds.iter().enumerate() {
        let a = &molecule.atoms[bond.from];
        let b = &molecule.atoms[bond.to];
        draw_bond(
            canvas,
            layout,
            layout.transform_x(a.x),
            layout.transform_y(a.y),
            layout.transform_x(b.x),
            layout.transform_y(b.y),
            bond,
            index,
        )?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_bond(
    canvas: &mut Canvas<'_>,
    layout: &Layout,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    bond: &crate::model::molecule::Bond,
    index: usize,
) -> Result<(), Error> {
    let rad = (y2 - y1).atan2(x2 - x1);
    let (bx1, by1) = clip_to_label(x1, y1, x2, y2, layout.label(bond.from));
    let (bx2, by2) = clip_to_label(x2, y2, x1, y1, layout.label(bond.to));

    let stroke = layout.font_size / 12.0;
    let delta = layout.font_size / 6.0;
    let dx = rad.sin() * delta;
    let dy = rad.cos() * delta;

    match bond.order {
        1 => {
            canvas.stroke_line(bx1, by1, bx2, by2, stroke, BOND_COLOR);
        }
        2 => {
            canvas.stroke_line(
                bx1 + dx / 2.0,
                by1 - dy / 2.0,
                bx2 + dx / 2.0,
                by2 - dy / 2.0,
                stroke,
                BOND_COLOR,
            );
            canvas.stroke_line(
                bx1 - dx / 2.0,
                by1 + dy / 2.0,
                bx2 - dx / 2.0,
                by2 + dy / 2.0,
                stroke,
                BOND_COLOR,
            );
        }
        3 => {
            canvas.stroke_line(bx1, by1, bx2, by2, stroke, BOND_COLOR);
            canvas.stroke_line(bx1 + dx, by1 - dy, bx2 + dx, by2 - dy, stroke, BOND_COLOR);
            canvas.stroke_line(bx1 - dx, by1 + dy, bx2 - dx, by2 + dy, stroke, BOND_COLOR);
        }
        order => {
            return Err(Error::UnsupportedBondOrder { index, order });
        }
    }
    Ok(())
}
