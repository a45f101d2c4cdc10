//! Rendering pipeline for 2D molecule depictions.
//!
//! The pipeline is synchronous and single-threaded per call:
//!
//! 1. [`calculate_layout`] derives canvas size, scale factor, and base font
//!    size from the molecule's bounding box and average bond length.
//! 2. [`render_into`] composites onto one raster surface, in strict order:
//!    grid overlay (if enabled), then every atom label, then every bond.
//!    The order is load-bearing: bond clipping reads the label extents the
//!    label pass writes.
//!
//! Each call owns its [`Layout`] and pixmap exclusively; only the lazily
//! loaded typeface is shared between renders, read-only after first use.

mod bonds;
mod canvas;
mod config;
mod error;
mod grid;
mod labels;
mod layout;

pub use config::RenderOptions;
pub use error::{Axis, Error};
pub use layout::{calculate_layout, LabelBox, Layout};

use log::debug;
use std::time::Instant;
use tiny_skia::{Color, Pixmap};

use crate::model::molecule::Molecule;

/// Renders `molecule` into a premultiplied-RGBA pixmap.
///
/// Computes a fresh [`Layout`] from `options.max_size` and composites the
/// full depiction. The returned pixmap is suitable for PNG encoding via
/// [`Pixmap::save_png`] or raw export via [`Pixmap::data`].
pub fn render(molecule: &Molecule, options: &RenderOptions) -> Result<Pixmap, Error> {
    let mut layout = calculate_layout(molecule, options.max_size)?;
    render_into(molecule, &mut layout, options)
}

/// Renders `molecule` with a caller-supplied layout, re-validating its
/// parameters first. After a successful return, `layout` holds the final
/// label extents of every atom.
pub fn render_into(
    molecule: &Molecule,
    layout: &mut Layout,
    options: &RenderOptions,
) -> Result<Pixmap, Error> {
    if layout.width == 0 || layout.height == 0 {
        return Err(Error::EmptyCanvas {
            width: layout.width,
            height: layout.height,
        });
    }
    if layout.font_size <= 0.0 || layout.scale_factor <= 0.0 {
        return Err(Error::InvalidScale {
            font_size: layout.font_size,
            scale_factor: layout.scale_factor,
        });
    }

    let started = Instant::now();
    let face = canvas::typeface()?;
    let mut pixmap = Pixmap::new(layout.width, layout.height).ok_or(Error::Surface {
        width: layout.width,
        height: layout.height,
    })?;
    pixmap.fill(Color::WHITE);

    {
        let mut canvas = canvas::Canvas::new(&mut pixmap, face);
        if options.draw_grid && options.grid_count_x > 0 && options.grid_count_y > 0 {
            grid::draw_grid(&mut canvas, layout, options);
        }
        labels::draw_labels(&mut canvas, molecule, layout, &options.stereocenters);
        bonds::draw_bonds(&mut canvas, molecule, layout)?;
    }

    debug!(
        "rendered {} atoms, {} bonds in {} ms",
        molecule.atom_count(),
        molecule.bond_count(),
        started.elapsed().as_millis()
    );
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;
    use crate::model::types::{Direction, Element};
    use std::collections::BTreeSet;

    fn make_pair_with_order(order: u8) -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
        mol.atoms.push(Atom::new(Element::C, 1.5, 0.9));
        mol.bonds.push(Bond::new(0, 1, order));
        mol
    }

    fn no_grid() -> RenderOptions {
        RenderOptions {
            draw_grid: false,
            ..RenderOptions::default()
        }
    }

    fn dark_count_near(pixmap: &tiny_skia::Pixmap, cx: f32, cy: f32, radius: i32) -> usize {
        let mut count = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let x = cx as i32 + dx;
                let y = cy as i32 + dy;
                if x >= 0 && y >= 0 {
                    if let Some(p) = pixmap.pixel(x as u32, y as u32) {
                        if p.red() < 128 {
                            count += 1;
                        }
                    }
                }
            }
        }
        count
    }

    #[test]
    fn rendering_is_idempotent() {
        let mol = make_pair_with_order(1);
        let options = RenderOptions::default();
        let first = render(&mol, &options).unwrap();
        let second = render(&mol, &options).unwrap();
        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn degenerate_molecule_never_produces_an_image() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
        mol.atoms.push(Atom::new(Element::C, 1.5, 0.0));
        mol.bonds.push(Bond::new(0, 1, 1));
        assert!(matches!(
            render(&mol, &RenderOptions::default()),
            Err(Error::DegenerateGeometry { axis: Axis::Y })
        ));
    }

    #[test]
    fn bond_orders_one_through_three_render() {
        for order in 1..=3u8 {
            let mol = make_pair_with_order(order);
            assert!(render(&mol, &no_grid()).is_ok(), "order {order}");
        }
    }

    #[test]
    fn invalid_bond_orders_are_rejected() {
        for order in [0u8, 4, 9] {
            let mol = make_pair_with_order(order);
            match render(&mol, &no_grid()) {
                Err(Error::UnsupportedBondOrder { index: 0, order: o }) => assert_eq!(o, order),
                Err(other) => panic!("order {order}: unexpected error {other}"),
                Ok(_) => panic!("order {order}: render unexpectedly succeeded"),
            }
        }
    }

    #[test]
    fn higher_bond_orders_draw_wider_stroke_bands() {
        let options = no_grid();
        let counts: Vec<usize> = [1u8, 3]
            .iter()
            .map(|&order| {
                let mol = make_pair_with_order(order);
                let mut layout = calculate_layout(&mol, 256).unwrap();
                let pixmap = render_into(&mol, &mut layout, &options).unwrap();
                let mx = (layout.transform_x(0.0) + layout.transform_x(1.5)) / 2.0;
                let my = (layout.transform_y(0.0) + layout.transform_y(0.9)) / 2.0;
                dark_count_near(&pixmap, mx, my, 6)
            })
            .collect();
        assert!(
            counts[1] > counts[0],
            "triple bond band ({}) not wider than single ({})",
            counts[1],
            counts[0]
        );
    }

    #[test]
    fn bare_carbon_bond_spans_the_full_center_to_center_distance() {
        // Both labels are invisible with zero extents, so the stroke starts
        // and ends at the raw atom centers.
        let mol = make_pair_with_order(1);
        let mut layout = calculate_layout(&mol, 256).unwrap();
        let pixmap = render_into(&mol, &mut layout, &no_grid()).unwrap();
        for (x, y) in [(0.0f32, 0.0f32), (1.5, 0.9)] {
            let cx = layout.transform_x(x);
            let cy = layout.transform_y(y);
            assert!(
                dark_count_near(&pixmap, cx, cy, 2) > 0,
                "no stroke ink at atom center ({x}, {y})"
            );
        }
    }

    #[test]
    fn explicit_label_insets_the_bond_stroke() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::N, 0.0, 0.0));
        mol.atoms.push(Atom::new(Element::N, 1.5, 0.9));
        mol.bonds.push(Bond::new(0, 1, 1));
        let mut layout = calculate_layout(&mol, 256).unwrap();
        let pixmap = render_into(&mol, &mut layout, &no_grid()).unwrap();
        // The midpoint between the two glyphs carries stroke ink.
        let mx = (layout.transform_x(0.0) + layout.transform_x(1.5)) / 2.0;
        let my = (layout.transform_y(0.0) + layout.transform_y(0.9)) / 2.0;
        assert!(dark_count_near(&pixmap, mx, my, 3) > 0);
        // Both endpoints were pulled in from the centers.
        assert!(layout.label(0).right > 0.0);
        assert!(layout.label(1).left > 0.0);
    }

    #[test]
    fn stereocenter_marker_changes_pixels_but_not_extents() {
        let mut mol = make_pair_with_order(1);
        mol.atoms[0].spare_space = Direction::Right;
        let options = no_grid();
        let marked = RenderOptions {
            stereocenters: BTreeSet::from([0]),
            ..options.clone()
        };
        let mut plain_layout = calculate_layout(&mol, 256).unwrap();
        let plain = render_into(&mol, &mut plain_layout, &options).unwrap();
        let mut marked_layout = calculate_layout(&mol, 256).unwrap();
        let starred = render_into(&mol, &mut marked_layout, &marked).unwrap();
        assert_ne!(plain.data(), starred.data());
        assert_eq!(marked_layout.label(0), plain_layout.label(0));
        assert_eq!(marked_layout.label(0), LabelBox::default());
    }

    #[test]
    fn grid_can_be_disabled() {
        let mol = make_pair_with_order(1);
        let with_grid = render(&mol, &RenderOptions::default()).unwrap();
        let without = render(&mol, &no_grid()).unwrap();
        assert_ne!(with_grid.data(), without.data());
        // Without the grid every non-ink pixel is the white background.
        let corner = without.pixel(1, 1).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 255, 255));
    }

    #[test]
    fn render_into_rejects_zeroed_layout() {
        let mol = make_pair_with_order(1);
        let mut layout = calculate_layout(&mol, 256).unwrap();
        layout.width = 0;
        assert!(matches!(
            render_into(&mol, &mut layout, &no_grid()),
            Err(Error::EmptyCanvas { .. })
        ));
        let mut layout = calculate_layout(&mol, 256).unwrap();
        layout.font_size = 0.0;
        assert!(matches!(
            render_into(&mol, &mut layout, &no_grid()),
            Err(Error::InvalidScale { .. })
        ));
    }
}
