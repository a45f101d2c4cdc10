use log::debug;

use super::error::{Axis, Error};
use crate::model::molecule::Molecule;

/// Pixel extents of a rendered atom label, measured from the atom's
/// transformed center to each edge of the label footprint. All four values
/// are non-negative distances; an invisible label records zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Per-render layout state: canvas geometry plus the label-extent table
/// written by the label pass and read by the bond pass.
///
/// A `Layout` is created per render request via [`calculate_layout`] and
/// discarded afterwards; nothing is shared between renders.
#[derive(Debug, Clone)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub font_size: f32,
    pub scale_factor: f32,
    min_x: f32,
    min_y: f32,
    labels: Vec<LabelBox>,
}

impl Layout {
    /// Molecule-space x to canvas-space pixel x.
    #[inline]
    pub fn transform_x(&self, x: f32) -> f32 {
        self.font_size + self.scale_factor * (x - self.min_x)
    }

    /// Molecule-space y to canvas-space pixel y. Molecule y grows upward,
    /// canvas y downward; this is the single place encoding that flip.
    #[inline]
    pub fn transform_y(&self, y: f32) -> f32 {
        self.height as f32 - self.font_size - self.scale_factor * (y - self.min_y)
    }

    /// Recorded label extents for an atom. Valid only after the label pass
    /// has run for the current render.
    #[inline]
    pub fn label(&self, atom: usize) -> LabelBox {
        self.labels.get(atom).copied().unwrap_or_default()
    }

    /// Discards stale extents and sizes the table for `atom_count` atoms,
    /// all zeroed. Called at the start of every label pass.
    pub(super) fn reset_labels(&mut self, atom_count: usize) {
        self.labels.clear();
        self.labels.resize(atom_count, LabelBox::default());
    }

    #[inline]
    pub(super) fn label_mut(&mut self, atom: usize) -> &mut LabelBox {
        &mut self.labels[atom]
    }
}

/// Derives canvas size, scale factor, and base font size from the
/// molecule's bounding box and average bond length.
///
/// The scale fits the tighter axis into `max_size` while preserving aspect
/// ratio. The font size tracks the average bond length (so labels neither
/// overwhelm nor vanish next to bond strokes) and is clamped to
/// `max_size / 16` for sparse molecules. One font size of padding on every
/// side keeps labels at the extremities on the canvas.
pub fn calculate_layout(molecule: &Molecule, max_size: u32) -> Result<Layout, Error> {
    let bounds = molecule.bounds();
    if bounds.range_x == 0.0 {
        return Err(Error::DegenerateGeometry { axis: Axis::X });
    }
    if bounds.range_y == 0.0 {
        return Err(Error::DegenerateGeometry { axis: Axis::Y });
    }

    let max_size = max_size as f32;
    let scale_factor = (max_size / bounds.range_x).min(max_size / bounds.range_y);
    let font_size = (molecule.average_bond_length() / 1.8 * scale_factor).min(max_size / 16.0);

    let padding = 2 * font_size.round() as u32;
    let width = (bounds.range_x * scale_factor).round() as u32 + padding;
    let height = (bounds.range_y * scale_factor).round() as u32 + padding;

    if width == 0 || height == 0 {
        return Err(Error::EmptyCanvas { width, height });
    }
    if font_size <= 0.0 || scale_factor <= 0.0 {
        return Err(Error::InvalidScale {
            font_size,
            scale_factor,
        });
    }

    debug!(
        "layout: {}x{} px, scale {:.3}, font {:.2} px",
        width, height, scale_factor, font_size
    );

    Ok(Layout {
        width,
        height,
        font_size,
        scale_factor,
        min_x: bounds.min_x,
        min_y: bounds.min_y,
        labels: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;
    use crate::model::types::Element;

    fn make_diagonal_pair() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
        mol.atoms.push(Atom::new(Element::C, 1.5, 0.9));
        mol.bonds.push(Bond::new(0, 1, 1));
        mol
    }

    #[test]
    fn parameters_are_strictly_positive() {
        let layout = calculate_layout(&make_diagonal_pair(), 256).unwrap();
        assert!(layout.width > 0);
        assert!(layout.height > 0);
        assert!(layout.font_size > 0.0);
        assert!(layout.scale_factor > 0.0);
    }

    #[test]
    fn aspect_ratio_is_preserved_up_to_padding() {
        let layout = calculate_layout(&make_diagonal_pair(), 256).unwrap();
        let padding = 2.0 * layout.font_size.round();
        let body_w = layout.width as f32 - padding;
        let body_h = layout.height as f32 - padding;
        // Molecule is 1.5 x 0.9, so the unpadded body keeps that ratio.
        assert!((body_w / body_h - 1.5 / 0.9).abs() < 0.02);
    }

    #[test]
    fn font_size_is_clamped_for_sparse_molecules() {
        let layout = calculate_layout(&make_diagonal_pair(), 256).unwrap();
        assert_eq!(layout.font_size, 16.0);
    }

    #[test]
    fn zero_x_range_is_rejected() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::C, 1.0, 0.0));
        mol.atoms.push(Atom::new(Element::C, 1.0, 1.5));
        mol.bonds.push(Bond::new(0, 1, 1));
        let err = calculate_layout(&mol, 256).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { axis: Axis::X }));
    }

    #[test]
    fn zero_y_range_is_rejected() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
        mol.atoms.push(Atom::new(Element::C, 1.5, 0.0));
        mol.bonds.push(Bond::new(0, 1, 1));
        let err = calculate_layout(&mol, 256).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { axis: Axis::Y }));
    }

    #[test]
    fn single_atom_is_degenerate() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::C, 0.5, 0.5));
        assert!(calculate_layout(&mol, 256).is_err());
    }

    #[test]
    fn bondless_molecule_fails_on_font_size() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
        mol.atoms.push(Atom::new(Element::C, 1.5, 0.9));
        let err = calculate_layout(&mol, 256).unwrap_err();
        assert!(matches!(err, Error::InvalidScale { .. }));
    }

    #[test]
    fn transform_y_is_monotonically_decreasing() {
        let layout = calculate_layout(&make_diagonal_pair(), 256).unwrap();
        let mut previous = f32::INFINITY;
        for step in 0..10 {
            let y = layout.transform_y(step as f32 * 0.1);
            assert!(y < previous);
            previous = y;
        }
    }

    #[test]
    fn transform_maps_minimum_to_padding_edge() {
        let layout = calculate_layout(&make_diagonal_pair(), 256).unwrap();
        assert!((layout.transform_x(0.0) - layout.font_size).abs() < 1e-4);
        let bottom = layout.height as f32 - layout.font_size;
        assert!((layout.transform_y(0.0) - bottom).abs() < 1e-4);
    }

    #[test]
    fn label_table_resets_to_zero() {
        let mut layout = calculate_layout(&make_diagonal_pair(), 256).unwrap();
        layout.reset_labels(2);
        layout.label_mut(1).left = 3.0;
        assert_eq!(layout.label(1).left, 3.0);
        layout.reset_labels(2);
        assert_eq!(layout.label(1), LabelBox::default());
    }
}
