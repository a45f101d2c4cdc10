//! Error types for the rendering pipeline.
//!
//! All failures are synchronous and surfaced to the immediate caller; the
//! renderer never substitutes a default drawing for bad input.

use thiserror::Error;

/// Coordinate axis of a degenerate molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
        })
    }
}

/// Errors that can occur while rendering a molecule depiction.
#[derive(Debug, Error)]
pub enum Error {
    /// The molecule has zero extent on one axis (single atom, or all atoms
    /// collinear along the other axis). Nothing is drawn.
    #[error("molecule has no {axis} range; a 2D depiction needs extent on both axes")]
    DegenerateGeometry { axis: Axis },

    /// A computed canvas dimension came out as zero.
    #[error("computed canvas is empty: width = {width}, height = {height}")]
    EmptyCanvas { width: u32, height: u32 },

    /// Derived font size or scale factor is not strictly positive.
    #[error("invalid layout parameters: font size = {font_size}, scale factor = {scale_factor}")]
    InvalidScale { font_size: f32, scale_factor: f32 },

    /// A bond carries an order outside {1, 2, 3}. This indicates a
    /// data-model invariant violation upstream and fails the whole render.
    #[error("bond {index} has unsupported order {order}; expected 1, 2, or 3")]
    UnsupportedBondOrder { index: usize, order: u8 },

    /// The bundled typeface could not be loaded. Startup-class: every
    /// render in this process will fail the same way.
    #[error("failed to load bundled typeface: {0}")]
    Typeface(String),

    /// The raster surface could not be allocated.
    #[error("failed to allocate {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },
}
