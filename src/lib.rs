//! Raster depiction of small molecular graphs, annotated with a coordinate
//! grid so a human can reference atoms by grid cell.
//!
//! # Features
//!
//! - **Layout derivation** — Canvas size, uniform scale, and base font size
//!   computed from the molecule's bounding box and average bond length
//! - **Label placement** — Element symbols with charge superscripts,
//!   hydrogen-count suffixes, and stereocenter markers, placed using the
//!   per-atom spare-space hint
//! - **Bond clipping** — Exact ray-rectangle clipping against each label's
//!   asymmetric extents, so strokes never overlap glyphs
//! - **Grid overlay** — Checkerboard background with "A1".."E5"-style cell
//!   tags for visual-challenge use
//!
//! # Quick Start
//!
//! The main entry point is [`render`], which takes a [`Molecule`] and
//! [`RenderOptions`] and produces a premultiplied-RGBA
//! [`Pixmap`](tiny_skia::Pixmap):
//!
//! ```
//! use mol_depict::{render, Atom, Bond, Direction, Element, Molecule, RenderOptions};
//!
//! // Ethanol, in 2D depiction coordinates
//! let mut molecule = Molecule::new();
//! molecule.atoms.push(Atom::new(Element::C, 0.0, 0.0));
//! molecule.atoms.push(Atom::new(Element::C, 1.3, 0.75));
//! molecule.atoms.push(
//!     Atom::new(Element::O, 2.6, 0.0)
//!         .with_hydrogens(1)
//!         .with_spare_space(Direction::Right),
//! );
//! molecule.bonds.push(Bond::new(0, 1, 1));
//! molecule.bonds.push(Bond::new(1, 2, 1));
//!
//! let image = render(&molecule, &RenderOptions::default())?;
//! assert!(image.width() > 0 && image.height() > 0);
//! # Ok::<(), mol_depict::RenderError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] — Molecular graph data structures (read-only to the renderer)
//! - [`render`] — The rendering pipeline and its entry points
//!
//! All indices in this crate are 0-based: bond endpoints index into
//! [`Molecule::atoms`], and [`RenderOptions::stereocenters`] holds 0-based
//! atom indices.

pub mod model;
pub mod render;

pub use model::atom::Atom;
pub use model::molecule::{Bond, Bounds, Molecule};
pub use model::types::{Direction, Element, ParseElementError};

pub use render::{calculate_layout, render, render_into, LabelBox, Layout, RenderOptions};

pub use render::Error as RenderError;
