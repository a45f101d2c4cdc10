//! Core data structures for 2D molecular depictions.
//!
//! - [`atom`] – Atom with element, depiction coordinates, and label
//!   annotations (charge, hydrogens, spare-space hint).
//! - [`types`] – Periodic table elements and the spare-space direction hint.
//! - [`molecule`] – Complete molecular graphs with bounding-box and
//!   bond-length queries used by the layout calculator.
//!
//! The model is read-only to the renderer: a [`Molecule`] flows into
//! [`crate::render::render`], which derives all mutable per-render state in
//! its own [`crate::render::Layout`].
//!
//! [`Molecule`]: molecule::Molecule

pub mod atom;
pub mod molecule;
pub mod types;
