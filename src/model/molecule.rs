use super::atom::Atom;

/// A bond between two atoms, referenced by 0-based index into
/// [`Molecule::atoms`].
///
/// The order is kept as the raw integer from the source data (1 = single,
/// 2 = double, 3 = triple). The renderer validates it and rejects anything
/// else; see [`crate::render::Error::UnsupportedBondOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub from: usize,
    pub to: usize,
    pub order: u8,
}

impl Bond {
    pub fn new(from: usize, to: usize, order: u8) -> Self {
        Self { from, to, order }
    }
}

/// Axis-aligned bounding box of a molecule in molecule space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub range_x: f32,
    pub range_y: f32,
}

/// A small molecular graph with 2D depiction coordinates.
///
/// Invariant: bond endpoints index into `atoms`. The renderer indexes
/// directly and does not re-check.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Bounding box over all atom positions. Zero for an empty molecule;
    /// a zero range on either axis makes the molecule undrawable.
    pub fn bounds(&self) -> Bounds {
        let mut atoms = self.atoms.iter();
        let Some(first) = atoms.next() else {
            return Bounds::default();
        };
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for atom in atoms {
            min_x = min_x.min(atom.x);
            max_x = max_x.max(atom.x);
            min_y = min_y.min(atom.y);
            max_y = max_y.max(atom.y);
        }
        Bounds {
            min_x,
            min_y,
            range_x: max_x - min_x,
            range_y: max_y - min_y,
        }
    }

    /// Mean Euclidean length of all bonds, used for font-size heuristics.
    /// Zero when the molecule has no bonds.
    pub fn average_bond_length(&self) -> f32 {
        if self.bonds.is_empty() {
            return 0.0;
        }
        let total: f32 = self
            .bonds
            .iter()
            .map(|bond| {
                let a = &self.atoms[bond.from];
                let b = &self.atoms[bond.to];
                (a.x - b.x).hypot(a.y - b.y)
            })
            .sum();
        total / self.bonds.len() as f32
    }
}
