use super::types::{Direction, Element};

/// A single atom of a 2D molecular graph.
///
/// Positions are in molecule space (arbitrary units, y increasing upward).
/// The annotation fields drive label rendering: charge and hydrogen count
/// produce superscript/subscript suffixes, `explicit` forces a carbon to be
/// drawn even when the bare-vertex convention would hide it, and
/// `spare_space` says on which side auxiliary glyphs fit without crossing a
/// bond.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub x: f32,
    pub y: f32,
    pub charge: i32,
    pub unpaired: u8,
    pub hydrogen_count: u8,
    pub explicit: bool,
    pub spare_space: Direction,
}

impl Atom {
    pub fn new(element: Element, x: f32, y: f32) -> Self {
        Self {
            element,
            x,
            y,
            charge: 0,
            unpaired: 0,
            hydrogen_count: 0,
            explicit: false,
            spare_space: Direction::default(),
        }
    }

    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_unpaired(mut self, unpaired: u8) -> Self {
        self.unpaired = unpaired;
        self
    }

    pub fn with_hydrogens(mut self, count: u8) -> Self {
        self.hydrogen_count = count;
        self
    }

    pub fn with_spare_space(mut self, direction: Direction) -> Self {
        self.spare_space = direction;
        self
    }

    pub fn shown_explicitly(mut self) -> Self {
        self.explicit = true;
        self
    }

    /// Whether this atom is drawn as a bare vertex: an uncharged carbon with
    /// no unpaired electrons and no explicit-show flag carries no symbol.
    pub fn is_implicit_carbon(&self) -> bool {
        self.element == Element::C && self.charge == 0 && self.unpaired == 0 && !self.explicit
    }
}
