use std::collections::BTreeSet;

/// Per-call rendering options.
///
/// `stereocenters` holds 0-based atom indices to mark with an asterisk.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Target maximum dimension in pixels; the molecule is scaled uniformly
    /// so the tighter axis fits this size.
    pub max_size: u32,
    /// Grid columns, tagged 'A', 'B', ... left to right.
    pub grid_count_x: u32,
    /// Grid rows, tagged '1', '2', ... top to bottom.
    pub grid_count_y: u32,
    /// Whether to draw the checkerboard grid overlay.
    pub draw_grid: bool,
    /// Atoms to mark as stereocenters.
    pub stereocenters: BTreeSet<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_size: 512,
            grid_count_x: 5,
            grid_count_y: 5,
            draw_grid: true,
            stereocenters: BTreeSet::new(),
        }
    }
}
