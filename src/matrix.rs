//! The boolean module grid and finder-region geometry.

/// Square grid of dark and light modules, including the quiet zone.
///
/// Row 0 is the top of the symbol. The grid is built once per generation
/// call from the encoder's module list and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    side: usize,
    cells: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from the encoder's row-major dark-module list,
    /// padding it with `border` light modules on every side.
    ///
    /// # Panics
    ///
    /// Panics if `modules.len() != width * width`.
    pub fn with_quiet_zone(modules: &[bool], width: usize, border: usize) -> Self {
        assert_eq!(modules.len(), width * width, "module list must be square");
        let side = width + 2 * border;
        let mut cells = vec![false; side * side];
        for row in 0..width {
            for col in 0..width {
                cells[(row + border) * side + (col + border)] = modules[row * width + col];
            }
        }
        ModuleMatrix { side, cells }
    }

    /// Side length in modules, quiet zone included.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether the module at (row, col) is dark.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.side + col]
    }
}

/// Whether (row, col) falls inside one of the three position-detection
/// corner regions of a symbol with the given side length and quiet-zone
/// border (already clamped).
///
/// Each region is a fixed 7x7 finder zone expanded by the border: top-left,
/// top-right and bottom-left. QR symbols carry no finder pattern at the
/// bottom-right, so there is no fourth region.
pub fn in_finder_region(row: usize, col: usize, side: usize, border: usize) -> bool {
    let top = row < 7 + border;
    let left = col < 7 + border;
    // col > side - (8 + border), written overflow-free
    let right = col + 8 + border > side;
    let bottom = row + 8 + border > side;
    (top && left) || (top && right) || (bottom && left)
}
