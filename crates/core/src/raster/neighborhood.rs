//! Neighborhood patterns for raster analysis

/// Defines which cells count as adjacent to a center cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// 4-connected: up, down, left, right
    #[default]
    Rook,
    /// 8-connected: the rook cells plus the diagonals
    Queen,
}

impl Neighborhood {
    /// Check if a relative position is within this neighborhood
    pub fn contains(&self, dr: isize, dc: isize) -> bool {
        match self {
            Neighborhood::Rook => (dr.abs() <= 1 && dc == 0) || (dr == 0 && dc.abs() <= 1),
            Neighborhood::Queen => dr.abs() <= 1 && dc.abs() <= 1,
        }
    }

    /// Relative (dr, dc) positions of the neighbors, center excluded
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let mut offsets = Vec::new();

        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr != 0 || dc != 0) && self.contains(dr, dc) {
                    offsets.push((dr, dc));
                }
            }
        }

        offsets
    }
}
