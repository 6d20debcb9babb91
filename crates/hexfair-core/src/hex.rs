//! Hex grid topology using axial coordinates (q, r).
//!
//! This module provides the foundational types for the board:
//! - `HexCoord`: identifies individual cells
//! - `BoardSize`: the two supported board shapes and their cell sets
//!
//! We use axial coordinates because they make neighbor calculations elegant and
//! avoid the wasted space of offset coordinates.

use serde::{Deserialize, Serialize};

/// Axial coordinate for the hex grid.
///
/// In axial coordinates:
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six neighboring hexes, counted anti-clockwise starting from East.
    ///
    /// No bounds filtering is done here: off-board coordinates are legal
    /// results, and callers intersect with the board's actual cell set. Port
    /// adjacency checks rely on this, since ports sit on off-board cells.
    pub fn neighbors(&self) -> [HexCoord; 6] {
        [
            HexCoord::new(self.q + 1, self.r),
            HexCoord::new(self.q, self.r + 1),
            HexCoord::new(self.q - 1, self.r + 1),
            HexCoord::new(self.q - 1, self.r),
            HexCoord::new(self.q, self.r - 1),
            HexCoord::new(self.q + 1, self.r - 1),
        ]
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }
}

/// The two supported board shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BoardSize {
    /// 19-cell board for 3-4 players
    #[default]
    Standard,
    /// 30-cell board for 5-6 players (one extra partial ring)
    Expanded,
}

impl BoardSize {
    /// How far the board extends beyond the standard shape (0 or 1)
    const fn extent(self) -> i32 {
        match self {
            BoardSize::Standard => 0,
            BoardSize::Expanded => 1,
        }
    }

    /// Number of cells on this board
    pub const fn cell_count(self) -> usize {
        match self {
            BoardSize::Standard => 19,
            BoardSize::Expanded => 30,
        }
    }

    /// All cell coordinates for this board, in deterministic row-major order.
    ///
    /// Rows run from north to south; within a row, cells run west to east.
    /// The enumeration order is the positional order the resource and number
    /// decks are zipped against, so it must stay stable.
    pub fn cells(self) -> Vec<HexCoord> {
        let x = self.extent();
        let mut cells = Vec::with_capacity(self.cell_count());
        for r in (-2 - x)..(3 + x) {
            let lo = (-2 - r - x).max(-2 - x);
            let hi = (3 - r).min(3);
            for q in lo..hi {
                cells.push(HexCoord::new(q, r));
            }
        }
        cells
    }
}
