//! Resource and number decks.
//!
//! `Deck::build` returns the two multisets for a board size as a *paired*
//! construction: the number deck gets a 7 inserted at the ordinal position of
//! each desert in the resource deck, so a plain positional zip of
//! (resource, number) already pairs every desert with 7 before any shuffling.
//! The collapse solver relies on this when it strips 7s from its availability
//! pool and pre-collapses desert cells; do not build the two decks
//! independently.

use crate::board::Resource;
use crate::hex::BoardSize;

/// The cell-ordered resource and number multisets for one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// One resource per cell, deserts last
    pub resources: Vec<Resource>,
    /// One number per cell, 7s aligned with the desert ordinals
    pub numbers: Vec<u8>,
}

impl Deck {
    /// Build the decks for a board size.
    ///
    /// Counts are a fixed board-size parameter, not derived:
    /// standard 3/4/4/4/3 plus 1 desert, expanded 5/6/6/6/5 plus 2 deserts.
    pub fn build(size: BoardSize) -> Self {
        let x = match size {
            BoardSize::Standard => 0,
            BoardSize::Expanded => 1,
        };

        let mut resources = Vec::with_capacity(size.cell_count());
        for (resource, count) in [
            (Resource::Brick, 3 + 2 * x),
            (Resource::Wood, 4 + 2 * x),
            (Resource::Sheep, 4 + 2 * x),
            (Resource::Wheat, 4 + 2 * x),
            (Resource::Stone, 3 + 2 * x),
            (Resource::Desert, 1 + x),
        ] {
            resources.extend(std::iter::repeat(resource).take(count));
        }

        let mut numbers = Vec::with_capacity(size.cell_count());
        for _ in 0..(1 + x) {
            numbers.extend_from_slice(&[2, 12]);
        }
        for _ in 0..(2 + x) {
            numbers.extend_from_slice(&[3, 4, 5, 6, 8, 9, 10, 11]);
        }

        // Pin deserts to 7 by ordinal insertion. Ascending order keeps every
        // earlier insertion's alignment intact.
        let desert_ordinals: Vec<usize> = resources
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == Resource::Desert)
            .map(|(i, _)| i)
            .collect();
        for i in desert_ordinals {
            numbers.insert(i, 7);
        }

        Self { resources, numbers }
    }
}
