//! Number assignment via constrained random collapse with propagation.
//!
//! Each attempt owns a fresh solver context: per-cell option sets over the
//! number domain, collapsed flags, an availability pool (the number multiset
//! minus the 7s reserved for deserts), and per-resource bookkeeping for the
//! repeat rule. Cells collapse one at a time, most-constrained first, and
//! every collapse strikes options from the cells it constrains. An emptied
//! option set aborts the attempt; there is no backtracking, since option sets
//! mutate many cells per step and a cheap undo would amount to snapshotting.
//! Whole-attempt restart is simpler and fast at these board sizes.

use crate::board::{Resource, Tile};
use crate::config::{BoardConfig, GenerateError};
use crate::hex::HexCoord;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Numbers assignable to non-desert cells
const NUMBER_DOMAIN: [u8; 10] = [2, 3, 4, 5, 6, 8, 9, 10, 11, 12];

/// Assigns numbers to tiles under the cluster and repeat rules.
#[derive(Debug, Clone)]
pub struct NumberCollapser {
    cluster_rule: bool,
    repeat_rule: bool,
    expanded: bool,
    max_attempts: u32,
}

impl NumberCollapser {
    /// Configure a collapser from the board options
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            cluster_rule: config.enforce_number_clusters,
            repeat_rule: config.enforce_number_repeats,
            expanded: config.expanded_board,
            max_attempts: config.max_collapse_attempts,
        }
    }

    /// Assign a number to every tile, restarting the whole collapse on dead
    /// ends. Desert tiles are pinned to 7; `deck_numbers` must be the paired
    /// deck from [`crate::deck::Deck::build`]. Returns the attempts used.
    pub fn solve<R: Rng>(
        &self,
        tiles: &mut [Tile],
        deck_numbers: &[u8],
        rng: &mut R,
    ) -> Result<u32, GenerateError> {
        let index: HashMap<HexCoord, usize> = tiles
            .iter()
            .enumerate()
            .map(|(i, t)| (t.coord, i))
            .collect();
        let neighbors: Vec<Vec<usize>> = tiles
            .iter()
            .map(|t| {
                t.coord
                    .neighbors()
                    .iter()
                    .filter_map(|n| index.get(n).copied())
                    .collect()
            })
            .collect();

        for attempt in 1..=self.max_attempts {
            if let Some(numbers) = self.try_collapse(tiles, deck_numbers, &neighbors, rng) {
                for (tile, number) in tiles.iter_mut().zip(numbers) {
                    tile.number = number;
                }
                debug!("number collapse succeeded after {attempt} attempt(s)");
                return Ok(attempt);
            }
        }

        Err(GenerateError::NumberCollapseExhausted {
            attempts: self.max_attempts,
        })
    }

    /// One full collapse pass. Returns the cell-ordered numbers on success,
    /// or `None` when propagation empties some option set.
    fn try_collapse<R: Rng>(
        &self,
        tiles: &[Tile],
        deck_numbers: &[u8],
        neighbors: &[Vec<usize>],
        rng: &mut R,
    ) -> Option<Vec<u8>> {
        let n = tiles.len();

        // Availability pool: one slot per number value, 7s stripped
        let mut pool = [0u8; 13];
        for &v in deck_numbers {
            if v != 7 {
                pool[v as usize] += 1;
            }
        }

        let domain: Vec<u8> = NUMBER_DOMAIN
            .iter()
            .copied()
            .filter(|&v| pool[v as usize] > 0)
            .collect();
        let mut options: Vec<Vec<u8>> = vec![domain; n];
        let mut collapsed = vec![false; n];
        let mut numbers = vec![0u8; n];

        let mut placed: [Vec<u8>; 6] = std::array::from_fn(|_| Vec::new());
        let mut repeat_used = [false; 6];

        // Deserts collapse to 7 immediately
        for (i, tile) in tiles.iter().enumerate() {
            if tile.resource == Resource::Desert {
                collapsed[i] = true;
                numbers[i] = 7;
                options[i].clear();
            }
        }

        while let Some(cell) = pick_most_constrained(&options, &collapsed, rng) {
            let value = *options[cell].choose(rng)?;
            collapsed[cell] = true;
            numbers[cell] = value;
            options[cell].clear();

            // Strike a value board-wide once the pool runs out of it
            pool[value as usize] -= 1;
            if pool[value as usize] == 0 {
                for (opts, &done) in options.iter_mut().zip(&collapsed) {
                    if !done {
                        strike(opts, value);
                    }
                }
            }

            if self.cluster_rule {
                for &i in &neighbors[cell] {
                    if collapsed[i] {
                        continue;
                    }
                    strike(&mut options[i], value);
                    // 6 and 8 also exclude each other across an edge
                    if value == 6 {
                        strike(&mut options[i], 8);
                    } else if value == 8 {
                        strike(&mut options[i], 6);
                    }
                }
            }

            if self.repeat_rule {
                self.propagate_repeats(
                    tiles,
                    cell,
                    value,
                    &collapsed,
                    &mut options,
                    &mut placed,
                    &mut repeat_used,
                );
            }

            let dead_end = options
                .iter()
                .zip(&collapsed)
                .any(|(opts, &done)| !done && opts.is_empty());
            if dead_end {
                return None;
            }
        }

        // The floor half of the expanded repeat rule is not expressible as a
        // strike, so it is checked once the pass completes.
        if self.repeat_rule && self.expanded && !high_pair_floor_met(tiles, &numbers) {
            return None;
        }

        Some(numbers)
    }

    /// Repeat rule propagation for one collapsed cell.
    ///
    /// Standard board: numbers are pairwise distinct per resource and each
    /// resource carries at most one 6-or-8 in total.
    /// Expanded board: at most one 6 and one 8 per resource, and one repeated
    /// number is permitted per resource; once a repeat happens, every number
    /// already placed on that resource becomes off-limits there.
    #[allow(clippy::too_many_arguments)]
    fn propagate_repeats(
        &self,
        tiles: &[Tile],
        cell: usize,
        value: u8,
        collapsed: &[bool],
        options: &mut [Vec<u8>],
        placed: &mut [Vec<u8>; 6],
        repeat_used: &mut [bool; 6],
    ) {
        let resource = tiles[cell].resource;
        let ri = resource.index();

        if self.expanded {
            if value == 6 || value == 8 {
                strike_same_resource(tiles, resource, collapsed, options, value);
            }
            let already_placed = placed[ri].contains(&value);
            placed[ri].push(value);
            if already_placed {
                repeat_used[ri] = true;
            }
            if repeat_used[ri] {
                for i in 0..placed[ri].len() {
                    let v = placed[ri][i];
                    strike_same_resource(tiles, resource, collapsed, options, v);
                }
            }
        } else {
            strike_same_resource(tiles, resource, collapsed, options, value);
            if value == 6 || value == 8 {
                strike_same_resource(tiles, resource, collapsed, options, 6);
                strike_same_resource(tiles, resource, collapsed, options, 8);
            }
        }
    }
}

/// Remove one value from an option set
fn strike(options: &mut Vec<u8>, value: u8) {
    options.retain(|&v| v != value);
}

/// Strike a value from every uncollapsed cell of one resource
fn strike_same_resource(
    tiles: &[Tile],
    resource: Resource,
    collapsed: &[bool],
    options: &mut [Vec<u8>],
    value: u8,
) {
    for (i, tile) in tiles.iter().enumerate() {
        if tile.resource == resource && !collapsed[i] {
            strike(&mut options[i], value);
        }
    }
}

/// Among uncollapsed cells, pick one with the fewest remaining options,
/// breaking ties uniformly at random. `None` once everything is collapsed.
fn pick_most_constrained<R: Rng>(
    options: &[Vec<u8>],
    collapsed: &[bool],
    rng: &mut R,
) -> Option<usize> {
    let min = options
        .iter()
        .zip(collapsed)
        .filter(|(_, &done)| !done)
        .map(|(opts, _)| opts.len())
        .min()?;
    let candidates: Vec<usize> = (0..options.len())
        .filter(|&i| !collapsed[i] && options[i].len() == min)
        .collect();
    candidates.choose(rng).copied()
}

/// Expanded-board floor: every non-desert resource carries at least one 6 or 8
fn high_pair_floor_met(tiles: &[Tile], numbers: &[u8]) -> bool {
    Resource::ALL
        .iter()
        .filter(|r| **r != Resource::Desert)
        .all(|r| {
            tiles
                .iter()
                .zip(numbers)
                .any(|(t, &n)| t.resource == *r && (n == 6 || n == 8))
        })
}
