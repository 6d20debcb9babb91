//! Resource placement with validity re-rolling.
//!
//! The placer shuffles the full resource multiset uniformly at random,
//! assigns it positionally to the tiles, and evaluates every enabled rule
//! over all cells and ports. Any violation discards the whole assignment and
//! reshuffles from scratch; there is no local repair. The loop is bounded by
//! the configured attempt budget.

use crate::board::{Resource, Tile};
use crate::config::{BoardConfig, GenerateError};
use crate::hex::HexCoord;
use crate::ports::{Port, PortKind};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Assigns resources to tiles under the cluster and port rules.
#[derive(Debug, Clone)]
pub struct ResourcePlacer {
    cluster_rule: bool,
    port_rule: bool,
    max_attempts: u32,
}

impl ResourcePlacer {
    /// Configure a placer from the board options
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            cluster_rule: config.enforce_resource_clusters,
            port_rule: config.enforce_port_balance,
            max_attempts: config.max_placement_attempts,
        }
    }

    /// Shuffle resources onto the tiles until every enabled rule holds.
    ///
    /// Returns the number of attempts used (1 means the first shuffle was
    /// already valid). The tiles keep the last attempted assignment even on
    /// failure; callers discard the board in that case.
    pub fn place<R: Rng>(
        &self,
        tiles: &mut [Tile],
        ports: &[Port],
        rng: &mut R,
    ) -> Result<u32, GenerateError> {
        let mut deck: Vec<Resource> = tiles.iter().map(|t| t.resource).collect();

        for attempt in 1..=self.max_attempts {
            deck.shuffle(rng);
            for (tile, resource) in tiles.iter_mut().zip(&deck) {
                tile.resource = *resource;
            }

            if self.is_valid(tiles, ports) {
                debug!("resource placement valid after {attempt} attempt(s)");
                return Ok(attempt);
            }
        }

        Err(GenerateError::ResourcePlacementExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Evaluate all enabled rules over the current assignment
    fn is_valid(&self, tiles: &[Tile], ports: &[Port]) -> bool {
        let by_coord: HashMap<HexCoord, Resource> =
            tiles.iter().map(|t| (t.coord, t.resource)).collect();

        (!self.cluster_rule || clusters_ok(tiles, &by_coord))
            && (!self.port_rule || ports_ok(ports, &by_coord))
    }
}

/// Cluster rule: brick, stone, and desert cells tolerate no same-resource
/// neighbor; wheat, wood, and sheep cells tolerate at most one.
fn clusters_ok(tiles: &[Tile], by_coord: &HashMap<HexCoord, Resource>) -> bool {
    tiles.iter().all(|tile| {
        let same = tile
            .coord
            .neighbors()
            .iter()
            .filter(|n| by_coord.get(n) == Some(&tile.resource))
            .count();
        same <= tile.resource.cluster_tolerance()
    })
}

/// Port rule: no cell may be adjacent to a port of its own resource.
/// Generic ports constrain nothing; off-board neighbors are ignored.
fn ports_ok(ports: &[Port], by_coord: &HashMap<HexCoord, Resource>) -> bool {
    ports.iter().all(|port| match port.kind {
        PortKind::Generic => true,
        PortKind::Resource(affinity) => port
            .coord
            .neighbors()
            .iter()
            .all(|n| by_coord.get(n) != Some(&affinity)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::hex::BoardSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fresh_tiles(size: BoardSize) -> Vec<Tile> {
        let deck = Deck::build(size);
        size.cells()
            .into_iter()
            .zip(deck.resources.iter().zip(&deck.numbers))
            .map(|(coord, (resource, number))| Tile {
                coord,
                resource: *resource,
                number: *number,
            })
            .collect()
    }

    fn placer(cluster: bool, port: bool, max_attempts: u32) -> ResourcePlacer {
        ResourcePlacer {
            cluster_rule: cluster,
            port_rule: port,
            max_attempts,
        }
    }

    #[test]
    fn test_no_rules_accepts_first_shuffle() {
        let mut tiles = fresh_tiles(BoardSize::Standard);
        let ports = Port::catalogue(BoardSize::Standard);
        let mut rng = StdRng::seed_from_u64(0);

        let attempts = placer(false, false, 10).place(&mut tiles, &ports, &mut rng);
        assert_eq!(attempts, Ok(1));
    }

    #[test]
    fn test_placement_preserves_resource_multiset() {
        let mut tiles = fresh_tiles(BoardSize::Expanded);
        let ports = Port::catalogue(BoardSize::Expanded);
        let mut rng = StdRng::seed_from_u64(7);

        placer(true, true, 100_000)
            .place(&mut tiles, &ports, &mut rng)
            .expect("expanded placement should succeed");

        let expected = Deck::build(BoardSize::Expanded).resources;
        let mut placed: Vec<Resource> = tiles.iter().map(|t| t.resource).collect();
        let mut expected_sorted = expected;
        placed.sort_by_key(|r| r.index());
        expected_sorted.sort_by_key(|r| r.index());
        assert_eq!(placed, expected_sorted);
    }

    #[test]
    fn test_placement_satisfies_enabled_rules() {
        for seed in 0..10 {
            let mut tiles = fresh_tiles(BoardSize::Standard);
            let ports = Port::catalogue(BoardSize::Standard);
            let mut rng = StdRng::seed_from_u64(seed);

            placer(true, true, 100_000)
                .place(&mut tiles, &ports, &mut rng)
                .expect("standard placement should succeed");

            let by_coord: HashMap<HexCoord, Resource> =
                tiles.iter().map(|t| (t.coord, t.resource)).collect();
            assert!(clusters_ok(&tiles, &by_coord), "cluster rule violated");
            assert!(ports_ok(&ports, &by_coord), "port rule violated");
        }
    }

    #[test]
    fn test_unsatisfiable_board_exhausts_budget() {
        // An all-brick board can never satisfy the cluster rule.
        let mut tiles = fresh_tiles(BoardSize::Standard);
        for tile in tiles.iter_mut() {
            tile.resource = Resource::Brick;
        }
        let mut rng = StdRng::seed_from_u64(0);

        let result = placer(true, false, 25).place(&mut tiles, &[], &mut rng);
        assert_eq!(
            result,
            Err(GenerateError::ResourcePlacementExhausted { attempts: 25 })
        );
    }
}
