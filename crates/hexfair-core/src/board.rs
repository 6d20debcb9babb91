//! Board representation and the generation pipeline.
//!
//! This module contains:
//! - Resource types
//! - The finalized `Tile` cell state
//! - The `Board` aggregate, the only object handed to rendering collaborators
//!
//! Generation runs grid → deck → resource placement → number collapse inside
//! one synchronous call. Each call owns its state exclusively; a new board is
//! produced by calling `generate` again.

use crate::collapse::NumberCollapser;
use crate::config::{BoardConfig, GenerateError};
use crate::deck::Deck;
use crate::hex::{BoardSize, HexCoord};
use crate::placer::ResourcePlacer;
use crate::ports::Port;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Resource types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Brick,
    Wood,
    Sheep,
    Wheat,
    Stone,
    /// Desert cells produce nothing and are always numbered 7
    Desert,
}

impl Resource {
    /// All resource types, in deck order
    pub const ALL: [Resource; 6] = [
        Resource::Brick,
        Resource::Wood,
        Resource::Sheep,
        Resource::Wheat,
        Resource::Stone,
        Resource::Desert,
    ];

    /// Position of this resource in [`Resource::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Resource::Brick => 0,
            Resource::Wood => 1,
            Resource::Sheep => 2,
            Resource::Wheat => 3,
            Resource::Stone => 4,
            Resource::Desert => 5,
        }
    }

    /// Lower-case display name
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Brick => "brick",
            Resource::Wood => "wood",
            Resource::Sheep => "sheep",
            Resource::Wheat => "wheat",
            Resource::Stone => "stone",
            Resource::Desert => "desert",
        }
    }

    /// How many same-resource neighbors a cell of this resource may have
    /// under the cluster rule. The scarce resources (and desert) must be
    /// isolated; the plentiful ones may pair up but never form a triple.
    pub fn cluster_tolerance(&self) -> usize {
        match self {
            Resource::Brick | Resource::Stone | Resource::Desert => 0,
            Resource::Wood | Resource::Sheep | Resource::Wheat => 1,
        }
    }
}

/// One finalized cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the hex grid
    pub coord: HexCoord,
    /// Resource produced by this cell
    pub resource: Resource,
    /// Dice number (2-12 excluding 7, or exactly 7 on desert)
    pub number: u8,
}

/// Retry counters from one generation run.
///
/// With all four rule toggles disabled, both counters are 1: any shuffle is
/// acceptable on the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateStats {
    /// Resource placement attempts (1 = first shuffle was valid)
    pub placement_attempts: u32,
    /// Number collapse attempts (1 = first pass completed)
    pub collapse_attempts: u32,
}

/// The finalized board: an ordered sequence of tiles and an ordered sequence
/// of ports. Read-only once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    tiles: Vec<Tile>,
    ports: Vec<Port>,
    stats: GenerateStats,
}

impl Board {
    /// Generate a board with a fresh random seed.
    pub fn generate(config: &BoardConfig) -> Result<Self, GenerateError> {
        let mut rng = rand::thread_rng();
        Self::generate_with_rng(config, &mut rng)
    }

    /// Generate a board reproducibly: the same seed and configuration always
    /// yield the same board.
    pub fn generate_seeded(config: &BoardConfig, seed: u64) -> Result<Self, GenerateError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with_rng(config, &mut rng)
    }

    /// Generate a board with a provided RNG.
    pub fn generate_with_rng<R: Rng>(
        config: &BoardConfig,
        rng: &mut R,
    ) -> Result<Self, GenerateError> {
        config.validate()?;

        let size = config.size();
        let deck = Deck::build(size);
        let ports = Port::catalogue(size);

        // Paired construction: the positional zip already pairs every desert
        // with 7 (see Deck::build).
        let mut tiles: Vec<Tile> = size
            .cells()
            .into_iter()
            .zip(deck.resources.iter().zip(&deck.numbers))
            .map(|(coord, (resource, number))| Tile {
                coord,
                resource: *resource,
                number: *number,
            })
            .collect();

        let placement_attempts =
            ResourcePlacer::from_config(config).place(&mut tiles, &ports, rng)?;
        let collapse_attempts =
            NumberCollapser::from_config(config).solve(&mut tiles, &deck.numbers, rng)?;

        debug!(
            "generated {:?} board in {placement_attempts} placement and \
             {collapse_attempts} collapse attempt(s)",
            size
        );

        Ok(Self {
            size,
            tiles,
            ports,
            stats: GenerateStats {
                placement_attempts,
                collapse_attempts,
            },
        })
    }

    /// The board size this board was generated for
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// All tiles, in the grid's deterministic enumeration order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// All ports, in catalogue order
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Retry counters from the generation run
    pub fn stats(&self) -> GenerateStats {
        self.stats
    }

    /// Look up a tile by coordinate
    pub fn tile_at(&self, coord: HexCoord) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.coord == coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_standard_board() {
        let board = Board::generate_seeded(&BoardConfig::default(), 42).unwrap();
        assert_eq!(board.size(), BoardSize::Standard);
        assert_eq!(board.tiles().len(), 19);
        assert_eq!(board.ports().len(), 9);
    }

    #[test]
    fn test_tile_at() {
        let board = Board::generate_seeded(&BoardConfig::default(), 42).unwrap();
        let center = board.tile_at(HexCoord::new(0, 0)).unwrap();
        assert_eq!(center.coord, HexCoord::new(0, 0));
        assert!(board.tile_at(HexCoord::new(9, 9)).is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = BoardConfig {
            max_collapse_attempts: 0,
            ..BoardConfig::default()
        };
        assert!(matches!(
            Board::generate(&config),
            Err(GenerateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_generation_produces_different_boards() {
        let config = BoardConfig::default();
        let first = Board::generate_seeded(&config, 0).unwrap();
        let different = (1..10)
            .any(|seed| Board::generate_seeded(&config, seed).unwrap() != first);
        assert!(different, "every seed produced an identical board");
    }

    #[test]
    fn test_stats_are_recorded() {
        let board = Board::generate_seeded(&BoardConfig::default(), 3).unwrap();
        assert!(board.stats().placement_attempts >= 1);
        assert!(board.stats().collapse_attempts >= 1);
    }
}
