//! Integration tests for the Hexfair generation engine.
//!
//! These exercise the full pipeline through `Board::generate_seeded` and
//! check the distribution and adjacency guarantees of finished boards.

use hexfair_core::*;
use std::collections::HashMap;

fn all_rules(expanded: bool) -> BoardConfig {
    BoardConfig {
        expanded_board: expanded,
        ..BoardConfig::default()
    }
}

fn no_rules(expanded: bool) -> BoardConfig {
    BoardConfig {
        expanded_board: expanded,
        enforce_resource_clusters: false,
        enforce_port_balance: false,
        enforce_number_clusters: false,
        enforce_number_repeats: false,
        ..BoardConfig::default()
    }
}

fn resource_counts(board: &Board) -> HashMap<Resource, usize> {
    let mut counts = HashMap::new();
    for tile in board.tiles() {
        *counts.entry(tile.resource).or_insert(0) += 1;
    }
    counts
}

fn numbers_by_coord(board: &Board) -> HashMap<HexCoord, u8> {
    board.tiles().iter().map(|t| (t.coord, t.number)).collect()
}

#[test]
fn test_standard_board_scenario() {
    // All four rule toggles on, seed 0: must terminate and satisfy the
    // standard distribution.
    let board = Board::generate_seeded(&all_rules(false), 0).unwrap();

    assert_eq!(board.tiles().len(), 19);
    assert_eq!(board.ports().len(), 9);

    let counts = resource_counts(&board);
    assert_eq!(counts[&Resource::Brick], 3);
    assert_eq!(counts[&Resource::Wood], 4);
    assert_eq!(counts[&Resource::Sheep], 4);
    assert_eq!(counts[&Resource::Wheat], 4);
    assert_eq!(counts[&Resource::Stone], 3);
    assert_eq!(counts[&Resource::Desert], 1);

    let sevens: Vec<_> = board.tiles().iter().filter(|t| t.number == 7).collect();
    assert_eq!(sevens.len(), 1);
    assert_eq!(sevens[0].resource, Resource::Desert);
}

#[test]
fn test_expanded_board_scenario() {
    let board = Board::generate_seeded(&all_rules(true), 0).unwrap();

    assert_eq!(board.tiles().len(), 30);
    assert_eq!(board.ports().len(), 11);

    let counts = resource_counts(&board);
    assert_eq!(counts[&Resource::Desert], 2);

    let sevens = board.tiles().iter().filter(|t| t.number == 7).count();
    assert_eq!(sevens, 2);

    // Per-resource 6/8 balance: total in {1, 2}, never the same value twice
    for resource in Resource::ALL {
        if resource == Resource::Desert {
            continue;
        }
        let sixes = board
            .tiles()
            .iter()
            .filter(|t| t.resource == resource && t.number == 6)
            .count();
        let eights = board
            .tiles()
            .iter()
            .filter(|t| t.resource == resource && t.number == 8)
            .count();
        assert!(sixes <= 1, "{:?} has {} sixes", resource, sixes);
        assert!(eights <= 1, "{:?} has {} eights", resource, eights);
        assert!(
            (1..=2).contains(&(sixes + eights)),
            "{:?} has {} of 6/8",
            resource,
            sixes + eights
        );
    }
}

#[test]
fn test_resource_multiset_matches_deck() {
    for expanded in [false, true] {
        let deck = Deck::build(if expanded {
            BoardSize::Expanded
        } else {
            BoardSize::Standard
        });
        for seed in 0..10 {
            let board = Board::generate_seeded(&all_rules(expanded), seed).unwrap();
            let counts = resource_counts(&board);
            for resource in Resource::ALL {
                let expected = deck.resources.iter().filter(|r| **r == resource).count();
                assert_eq!(
                    counts.get(&resource).copied().unwrap_or(0),
                    expected,
                    "wrong {:?} count for seed {}",
                    resource,
                    seed
                );
            }
        }
    }
}

#[test]
fn test_desert_cells_are_exactly_the_sevens() {
    for expanded in [false, true] {
        for seed in 0..10 {
            let board = Board::generate_seeded(&all_rules(expanded), seed).unwrap();
            for tile in board.tiles() {
                assert_eq!(
                    tile.resource == Resource::Desert,
                    tile.number == 7,
                    "seed {}: tile {:?}",
                    seed,
                    tile
                );
            }
        }
    }
}

#[test]
fn test_resource_cluster_rule() {
    for expanded in [false, true] {
        for seed in 0..10 {
            let board = Board::generate_seeded(&all_rules(expanded), seed).unwrap();
            let by_coord: HashMap<HexCoord, Resource> = board
                .tiles()
                .iter()
                .map(|t| (t.coord, t.resource))
                .collect();

            for tile in board.tiles() {
                let same = tile
                    .coord
                    .neighbors()
                    .iter()
                    .filter(|n| by_coord.get(n) == Some(&tile.resource))
                    .count();
                assert!(
                    same <= tile.resource.cluster_tolerance(),
                    "seed {}: {:?} at {:?} has {} same-resource neighbors",
                    seed,
                    tile.resource,
                    tile.coord,
                    same
                );
            }
        }
    }
}

#[test]
fn test_number_cluster_rule() {
    for expanded in [false, true] {
        for seed in 0..10 {
            let board = Board::generate_seeded(&all_rules(expanded), seed).unwrap();
            let numbers = numbers_by_coord(&board);

            for tile in board.tiles() {
                for neighbor in tile.coord.neighbors() {
                    let Some(&other) = numbers.get(&neighbor) else {
                        continue;
                    };
                    assert_ne!(
                        tile.number, other,
                        "seed {}: equal numbers touch at {:?}",
                        seed, tile.coord
                    );
                    assert!(
                        !((tile.number == 6 || tile.number == 8) && (other == 6 || other == 8)),
                        "seed {}: 6/8 pair touches at {:?}",
                        seed,
                        tile.coord
                    );
                }
            }
        }
    }
}

#[test]
fn test_standard_number_repeat_rule() {
    for seed in 0..10 {
        let board = Board::generate_seeded(&all_rules(false), seed).unwrap();

        for resource in Resource::ALL {
            if resource == Resource::Desert {
                continue;
            }
            let numbers: Vec<u8> = board
                .tiles()
                .iter()
                .filter(|t| t.resource == resource)
                .map(|t| t.number)
                .collect();

            let mut unique = numbers.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(
                unique.len(),
                numbers.len(),
                "seed {}: repeated number on {:?}",
                seed,
                resource
            );

            let high = numbers.iter().filter(|n| **n == 6 || **n == 8).count();
            assert!(
                high <= 1,
                "seed {}: {:?} carries {} of 6/8",
                seed,
                resource,
                high
            );
        }
    }
}

#[test]
fn test_port_balance_rule() {
    for expanded in [false, true] {
        for seed in 0..10 {
            let board = Board::generate_seeded(&all_rules(expanded), seed).unwrap();
            let by_coord: HashMap<HexCoord, Resource> = board
                .tiles()
                .iter()
                .map(|t| (t.coord, t.resource))
                .collect();

            for port in board.ports() {
                let PortKind::Resource(affinity) = port.kind else {
                    continue;
                };
                for neighbor in port.coord.neighbors() {
                    assert_ne!(
                        by_coord.get(&neighbor),
                        Some(&affinity),
                        "seed {}: {:?} cell touches its own port at {:?}",
                        seed,
                        affinity,
                        port.coord
                    );
                }
            }
        }
    }
}

#[test]
fn test_seeded_generation_is_deterministic() {
    for expanded in [false, true] {
        let config = all_rules(expanded);
        let first = Board::generate_seeded(&config, 1234).unwrap();
        let second = Board::generate_seeded(&config, 1234).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_disabled_rules_accept_first_shuffle() {
    for expanded in [false, true] {
        let board = Board::generate_seeded(&no_rules(expanded), 0).unwrap();
        assert_eq!(board.stats().placement_attempts, 1);
        assert_eq!(board.stats().collapse_attempts, 1);
    }
}

#[test]
fn test_board_survives_json_round_trip() {
    let board = Board::generate_seeded(&all_rules(false), 5).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(board, back);
}

#[test]
fn test_zero_budget_is_an_error() {
    let config = BoardConfig {
        max_placement_attempts: 0,
        ..BoardConfig::default()
    };
    assert!(matches!(
        Board::generate_seeded(&config, 0),
        Err(GenerateError::InvalidConfig(_))
    ));
}
