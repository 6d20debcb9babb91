//! Hexfair - balanced random board generation for a hex tile game.
//!
//! This crate generates rule-valid boards: every cell of a hex grid receives
//! a resource and a dice number such that the enabled adjacency and
//! distribution constraints all hold. The pipeline is:
//!
//! 1. [`hex`]: board topology (cell sets, six-neighbor adjacency)
//! 2. [`deck`]: resource and number multisets, deserts paired with 7
//! 3. [`placer`]: resource shuffling with validity re-rolling
//! 4. [`collapse`]: number assignment via propagation-based collapse
//! 5. [`board`]: the finalized aggregate handed to renderers
//!
//! Generation is synchronous and single-threaded; each call owns its state
//! and takes its randomness from a single (optionally seeded) generator, so
//! boards are reproducible. Retry loops are bounded and surface
//! [`GenerateError`] when a budget runs out, never an endless loop.
//!
//! ```
//! use hexfair_core::{Board, BoardConfig};
//!
//! let board = Board::generate_seeded(&BoardConfig::default(), 0).unwrap();
//! assert_eq!(board.tiles().len(), 19);
//! ```

pub mod board;
pub mod collapse;
pub mod config;
pub mod deck;
pub mod hex;
pub mod placer;
pub mod ports;

// Re-export commonly used types
pub use board::{Board, GenerateStats, Resource, Tile};
pub use collapse::NumberCollapser;
pub use config::{BoardConfig, GenerateError};
pub use deck::Deck;
pub use hex::{BoardSize, HexCoord};
pub use placer::ResourcePlacer;
pub use ports::{Port, PortKind};
