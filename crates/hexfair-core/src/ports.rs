//! Port catalogue.
//!
//! Ports sit on fixed off-board cells around the coast. Each entry binds a
//! coordinate, a resource affinity (or generic), and an orientation index.
//! The positions are hand-authored per board size; there is no generation
//! logic here, a literal table is correct and sufficient.

use crate::board::Resource;
use crate::hex::{BoardSize, HexCoord};
use serde::{Deserialize, Serialize};

/// Trading terms of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortKind {
    /// 3:1 trade, any resource
    Generic,
    /// 2:1 trade for one specific resource
    Resource(Resource),
}

impl PortKind {
    /// The exchange rate for this port
    pub fn rate(&self) -> u32 {
        match self {
            PortKind::Generic => 3,
            PortKind::Resource(_) => 2,
        }
    }
}

/// A trading location bound to one off-board cell.
///
/// Ports never mutate after generation; only their screen projection (out of
/// scope here) changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Off-board cell the port sits on
    pub coord: HexCoord,
    /// Resource affinity, or generic
    pub kind: PortKind,
    /// Which of the two adjacent edges the port faces, counted anti-clockwise.
    /// Opaque to the engine; renderers interpret it.
    pub orientation: i8,
}

impl Port {
    const fn new(q: i32, r: i32, kind: PortKind, orientation: i8) -> Self {
        Self {
            coord: HexCoord::new(q, r),
            kind,
            orientation,
        }
    }

    /// The fixed port layout for a board size.
    pub fn catalogue(size: BoardSize) -> Vec<Port> {
        use PortKind::{Generic, Resource as Of};
        match size {
            BoardSize::Standard => vec![
                Port::new(2, -3, Of(Resource::Sheep), -1),
                Port::new(0, -3, Generic, 0),
                Port::new(-2, -1, Of(Resource::Stone), 1),
                Port::new(-3, 1, Of(Resource::Wheat), 1),
                Port::new(-3, 3, Generic, 2),
                Port::new(-1, 3, Of(Resource::Wood), -3),
                Port::new(1, 2, Of(Resource::Brick), -3),
                Port::new(3, 0, Generic, -2),
                Port::new(3, -2, Generic, -1),
            ],
            BoardSize::Expanded => vec![
                Port::new(2, -4, Of(Resource::Sheep), -1),
                Port::new(0, -4, Generic, 0),
                Port::new(-3, -1, Of(Resource::Stone), 1),
                Port::new(-4, 1, Generic, 2),
                Port::new(-4, 2, Of(Resource::Wheat), 1),
                Port::new(-4, 4, Generic, 2),
                Port::new(-2, 4, Of(Resource::Wood), -3),
                Port::new(0, 3, Of(Resource::Sheep), -2),
                Port::new(1, 2, Of(Resource::Brick), -3),
                Port::new(3, 0, Generic, -2),
                Port::new(3, -2, Generic, -1),
            ],
        }
    }
}
