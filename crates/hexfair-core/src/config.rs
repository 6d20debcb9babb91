//! Generation options and error types.
//!
//! `BoardConfig` is the inbound value object handed to `Board::generate`:
//! board size, the four independent rule toggles, and the attempt budgets
//! bounding the two retry loops. Disabling a rule removes it from both
//! validation and propagation.

use crate::hex::BoardSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options controlling board generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Use the 30-cell board for 5-6 players instead of the 19-cell one
    pub expanded_board: bool,
    /// Forbid clusters of same-resource cells
    pub enforce_resource_clusters: bool,
    /// Forbid cells from touching a port of their own resource
    pub enforce_port_balance: bool,
    /// Forbid adjacent equal numbers and adjacent 6/8 pairs
    pub enforce_number_clusters: bool,
    /// Limit number repeats and 6/8 counts per resource
    pub enforce_number_repeats: bool,
    /// Retry budget for resource placement
    pub max_placement_attempts: u32,
    /// Restart budget for the number collapse solver
    pub max_collapse_attempts: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            expanded_board: false,
            enforce_resource_clusters: true,
            enforce_port_balance: true,
            enforce_number_clusters: true,
            enforce_number_repeats: true,
            max_placement_attempts: 100_000,
            max_collapse_attempts: 10_000,
        }
    }
}

impl BoardConfig {
    /// The board size selected by this configuration
    pub fn size(&self) -> BoardSize {
        if self.expanded_board {
            BoardSize::Expanded
        } else {
            BoardSize::Standard
        }
    }

    /// Reject contradictory or out-of-domain option values.
    ///
    /// The rule toggles are independent booleans, so today this only guards
    /// the attempt budgets.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.max_placement_attempts == 0 {
            return Err(GenerateError::InvalidConfig(
                "max_placement_attempts must be at least 1".into(),
            ));
        }
        if self.max_collapse_attempts == 0 {
            return Err(GenerateError::InvalidConfig(
                "max_collapse_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur during board generation.
///
/// Constraint violations inside a single attempt are expected control flow
/// and never surface here; only budget exhaustion across attempts and bad
/// configuration are reportable. Callers should treat these as "show an
/// error state, allow retry", never as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GenerateError {
    #[error("no valid resource placement found within {attempts} attempts")]
    ResourcePlacementExhausted { attempts: u32 },

    #[error("no valid number assignment found within {attempts} attempts")]
    NumberCollapseExhausted { attempts: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
