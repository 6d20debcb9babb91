//! Command-line front end for the Hexfair board generator.
//!
//! Renders a generated board as an indented text diagram (or JSON with
//! `--json`). Generation failures are reported as errors with a nonzero
//! exit, never a panic; rerunning simply retries with a new seed.

use anyhow::Result;
use clap::Parser;
use hexfair_core::{Board, BoardConfig, PortKind, Resource, Tile};
use log::info;
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[command(name = "hexfair", version, about = "Generate balanced random hex boards")]
struct Cli {
    /// Generate the larger 30-cell board for 5-6 players
    #[arg(long)]
    expanded: bool,

    /// Seed for reproducible boards (random otherwise)
    #[arg(long)]
    seed: Option<u64>,

    /// Allow clusters of same-resource cells
    #[arg(long)]
    allow_resource_clusters: bool,

    /// Allow cells to touch a port of their own resource
    #[arg(long)]
    allow_unbalanced_ports: bool,

    /// Allow adjacent equal numbers and adjacent 6/8 pairs
    #[arg(long)]
    allow_number_clusters: bool,

    /// Allow unrestricted number repeats per resource
    #[arg(long)]
    allow_number_repeats: bool,

    /// Retry budget for resource placement
    #[arg(long, default_value_t = 100_000)]
    max_placement_attempts: u32,

    /// Restart budget for the number solver
    #[arg(long, default_value_t = 10_000)]
    max_collapse_attempts: u32,

    /// Emit the board as JSON instead of a text diagram
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> BoardConfig {
        BoardConfig {
            expanded_board: self.expanded,
            enforce_resource_clusters: !self.allow_resource_clusters,
            enforce_port_balance: !self.allow_unbalanced_ports,
            enforce_number_clusters: !self.allow_number_clusters,
            enforce_number_repeats: !self.allow_number_repeats,
            max_placement_attempts: self.max_placement_attempts,
            max_collapse_attempts: self.max_collapse_attempts,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config();

    let board = match cli.seed {
        Some(seed) => Board::generate_seeded(&config, seed)?,
        None => Board::generate(&config)?,
    };

    let stats = board.stats();
    info!(
        "generated in {} placement and {} collapse attempt(s)",
        stats.placement_attempts, stats.collapse_attempts
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{}", render_text(&board));
    }
    Ok(())
}

/// Two-letter code for the text diagram
fn code(resource: Resource) -> &'static str {
    match resource {
        Resource::Brick => "BR",
        Resource::Wood => "WD",
        Resource::Sheep => "SH",
        Resource::Wheat => "WH",
        Resource::Stone => "ST",
        Resource::Desert => "DS",
    }
}

fn label(tile: &Tile) -> String {
    format!("{}{}", code(tile.resource), tile.number)
}

/// Lay the tiles out row by row; each row shifts half a cell per step of r.
fn render_text(board: &Board) -> String {
    let tiles = board.tiles();
    let min_x = tiles
        .iter()
        .map(|t| 2 * t.coord.q + t.coord.r)
        .min()
        .unwrap_or(0);

    let mut rows: BTreeMap<i32, Vec<&Tile>> = BTreeMap::new();
    for tile in tiles {
        rows.entry(tile.coord.r).or_default().push(tile);
    }

    let mut out = String::new();
    for (_, mut row) in rows {
        row.sort_by_key(|t| t.coord.q);
        let mut line = String::new();
        for tile in row {
            let col = ((2 * tile.coord.q + tile.coord.r - min_x) * 3) as usize;
            while line.len() < col {
                line.push(' ');
            }
            line.push_str(&format!("{:<6}", label(tile)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    for port in board.ports() {
        let terms = match port.kind {
            PortKind::Generic => "any".to_string(),
            PortKind::Resource(resource) => resource.name().to_string(),
        };
        out.push_str(&format!(
            "port ({:>2},{:>2})  {}:1 {:6}  edge {}\n",
            port.coord.q,
            port.coord.r,
            port.kind.rate(),
            terms,
            port.orientation
        ));
    }
    out
}
