use crate::domain::coordinate::Move;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::str::FromStr;

/// Chooses among moves the heuristic rates equally. Candidates arrive in
/// scan order.
pub trait TieBreak {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move>;
}

/// Always the first candidate, which keeps the heuristic fully deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanOrder;

impl TieBreak for ScanOrder {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.first().copied()
    }
}

pub struct Shuffled {
    rng: StdRng,
}

impl Shuffled {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Shuffled {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreak for Shuffled {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.choose(&mut self.rng).copied()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreakKind {
    #[default]
    Scan,
    Shuffled,
}

impl TieBreakKind {
    pub fn build(self) -> Box<dyn TieBreak> {
        match self {
            TieBreakKind::Scan => Box::new(ScanOrder),
            TieBreakKind::Shuffled => Box::new(Shuffled::new()),
        }
    }
}

impl FromStr for TieBreakKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(TieBreakKind::Scan),
            "shuffled" | "random" => Ok(TieBreakKind::Shuffled),
            other => Err(format!("unknown tie-break '{}'", other)),
        }
    }
}
