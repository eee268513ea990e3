// Draftable candidates, positions, and price/tier normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier assigned to candidates without a ranking. Lower tiers are better.
pub const UNRANKED_TIER: u32 = 99;

/// Price used when a candidate's price is missing or unusable.
pub const DEFAULT_PRICE: f64 = 1.0;

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Football positions plus the two meta slot labels (FLEX, BENCH).
///
/// Variant order is the canonical roster order, so the derived `Ord` sorts
/// slots the same way the roster displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "FLEX")]
    Flex,
    #[serde(rename = "K")]
    Kicker,
    #[serde(rename = "DEF")]
    Defense,
    #[serde(rename = "BENCH")]
    Bench,
}

impl Position {
    /// Every label in canonical roster order.
    pub const ALL: [Position; 8] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
        Position::Flex,
        Position::Kicker,
        Position::Defense,
        Position::Bench,
    ];

    /// Parse a position label.
    ///
    /// Accepts the canonical labels case-insensitively, plus the common
    /// aliases "DST"/"D/ST" (defense), "PK" (kicker) and "BN"/"BE" (bench).
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "FLEX" => Some(Position::Flex),
            "K" | "PK" => Some(Position::Kicker),
            "DEF" | "DST" | "D/ST" => Some(Position::Defense),
            "BENCH" | "BN" | "BE" => Some(Position::Bench),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Flex => "FLEX",
            Position::Kicker => "K",
            Position::Defense => "DEF",
            Position::Bench => "BENCH",
        }
    }

    /// Whether this is a meta-slot (not a position a candidate can hold).
    pub fn is_meta_slot(&self) -> bool {
        matches!(self, Position::Flex | Position::Bench)
    }

    /// Whether a candidate at this position may fill a FLEX slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(
            self,
            Position::RunningBack | Position::WideReceiver | Position::TightEnd
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Whether a slot labelled `slot` may hold a candidate playing `candidate`.
///
/// FLEX takes RB/WR/TE, BENCH takes any concrete position, everything else
/// needs an exact match.
pub fn slot_accepts(slot: Position, candidate: Position) -> bool {
    match slot {
        Position::Flex => candidate.is_flex_eligible(),
        Position::Bench => !candidate.is_meta_slot(),
        _ => slot == candidate,
    }
}

// ---------------------------------------------------------------------------
// Price normalization
// ---------------------------------------------------------------------------

/// Parse a price that may carry a currency prefix ("$45", " 12 ", "7.5").
///
/// Anything that does not yield a finite, positive number falls back to
/// [`DEFAULT_PRICE`].
pub fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    normalize_price(digits.parse::<f64>().ok())
}

/// Coerce an optional numeric price to a usable value.
pub fn normalize_price(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => DEFAULT_PRICE,
    }
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A draftable entity with its ranking and estimated auction price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable unique identifier.
    pub id: String,
    pub name: String,
    /// Always a concrete position, never FLEX or BENCH.
    pub position: Position,
    #[serde(default)]
    pub team: Option<String>,
    /// Normalized estimated price in dollars.
    pub price: f64,
    /// Ranking bucket, lower is better. `None` means unranked.
    #[serde(default)]
    pub tier: Option<u32>,
    /// Rank within the position. Display only.
    #[serde(default)]
    pub position_rank: Option<u32>,
    #[serde(default)]
    pub projected_points: Option<f64>,
    #[serde(default)]
    pub adp: Option<f64>,
}

impl Candidate {
    /// Create a candidate with the required fields; optional fields start empty.
    pub fn new(id: &str, name: &str, position: Position, price: f64, tier: Option<u32>) -> Self {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            position,
            team: None,
            price: normalize_price(Some(price)),
            tier,
            position_rank: None,
            projected_points: None,
            adp: None,
        }
    }

    /// Tier used for ranking: missing (or zero) tiers count as unranked.
    pub fn effective_tier(&self) -> u32 {
        match self.tier {
            Some(t) if t > 0 => t,
            _ => UNRANKED_TIER,
        }
    }
}
