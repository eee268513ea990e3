// Roster-building scenarios: static strategy configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candidate::Position;

/// Which build algorithm a scenario runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "stars-scrubs")]
    StarsAndScrubs,
    #[serde(rename = "depth-build")]
    Depth,
}

impl StrategyKind {
    pub fn from_str_kind(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "balanced" => Some(StrategyKind::Balanced),
            "stars-scrubs" | "stars-and-scrubs" => Some(StrategyKind::StarsAndScrubs),
            "depth-build" | "depth" => Some(StrategyKind::Depth),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Balanced => "balanced",
            StrategyKind::StarsAndScrubs => "stars-scrubs",
            StrategyKind::Depth => "depth-build",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named strategy with its narrative and budget weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: StrategyKind,
    /// Narrative bullet points shown alongside the scenario.
    pub strategy: Vec<String>,
    /// Relative spending weight per slot label. Only the ratios matter.
    pub budget_allocation: BTreeMap<Position, f64>,
    /// Rough weekly points estimate for the finished roster, display only.
    pub projected_points: Option<f64>,
}

impl Scenario {
    /// Weight configured for `pos`, zero when absent.
    pub fn weight(&self, pos: Position) -> f64 {
        self.budget_allocation.get(&pos).copied().unwrap_or(0.0)
    }

    /// Sum of every configured weight.
    pub fn total_weight(&self) -> f64 {
        self.budget_allocation.values().sum()
    }
}

fn allocation(weights: [f64; 8]) -> BTreeMap<Position, f64> {
    Position::ALL.iter().copied().zip(weights).collect()
}

fn bullets(points: &[&str]) -> Vec<String> {
    points.iter().map(|s| s.to_string()).collect()
}

/// The three stock scenarios: balanced, stars-and-scrubs, depth.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "balanced".into(),
            name: "Balanced Build".into(),
            description: "Even distribution across all positions".into(),
            kind: StrategyKind::Balanced,
            strategy: bullets(&[
                "Spend $35-40 on QB",
                "Allocate $80-90 to RBs",
                "Allocate $70-80 to WRs",
                "Mid-tier TE for $15-20",
            ]),
            //                 QB    RB    WR    TE   FLEX  K    DEF  BENCH
            budget_allocation: allocation([18.0, 35.0, 30.0, 8.0, 5.0, 1.0, 1.0, 2.0]),
            projected_points: Some(165.2),
        },
        Scenario {
            id: "stars-scrubs".into(),
            name: "Stars & Scrubs".into(),
            description: "Target 2-3 elite players, fill with value picks".into(),
            kind: StrategyKind::StarsAndScrubs,
            strategy: bullets(&[
                "Target 1-2 premium RBs",
                "Get elite WR1",
                "Fill remaining with $1-3 players",
                "Late-round QB and TE",
            ]),
            budget_allocation: allocation([3.0, 50.0, 35.0, 3.0, 7.0, 1.0, 1.0, 0.0]),
            projected_points: Some(168.7),
        },
        Scenario {
            id: "depth-build".into(),
            name: "Depth Strategy".into(),
            description: "No single player over $35, build deep bench".into(),
            kind: StrategyKind::Depth,
            strategy: bullets(&[
                "No player over $35",
                "Strong bench depth",
                "Target consistency over ceiling",
                "Multiple flex-worthy players",
            ]),
            budget_allocation: allocation([10.0, 30.0, 25.0, 8.0, 10.0, 2.0, 3.0, 12.0]),
            projected_points: Some(162.4),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenarios_cover_every_kind() {
        let scenarios = default_scenarios();
        let kinds: Vec<StrategyKind> = scenarios.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StrategyKind::Balanced,
                StrategyKind::StarsAndScrubs,
                StrategyKind::Depth
            ]
        );
        for s in &scenarios {
            assert_eq!(s.id, s.kind.as_str());
            assert_eq!(s.budget_allocation.len(), 8);
            assert_eq!(s.strategy.len(), 4);
        }
    }

    #[test]
    fn balanced_weights() {
        let balanced = &default_scenarios()[0];
        assert_eq!(balanced.weight(Position::RunningBack), 35.0);
        assert_eq!(balanced.weight(Position::Bench), 2.0);
        assert_eq!(balanced.total_weight(), 100.0);
    }

    #[test]
    fn missing_weight_is_zero() {
        let mut s = default_scenarios().remove(0);
        s.budget_allocation.remove(&Position::Kicker);
        assert_eq!(s.weight(Position::Kicker), 0.0);
    }

    #[test]
    fn kind_parsing() {
        assert_eq!(StrategyKind::from_str_kind("Balanced"), Some(StrategyKind::Balanced));
        assert_eq!(
            StrategyKind::from_str_kind("stars-and-scrubs"),
            Some(StrategyKind::StarsAndScrubs)
        );
        assert_eq!(StrategyKind::from_str_kind("depth"), Some(StrategyKind::Depth));
        assert_eq!(StrategyKind::from_str_kind("zero-rb"), None);
    }
}
