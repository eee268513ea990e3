// Roster construction and slot occupancy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::candidate::{slot_accepts, Candidate, Position};

/// Slot counts of the standard 14-slot roster, in canonical order.
pub const STANDARD_SHAPE: [(Position, usize); 8] = [
    (Position::Quarterback, 1),
    (Position::RunningBack, 2),
    (Position::WideReceiver, 2),
    (Position::TightEnd, 1),
    (Position::Flex, 1),
    (Position::Kicker, 1),
    (Position::Defense, 1),
    (Position::Bench, 6),
];

/// A candidate committed to a roster slot, either for real or by a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub candidate_id: String,
    pub name: String,
    /// Position the occupant actually plays. `None` for placeholders.
    pub position: Option<Position>,
    pub price: f64,
    pub projected_points: Option<f64>,
    pub tier: Option<u32>,
    pub position_rank: Option<u32>,
    /// True when a scenario build projected this fill; false for real picks.
    pub hypothetical: bool,
}

impl Occupant {
    /// A real draft commitment of `candidate` at the price actually paid.
    pub fn real(candidate: &Candidate, price: f64) -> Self {
        Occupant {
            candidate_id: candidate.id.clone(),
            name: candidate.name.clone(),
            position: Some(candidate.position),
            price,
            projected_points: candidate.projected_points,
            tier: candidate.tier,
            position_rank: candidate.position_rank,
            hypothetical: false,
        }
    }

    /// A scenario-projected fill of `candidate` at `price`.
    pub fn projected(candidate: &Candidate, price: f64) -> Self {
        Occupant {
            hypothetical: true,
            projected_points: Some(candidate.projected_points.unwrap_or(0.0)),
            ..Occupant::real(candidate, price)
        }
    }
}

/// A single slot on a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    /// The position label of this slot. Never changes after construction.
    pub position: Position,
    /// The occupant of this slot, if any.
    pub occupant: Option<Occupant>,
}

impl RosterSlot {
    pub fn is_open(&self) -> bool {
        self.occupant.is_none()
    }
}

/// An ordered sequence of position-typed slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub slots: Vec<RosterSlot>,
}

impl Roster {
    /// Create a roster from a config mapping position labels to slot counts,
    /// e.g. `{"QB": 1, "RB": 2, "BENCH": 6}`.
    ///
    /// Unknown labels are ignored. Slots follow `Position` order,
    /// QB first and BENCH last.
    pub fn new(roster_config: &HashMap<String, usize>) -> Self {
        let mut slots: Vec<RosterSlot> = Vec::new();

        for (pos_str, &count) in roster_config {
            if let Some(pos) = Position::from_str_pos(pos_str) {
                for _ in 0..count {
                    slots.push(RosterSlot {
                        position: pos,
                        occupant: None,
                    });
                }
            }
        }

        slots.sort_by_key(|s| s.position);

        Roster { slots }
    }

    /// The canonical 14-slot roster: QB, 2 RB, 2 WR, TE, FLEX, K, DEF, 6 BENCH.
    pub fn standard() -> Self {
        let slots = STANDARD_SHAPE
            .iter()
            .flat_map(|&(position, count)| {
                std::iter::repeat_with(move || RosterSlot {
                    position,
                    occupant: None,
                })
                .take(count)
            })
            .collect();
        Roster { slots }
    }

    /// Index of the first open slot labelled `pos`.
    pub fn first_open_slot(&self, pos: Position) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.position == pos && s.is_open())
    }

    /// Number of open slots labelled `pos`.
    pub fn open_slots_at(&self, pos: Position) -> usize {
        self.slots
            .iter()
            .filter(|s| s.position == pos && s.is_open())
            .count()
    }

    /// Number of slots labelled `pos`, open or filled.
    pub fn slots_at(&self, pos: Position) -> usize {
        self.slots.iter().filter(|s| s.position == pos).count()
    }

    /// Total number of open slots.
    pub fn open_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_open()).count()
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_open()).count()
    }

    /// Total number of slots.
    pub fn total_count(&self) -> usize {
        self.slots.len()
    }

    /// Distinct slot labels present on this roster, in roster order.
    pub fn positions(&self) -> Vec<Position> {
        let mut seen: Vec<Position> = Vec::new();
        for slot in &self.slots {
            if !seen.contains(&slot.position) {
                seen.push(slot.position);
            }
        }
        seen
    }

    /// All occupants in roster order.
    pub fn occupants(&self) -> impl Iterator<Item = &Occupant> {
        self.slots.iter().filter_map(|s| s.occupant.as_ref())
    }

    /// Occupants that are real draft commitments.
    pub fn real_occupants(&self) -> impl Iterator<Item = &Occupant> {
        self.occupants().filter(|o| !o.hypothetical)
    }

    /// Identifiers of every occupant, real or hypothetical.
    pub fn committed_ids(&self) -> impl Iterator<Item = &str> {
        self.occupants().map(|o| o.candidate_id.as_str())
    }

    /// Sum of prices of the hypothetical occupants.
    pub fn hypothetical_spend(&self) -> f64 {
        self.occupants()
            .filter(|o| o.hypothetical)
            .map(|o| o.price)
            .sum()
    }

    /// Sum of prices of the real occupants.
    pub fn real_spend(&self) -> f64 {
        self.real_occupants().map(|o| o.price).sum()
    }

    /// Sum of projected points across every occupant.
    pub fn projected_points(&self) -> f64 {
        self.occupants()
            .filter_map(|o| o.projected_points)
            .sum()
    }

    /// Whether a candidate already occupies a slot.
    pub fn has_candidate(&self, candidate_id: &str) -> bool {
        self.committed_ids().any(|id| id == candidate_id)
    }

    /// Record a real draft commitment.
    ///
    /// The candidate goes into the first open slot (in roster order) whose
    /// label equals `roster_position` (defaulting to the candidate's own
    /// position), or is FLEX and the candidate is flex-eligible, or is BENCH.
    ///
    /// Returns `true` if the candidate was placed, `false` if no slot is open
    /// for it or it is already on the roster.
    pub fn commit_real(
        &mut self,
        candidate: &Candidate,
        price: f64,
        roster_position: Option<Position>,
    ) -> bool {
        if self.has_candidate(&candidate.id) {
            return false;
        }
        let requested = roster_position.unwrap_or(candidate.position);

        let slot = self.slots.iter_mut().find(|s| {
            s.is_open()
                && (s.position == requested
                    || (s.position == Position::Flex && candidate.position.is_flex_eligible())
                    || (s.position == Position::Bench && slot_accepts(Position::Bench, candidate.position)))
        });

        match slot {
            Some(slot) => {
                slot.occupant = Some(Occupant::real(candidate, price));
                true
            }
            None => false,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::standard()
    }
}
