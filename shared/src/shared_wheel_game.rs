use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::constants::{FULL_TURN_DEGREES, MAX_EXTRA_TURNS, MAX_SPINS, MIN_EXTRA_TURNS};
use crate::result_store::ResultHistory;

/// A wheel segment and what it promises.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Prize {
    pub id: &'static str,
    pub text: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const PRIZES: [Prize; 8] = [
    Prize {
        id: "warm_hug",
        text: "Warm Hug",
        emoji: "🤗",
        color: "#f9a8d4",
        description: "A long hug where I hold you a little tighter than usual… and don't let go first.",
    },
    Prize {
        id: "whisper",
        text: "Whisper Something",
        emoji: "💋",
        color: "#f472b6",
        description: "I lean in close and whisper something that makes you smile (or blush).",
    },
    Prize {
        id: "forehead_kiss",
        text: "Forehead Kiss",
        emoji: "😘",
        color: "#fb7185",
        description: "Soft, slow, reassuring. The kind that makes you feel safe instantly.",
    },
    Prize {
        id: "coffee_date",
        text: "Coffee Date",
        emoji: "☕",
        color: "#fde68a",
        description: "Coffee, eye contact, teasing smiles, and losing track of time.",
    },
    Prize {
        id: "slow_dance",
        text: "Slow Dance",
        emoji: "💃",
        color: "#e879f9",
        description: "No music needed. Just sway, breathe, and forget the world exists.",
    },
    Prize {
        id: "playful_dare",
        text: "Playful Dare",
        emoji: "🔥",
        color: "#fb923c",
        description: "A harmless but flirty dare… you choose how bold it gets 😏",
    },
    Prize {
        id: "movie_cuddle",
        text: "Movie + Cuddle",
        emoji: "🎬",
        color: "#c4b5fd",
        description: "Your movie, my shoulder, shared blanket, zero interruptions.",
    },
    Prize {
        id: "surprise_kiss",
        text: "Surprise Kiss",
        emoji: "💖",
        color: "#f87171",
        description: "Unexpected, gentle, and right when you least expect it.",
    },
];

impl Prize {
    pub fn by_id(id: &str) -> Option<&'static Prize> {
        PRIZES.iter().find(|prize| prize.id == id)
    }
}

/// Where a spin will stop, fixed before the animation starts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinOutcome {
    pub prize_index: usize,
    pub rotation: f64,
}

pub fn segment_degrees(count: usize) -> f64 {
    FULL_TURN_DEGREES / count as f64
}

/// Centre of segment `index`, measured clockwise from the top of the wheel face.
pub fn center_angle(index: usize, count: usize) -> f64 {
    let segment = segment_degrees(count);
    index as f64 * segment + segment / 2.0
}

/// Angle of the wheel face sitting under the fixed top pointer after the face
/// has been rotated clockwise by `rotation` degrees.
pub fn pointer_angle(rotation: f64) -> f64 {
    (-rotation).rem_euclid(FULL_TURN_DEGREES)
}

/// Segment under the pointer for a given rotation.
pub fn prize_index_at(rotation: f64, count: usize) -> usize {
    let index = (pointer_angle(rotation) / segment_degrees(count)).floor() as usize;
    index.min(count - 1)
}

/// Absolute rotation that leaves segment `index` centred under the pointer.
/// The accumulated rotation is first rounded up to a whole turn so the result
/// only depends on the chosen segment, never on where the last spin stopped.
pub fn derive_rotation(prior_rotation: f64, index: usize, count: usize, extra_turns: u32) -> f64 {
    let whole_turns = (prior_rotation / FULL_TURN_DEGREES).ceil() * FULL_TURN_DEGREES;
    whole_turns + extra_turns as f64 * FULL_TURN_DEGREES - center_angle(index, count)
}

/// Represents the current state of the wheel game
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelGame {
    rotation: f64,
    is_spinning: bool,
    pending: Option<usize>,
    last_result: Option<usize>,
    history: ResultHistory<String>,
}

impl Default for WheelGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelGame {
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            is_spinning: false,
            pending: None,
            last_result: None,
            history: ResultHistory::new(MAX_SPINS),
        }
    }

    /// Restores earlier results. Ids that are not in the catalog are dropped.
    pub fn with_history(ids: Vec<String>) -> Self {
        let known: Vec<String> = ids
            .into_iter()
            .filter(|id| Prize::by_id(id).is_some())
            .collect();
        Self {
            history: ResultHistory::from_entries(known, MAX_SPINS),
            ..Self::new()
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn spins_left(&self) -> usize {
        self.history.remaining()
    }

    /// All spins used up: time for the summary.
    pub fn is_final(&self) -> bool {
        self.history.is_full()
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn history_prizes(&self) -> Vec<&'static Prize> {
        self.history
            .entries()
            .iter()
            .filter_map(|id| Prize::by_id(id))
            .collect()
    }

    pub fn last_result(&self) -> Option<&'static Prize> {
        self.last_result.map(|index| &PRIZES[index])
    }

    /// Commits to a prize and the rotation that lands on it. A no-op while a
    /// spin is running or once every spin has been used.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinOutcome> {
        if self.is_spinning || self.spins_left() == 0 {
            return None;
        }

        let prize_index = rng.gen_range(0..PRIZES.len());
        let extra_turns = rng.gen_range(MIN_EXTRA_TURNS..MAX_EXTRA_TURNS);
        let rotation = derive_rotation(self.rotation, prize_index, PRIZES.len(), extra_turns);

        self.rotation = rotation;
        self.is_spinning = true;
        self.pending = Some(prize_index);
        self.last_result = None;

        log::debug!("Spinning to {} ({}°)", PRIZES[prize_index].id, rotation);
        Some(SpinOutcome { prize_index, rotation })
    }

    /// Called once the spin animation has finished; reveals the committed prize
    /// and records it.
    pub fn complete_spin(&mut self) -> Option<&'static Prize> {
        if !self.is_spinning {
            return None;
        }
        self.is_spinning = false;
        let index = self.pending.take()?;
        self.last_result = Some(index);
        let prize = &PRIZES[index];
        self.history.push(prize.id.to_string());
        Some(prize)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_coffee_date_example() {
        let count = PRIZES.len();
        assert_eq!(segment_degrees(count), 45.0);
        assert_eq!(PRIZES[3].text, "Coffee Date");
        assert_eq!(center_angle(3, count), 157.5);

        for turns in MIN_EXTRA_TURNS..MAX_EXTRA_TURNS {
            let target = derive_rotation(0.0, 3, count, turns);
            assert_eq!(target, turns as f64 * 360.0 - 157.5);
            let landed = pointer_angle(target);
            assert!((135.0..180.0).contains(&landed), "landed at {}", landed);
            assert_eq!(prize_index_at(target, count), 3);
        }
    }

    #[test]
    fn test_derived_rotation_lands_on_every_segment_from_any_start() {
        for count in [3usize, 5, 7, 8, 12] {
            for prior in [0.0, 12.5, 202.5, 1642.5, 3599.9] {
                for index in 0..count {
                    let target = derive_rotation(prior, index, count, 4);
                    assert!(target > prior);
                    assert_eq!(prize_index_at(target, count), index);
                    assert!((pointer_angle(target) - center_angle(index, count)).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_spin_commits_then_reveals_same_prize() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = WheelGame::new();
        let outcome = game.start_spin(&mut rng).unwrap();
        assert!(game.is_spinning());
        assert!(game.last_result().is_none());
        assert_eq!(game.rotation(), outcome.rotation);

        let prize = game.complete_spin().unwrap();
        assert_eq!(prize, &PRIZES[outcome.prize_index]);
        assert_eq!(prize_index_at(outcome.rotation, PRIZES.len()), outcome.prize_index);
        assert_eq!(game.history(), &[prize.id.to_string()]);
        assert_eq!(game.spins_left(), 2);
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = WheelGame::new();
        let first = game.start_spin(&mut rng).unwrap();
        assert!(game.start_spin(&mut rng).is_none());
        assert_eq!(game.rotation(), first.rotation);
        assert!(game.complete_spin().is_some());
        assert!(game.complete_spin().is_none());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_three_spins_then_final() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = WheelGame::new();
        for _ in 0..MAX_SPINS {
            let outcome = game.start_spin(&mut rng).unwrap();
            let prize = game.complete_spin().unwrap();
            assert_eq!(prize.id, PRIZES[prize_index_at(outcome.rotation, PRIZES.len())].id);
        }
        assert!(game.is_final());
        assert_eq!(game.spins_left(), 0);
        let rotation = game.rotation();
        assert!(game.start_spin(&mut rng).is_none());
        assert_eq!(game.rotation(), rotation);
        assert_eq!(game.history_prizes().len(), MAX_SPINS);
    }

    #[test]
    fn test_reset_clears_history_and_rotation() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut game = WheelGame::new();
        for _ in 0..MAX_SPINS {
            game.start_spin(&mut rng);
            game.complete_spin();
        }
        game.reset();
        assert_eq!(game.rotation(), 0.0);
        assert!(game.history().is_empty());
        assert_eq!(game.spins_left(), MAX_SPINS);

        let outcome = game.start_spin(&mut rng).unwrap();
        assert!(outcome.rotation >= MIN_EXTRA_TURNS as f64 * 360.0 - 360.0);
        assert!(outcome.rotation < MAX_EXTRA_TURNS as f64 * 360.0);
    }

    #[test]
    fn test_with_history_filters_unknown_and_caps() {
        let game = WheelGame::with_history(vec![
            "warm_hug".to_string(),
            "free_car".to_string(),
            "slow_dance".to_string(),
            "whisper".to_string(),
            "coffee_date".to_string(),
        ]);
        assert_eq!(game.history(), &["warm_hug", "slow_dance", "whisper"]);
        assert!(game.is_final());
    }
}
