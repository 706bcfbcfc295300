use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct ScratchCard {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub emoji: &'static str,
}

pub const SCRATCH_CARDS: [ScratchCard; 6] = [
    ScratchCard { id: 1, title: "Warm Hugs", content: "Unlimited hugs whenever you need comfort 🤍", emoji: "🫂" },
    ScratchCard { id: 2, title: "Sweet Date", content: "Ice cream / coffee date, my treat 🍦", emoji: "🍨" },
    ScratchCard { id: 3, title: "Hoodie Claim", content: "You officially own my hoodie now 😌", emoji: "👕" },
    ScratchCard { id: 4, title: "Movie Night", content: "Your pick. Even if I pretend not to be scared 🎬", emoji: "🎥" },
    ScratchCard { id: 5, title: "Late-Night Talk", content: "One no-sleep conversation, just us 🌙", emoji: "🌙" },
    ScratchCard { id: 6, title: "Forever Pass", content: "You get my time, attention & heart, always 💕", emoji: "💖" },
];

/// Which cards have been scratched off.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScratchDeck {
    revealed: Vec<bool>,
}

impl Default for ScratchDeck {
    fn default() -> Self {
        Self::new(SCRATCH_CARDS.len())
    }
}

impl ScratchDeck {
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    /// Reveals the card at `index`. Scratching twice changes nothing.
    pub fn scratch(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cards_needed() {
        let mut deck = ScratchDeck::default();
        for index in 0..SCRATCH_CARDS.len() - 1 {
            assert!(deck.scratch(index));
        }
        assert!(!deck.all_revealed());
        assert!(!deck.scratch(0));
        assert!(!deck.scratch(SCRATCH_CARDS.len()));
        assert!(deck.scratch(SCRATCH_CARDS.len() - 1));
        assert!(deck.all_revealed());
        assert_eq!(deck.revealed_count(), SCRATCH_CARDS.len());
    }
}
