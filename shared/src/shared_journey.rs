use serde::{Serialize, Deserialize};

/// The screens of the journey, in the order they are shown.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Scanner,
    Puzzle,
    VoiceNote,
    ScratchCards,
    BucketList,
    Cassette,
    SpinWheel,
    TimeSinceMet,
    VideoSongs,
    Finale,
}

impl Screen {
    pub const ORDER: [Screen; 11] = [
        Screen::Splash,
        Screen::Scanner,
        Screen::Puzzle,
        Screen::VoiceNote,
        Screen::ScratchCards,
        Screen::BucketList,
        Screen::Cassette,
        Screen::SpinWheel,
        Screen::TimeSinceMet,
        Screen::VideoSongs,
        Screen::Finale,
    ];

    pub fn first() -> Self {
        Screen::Splash
    }

    pub fn position(self) -> usize {
        Self::ORDER.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// The screen after this one; None once the journey is over.
    pub fn next(self) -> Option<Self> {
        Self::ORDER.get(self.position() + 1).copied()
    }

    /// Shown in the browser tab.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Splash => "Welcome",
            Screen::Scanner => "Cuteness Scanner",
            Screen::Puzzle => "Memory Puzzle",
            Screen::VoiceNote => "Voice Note",
            Screen::ScratchCards => "Scratch & Reveal",
            Screen::BucketList => "Bucket List",
            Screen::Cassette => "Our Mixtape",
            Screen::SpinWheel => "Spin the Wheel",
            Screen::TimeSinceMet => "Since We Met",
            Screen::VideoSongs => "Songs For You",
            Screen::Finale => "Forever",
        }
    }
}

pub const STORY_LINES: [&str; 6] = [
    "Hey Beautiful 💖",
    "Welcome to Our Little World 🌏",
    "Where Shinchan brings the fun 😜",
    "And Doraemon brings the dreams 💙",
    "This is our story…",
    "And it's just getting started ✨",
];

/// Splash text that advances line by line and stops on the last one.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct StoryReel {
    index: usize,
    len: usize,
}

impl StoryReel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Moves to the next line. Returns false once the last line is showing.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_linear_and_ends_at_finale() {
        let mut screen = Screen::first();
        let mut visited = vec![screen];
        while let Some(next) = screen.next() {
            visited.push(next);
            screen = next;
        }
        assert_eq!(visited, Screen::ORDER.to_vec());
        assert_eq!(screen, Screen::Finale);
        assert_eq!(Screen::Finale.next(), None);
    }

    #[test]
    fn test_every_screen_has_its_own_title() {
        let mut titles: Vec<&str> = Screen::ORDER.iter().map(|s| s.title()).collect();
        assert!(titles.iter().all(|t| !t.is_empty()));
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Screen::ORDER.len());
    }

    #[test]
    fn test_wheel_follows_cassette_and_precedes_countdown() {
        assert_eq!(Screen::Cassette.next(), Some(Screen::SpinWheel));
        assert_eq!(Screen::SpinWheel.next(), Some(Screen::TimeSinceMet));
        assert_eq!(Screen::Scanner.next(), Some(Screen::Puzzle));
    }

    #[test]
    fn test_story_reel_stops_at_last_line() {
        let mut reel = StoryReel::new(STORY_LINES.len());
        let mut advances = 0;
        while reel.advance() {
            advances += 1;
        }
        assert_eq!(advances, STORY_LINES.len() - 1);
        assert!(reel.is_finished());
        assert_eq!(reel.index(), STORY_LINES.len() - 1);

        reel.jump_to(1);
        assert_eq!(reel.index(), 1);
        reel.jump_to(99);
        assert_eq!(reel.index(), 1);
    }
}
