use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub src: &'static str,
    pub dedication: &'static str,
}

pub const TRACKS: [Track; 20] = [
    Track { id: 1, title: "Morning Coffee Thoughts", src: "v1755153190/perfect_fbbzyy.mp3", dedication: "When I think of you waking up" },
    Track { id: 2, title: "Sunset Drive", src: "v1755153091/beautiful_lwxln1.mp3", dedication: "Our imaginary road trips" },
    Track { id: 3, title: "Rainy Window", src: "v1755153187/chirunama_pdvldu.mp3", dedication: "Cozy days with you" },
    Track { id: 4, title: "Stargazing", src: "v1755153187/choosi_ex7eig.mp3", dedication: "Under the night sky together" },
    Track { id: 5, title: "Slow Dance", src: "v1755153185/jabilli_n4gkre.mp3", dedication: "In the kitchen, just us" },
    Track { id: 6, title: "Whispered Dreams", src: "v1755153190/naakosam_y1krrk.mp3", dedication: "Late night conversations" },
    Track { id: 7, title: "Golden Hour", src: "v1755153187/neeve_pc5cfy.mp3", dedication: "When the light hits just right" },
    Track { id: 8, title: "Heart Speaks", src: "v1755153195/ninnuchudagane_lvepgx.mp3", dedication: "Everything I wanted to say" },
    Track { id: 9, title: "Sunday Morning", src: "v1755153190/perfect_fbbzyy.mp3", dedication: "Lazy days, warm blankets" },
    Track { id: 10, title: "Moonlit Walk", src: "v1755153091/beautiful_lwxln1.mp3", dedication: "Hand in hand, no words needed" },
    Track { id: 11, title: "First Hello", src: "v1755153187/chirunama_pdvldu.mp3", dedication: "The moment we met" },
    Track { id: 12, title: "Quiet Joy", src: "v1755153187/choosi_ex7eig.mp3", dedication: "Your smile in my mind" },
    Track { id: 13, title: "Warm Embrace", src: "v1755153185/jabilli_n4gkre.mp3", dedication: "Safe in your arms" },
    Track { id: 14, title: "Tomorrow's Promise", src: "v1755153190/naakosam_y1krrk.mp3", dedication: "All our tomorrows together" },
    Track { id: 15, title: "Gentle Rain", src: "v1755153187/neeve_pc5cfy.mp3", dedication: "Peace in every moment" },
    Track { id: 16, title: "Afternoon Light", src: "v1755153195/ninnuchudagane_lvepgx.mp3", dedication: "The way you glow" },
    Track { id: 17, title: "Forever Starts Now", src: "v1755153190/perfect_fbbzyy.mp3", dedication: "This is just the beginning" },
    Track { id: 18, title: "Home in You", src: "v1755153091/beautiful_lwxln1.mp3", dedication: "Wherever you are" },
    Track { id: 19, title: "Sweet Silence", src: "v1755153187/chirunama_pdvldu.mp3", dedication: "Comfortable quiet with you" },
    Track { id: 20, title: "Love Letter", src: "v1755153187/choosi_ex7eig.mp3", dedication: "Written in melodies" },
];

pub const VOICE_NOTE_SRC: &str = "v1755153187/mine_uw7gyw.mp3";

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct VideoSong {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub thumbnail: &'static str,
    pub src: &'static str,
    pub emotion: &'static str,
}

const ROMANCE_VIDEO: &str = "v1755153590/romance_1_hcb8qa.mp4";

pub const VIDEO_SONGS: [VideoSong; 7] = [
    VideoSong {
        id: 1,
        title: "Every Moment With You",
        artist: "Sung by my heart",
        thumbnail: "https://images.pexels.com/photos/355321/pexels-photo-355321.jpeg?auto=compress&cs=tinysrgb&w=600",
        src: ROMANCE_VIDEO,
        emotion: "This is how you make me feel: cherished, safe, and completely seen.",
    },
    VideoSong {
        id: 2,
        title: "In Your Eyes",
        artist: "A love song for you",
        thumbnail: "https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg?auto=compress&cs=tinysrgb&w=600",
        src: ROMANCE_VIDEO,
        emotion: "Every time you look at me, I understand what forever means.",
    },
    VideoSong {
        id: 3,
        title: "When You Smile",
        artist: "The world stops",
        thumbnail: "https://images.pexels.com/photos/1444080/pexels-photo-1444080.jpeg?auto=compress&cs=tinysrgb&w=600",
        src: ROMANCE_VIDEO,
        emotion: "That quiet moment when you smile is when I know this is real.",
    },
    VideoSong {
        id: 4,
        title: "Hold Me Close",
        artist: "A whisper in the night",
        thumbnail: "https://images.pexels.com/photos/1179804/pexels-photo-1179804.jpeg?auto=compress&cs=tinysrgb&w=600",
        src: ROMANCE_VIDEO,
        emotion: "In your arms is the only place I want to be.",
    },
    VideoSong {
        id: 5,
        title: "A Future With You",
        artist: "Tomorrow's promise",
        thumbnail: "https://images.pexels.com/photos/1590301/pexels-photo-1590301.jpeg?auto=compress&cs=tinysrgb&w=600",
        src: ROMANCE_VIDEO,
        emotion: "I can see it so clearly: a lifetime of moments just like this.",
    },
    VideoSong {
        id: 6,
        title: "All of Me",
        artist: "For you, always",
        thumbnail: "https://images.pexels.com/photos/1040881/pexels-photo-1040881.jpeg?auto=compress&cs=tinysrgb&w=600",
        src: ROMANCE_VIDEO,
        emotion: "Every part of me, everything I am. It all belongs to you.",
    },
    VideoSong {
        id: 7,
        title: "Forever Starts Now",
        artist: "The beginning of us",
        thumbnail: "https://images.pexels.com/photos/1566837/pexels-photo-1566837.jpeg?auto=compress&cs=tinysrgb&w=600",
        src: ROMANCE_VIDEO,
        emotion: "This moment, right here, is the start of everything beautiful.",
    },
];

pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if index == 0 { len - 1 } else { index - 1 }
}

/// Formats seconds as `m:ss`. Unknown durations show as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / duration * 100.0).clamp(0.0, 100.0)
}

/// A selection over a fixed-length list that wraps at both ends.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Playlist {
    len: usize,
    selected: Option<usize>,
}

impl Playlist {
    pub fn new(len: usize) -> Self {
        Self { len, selected: None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) -> Option<usize> {
        let current = self.selected?;
        self.selected = Some(wrap_next(current, self.len));
        self.selected
    }

    pub fn prev(&mut self) -> Option<usize> {
        let current = self.selected?;
        self.selected = Some(wrap_prev(current, self.len));
        self.selected
    }
}

/// What the player has to do with the audio element after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FadeOutThenPause,
    FadeOutThenLoad(usize),
    Load(usize),
    Resume,
}

/// Cassette deck state. Requests only decide the transition; the player
/// reports back through `loaded`, `playing` and `paused` once the element
/// has actually done it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Cassette {
    len: usize,
    current: Option<usize>,
    is_playing: bool,
}

impl Default for Cassette {
    fn default() -> Self {
        Self::new(TRACKS.len())
    }
}

impl Cassette {
    pub fn new(len: usize) -> Self {
        Self { len, current: None, is_playing: false }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&'static Track> {
        self.current.and_then(|index| TRACKS.get(index))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn select(&self, index: usize) -> Option<Transition> {
        if index >= self.len {
            return None;
        }
        Some(match (self.current, self.is_playing) {
            (Some(current), true) if current == index => Transition::FadeOutThenPause,
            (_, true) => Transition::FadeOutThenLoad(index),
            _ => Transition::Load(index),
        })
    }

    pub fn toggle(&self) -> Option<Transition> {
        self.current?;
        Some(if self.is_playing {
            Transition::FadeOutThenPause
        } else {
            Transition::Resume
        })
    }

    pub fn skip_next(&self) -> Option<Transition> {
        let current = self.current?;
        self.select(wrap_next(current, self.len))
    }

    pub fn skip_prev(&self) -> Option<Transition> {
        let current = self.current?;
        self.select(wrap_prev(current, self.len))
    }

    /// End of a track rolls on to the next one.
    pub fn ended(&mut self) -> Option<Transition> {
        self.is_playing = false;
        self.skip_next()
    }

    pub fn loaded(&mut self, index: usize) {
        if index < self.len {
            self.current = Some(index);
            self.is_playing = false;
        }
    }

    pub fn playing(&mut self) {
        if self.current.is_some() {
            self.is_playing = true;
        }
    }

    pub fn paused(&mut self) {
        self.is_playing = false;
    }
}

/// Linear volume ramp toward a target, one fixed step per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRamp {
    current: f64,
    target: f64,
    step: f64,
}

impl VolumeRamp {
    pub fn with_step(from: f64, to: f64, step: f64) -> Self {
        Self {
            current: from.clamp(0.0, 1.0),
            target: to.clamp(0.0, 1.0),
            step: step.abs().max(f64::EPSILON),
        }
    }

    pub fn over(from: f64, to: f64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (duration_ms / tick_ms.max(1)).max(1);
        let step = (to - from).abs() / ticks as f64;
        Self::with_step(from, to, step)
    }

    pub fn volume(&self) -> f64 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current == self.target
    }

    /// Moves one step and returns the new volume. The last step snaps to the
    /// target.
    pub fn tick(&mut self) -> f64 {
        let distance = self.target - self.current;
        if distance.abs() <= self.step {
            self.current = self.target;
        } else {
            self.current += self.step * distance.signum();
        }
        self.current
    }
}
