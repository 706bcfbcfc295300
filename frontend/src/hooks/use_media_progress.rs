use shared::shared_media::{format_time, progress_percent};
use web_sys::Event;
use yew::prelude::*;

use crate::media::MediaPlayer;

#[derive(Clone, Copy, PartialEq, Default)]
pub struct MediaProgress {
    pub current: f64,
    pub duration: f64,
}

impl MediaProgress {
    pub fn percent(&self) -> f64 {
        progress_percent(self.current, self.duration)
    }

    pub fn current_label(&self) -> String {
        format_time(self.current)
    }

    pub fn duration_label(&self) -> String {
        format_time(self.duration)
    }
}

/// Tracks `timeupdate` and `loadedmetadata` on `player` while mounted.
#[hook]
pub fn use_media_progress(player: Option<MediaPlayer>) -> UseStateHandle<MediaProgress> {
    let progress = use_state(MediaProgress::default);

    {
        let progress = progress.clone();
        use_effect_with(player, move |player| {
            let listeners = player.as_ref().map(|player| {
                let read = {
                    let player = player.clone();
                    move |_: &Event| {
                        progress.set(MediaProgress {
                            current: player.current_time(),
                            duration: player.duration(),
                        });
                    }
                };
                (
                    player.on("timeupdate", read.clone()),
                    player.on("loadedmetadata", read),
                )
            });

            move || drop(listeners)
        });
    }

    progress
}
