use shared::shared_media::VOICE_NOTE_SRC;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::config::get_asset_url;
use crate::hooks::{use_media_progress, MediaProgress};
use crate::media::MediaPlayer;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct VoiceNoteProps {
    pub on_next: Callback<()>,
}

#[function_component(VoiceNote)]
pub fn voice_note(props: &VoiceNoteProps) -> Html {
    let player = use_memo((), |_| match MediaPlayer::audio() {
        Ok(player) => {
            player.load(&get_asset_url(VOICE_NOTE_SRC));
            Some(player)
        }
        Err(e) => {
            log::error!("{}", e);
            None
        }
    });
    let is_playing = use_state(|| false);
    let has_ended = use_state(|| false);
    let progress = use_media_progress((*player).clone());

    {
        let is_playing = is_playing.clone();
        let has_ended = has_ended.clone();
        use_effect_with((*player).clone(), move |player| {
            let ended = player.as_ref().map(|player| {
                player.on("ended", move |_| {
                    is_playing.set(false);
                    has_ended.set(true);
                })
            });
            let player = player.clone();
            move || {
                drop(ended);
                if let Some(player) = player {
                    player.release();
                }
            }
        });
    }

    let on_toggle = {
        let player = (*player).clone();
        let is_playing = is_playing.clone();
        let has_ended = has_ended.clone();
        let progress = progress.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(player) = player.clone() else {
                return;
            };
            if *is_playing {
                player.pause();
                is_playing.set(false);
                return;
            }
            // Play again from the top once the note has finished
            if *has_ended {
                player.seek(0.0);
                has_ended.set(false);
                progress.set(MediaProgress { current: 0.0, duration: progress.duration });
            }
            let is_playing = is_playing.clone();
            spawn_local(async move {
                match player.play().await {
                    Ok(()) => is_playing.set(true),
                    Err(e) => {
                        log::warn!("{}", e);
                        is_playing.set(false);
                    }
                }
            });
        })
    };

    let percent = if *has_ended { 100.0 } else { progress.percent() };

    html! {
        <GradientBackground gradient={styles::BG_LAVENDER}>
            <div class={styles::SCREEN}>
                <div class={styles::CONTENT}>
                    <h2 class="text-4xl font-pacifico text-pink-600 mb-2">{"A Voice Note 💌"}</h2>
                    <p class={styles::SUBTITLE}>{"Something I wanted you to hear… just you 💗"}</p>

                    <div class={classes!(styles::CARD, "relative", "overflow-hidden")}>
                        <div class="w-32 h-32 rounded-full bg-gradient-to-b from-pink-400 to-pink-500 mx-auto flex items-center justify-center shadow-lg mb-6">
                            <div class="w-24 h-24 rounded-full bg-gradient-to-b from-pink-600 to-pink-700 flex items-center justify-center">
                                <span class={classes!("text-4xl", (*is_playing).then_some("animate-pulse"))}>{"🔊"}</span>
                            </div>
                        </div>

                        <button class={styles::BUTTON_ROUND} onclick={on_toggle} aria-label="Play or pause">
                            { if *is_playing { "⏸" } else { "▶" } }
                        </button>

                        <div class={classes!(styles::PROGRESS_TRACK, "mt-6")}>
                            <div class={styles::PROGRESS_FILL} style={format!("width: {}%", percent)} />
                        </div>
                        <div class="flex justify-between text-xs text-pink-500 mt-2">
                            <span>{progress.current_label()}</span>
                            <span>{progress.duration_label()}</span>
                        </div>
                    </div>

                    <ContinueButton on_next={props.on_next.clone()} />
                </div>
            </div>
        </GradientBackground>
    }
}
