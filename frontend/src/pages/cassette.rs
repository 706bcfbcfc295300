use std::cell::RefCell;
use std::rc::Rc;

use shared::constants::FADE_STEP;
use shared::shared_media::{Cassette, Transition, VolumeRamp, TRACKS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::config::get_asset_url;
use crate::hooks::use_media_progress;
use crate::media::{Fader, MediaPlayer};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CassettePlayerProps {
    pub on_next: Callback<()>,
}

/// Everything a playback request needs: the deck state, the audio element,
/// its fader and a way to redraw once the element reports back.
#[derive(Clone)]
struct Deck {
    cassette: Rc<RefCell<Cassette>>,
    player: MediaPlayer,
    fader: Fader,
    redraw: UseForceUpdateHandle,
}

impl Deck {
    fn run(&self, transition: Option<Transition>) {
        let Some(transition) = transition else {
            return;
        };
        log::debug!("Cassette transition {:?}", transition);
        match transition {
            Transition::FadeOutThenPause => {
                let deck = self.clone();
                self.fade_out(move || {
                    deck.player.pause();
                    deck.cassette.borrow_mut().paused();
                    deck.redraw.force_update();
                });
            }
            Transition::FadeOutThenLoad(index) => {
                let deck = self.clone();
                self.fade_out(move || deck.load_and_play(index));
            }
            Transition::Load(index) => self.load_and_play(index),
            Transition::Resume => self.play_with_fade_in(),
        }
    }

    fn fade_out<F: FnOnce() + 'static>(&self, then: F) {
        let ramp = VolumeRamp::with_step(self.player.volume(), 0.0, FADE_STEP);
        self.fader.start(self.player.clone(), ramp, then);
    }

    fn load_and_play(&self, index: usize) {
        let Some(track) = TRACKS.get(index) else {
            return;
        };
        self.fader.cancel();
        self.player.load(&get_asset_url(track.src));
        self.cassette.borrow_mut().loaded(index);
        self.redraw.force_update();
        self.play_with_fade_in();
    }

    fn play_with_fade_in(&self) {
        self.fader.cancel();
        self.player.set_volume(0.0);
        let deck = self.clone();
        spawn_local(async move {
            match deck.player.play().await {
                Ok(()) => {
                    deck.cassette.borrow_mut().playing();
                    let ramp = VolumeRamp::with_step(0.0, 1.0, FADE_STEP);
                    deck.fader.start(deck.player.clone(), ramp, || ());
                }
                Err(e) => {
                    log::warn!("{}", e);
                    deck.cassette.borrow_mut().paused();
                }
            }
            deck.redraw.force_update();
        });
    }
}

#[function_component(CassettePlayer)]
pub fn cassette_player(props: &CassettePlayerProps) -> Html {
    let player = use_memo((), |_| match MediaPlayer::audio() {
        Ok(player) => Some(player),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    });
    let cassette = use_mut_ref(Cassette::default);
    let fader = use_memo((), |_| Fader::new());
    let redraw = use_force_update();
    let progress = use_media_progress((*player).clone());

    let deck = (*player).clone().map(|player| Deck {
        cassette: cassette.clone(),
        player,
        fader: (*fader).clone(),
        redraw: redraw.clone(),
    });

    // End of a track rolls on to the next; unmounting silences everything
    {
        let deck = deck.clone();
        use_effect_with((), move |_| {
            let ended = deck.as_ref().map(|deck| {
                let on_ended = deck.clone();
                deck.player.on("ended", move |_| {
                    let transition = on_ended.cassette.borrow_mut().ended();
                    on_ended.run(transition);
                })
            });
            move || {
                drop(ended);
                if let Some(deck) = deck {
                    deck.fader.cancel();
                    deck.player.release();
                }
            }
        });
    }

    let request = |pick: fn(&Cassette) -> Option<Transition>| {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(deck) = &deck {
                let transition = pick(&deck.cassette.borrow());
                deck.run(transition);
            }
        })
    };
    let on_toggle = request(Cassette::toggle);
    let on_prev = request(Cassette::skip_prev);
    let on_next_track = request(Cassette::skip_next);

    let state = *cassette.borrow();
    let current = state.current_track();

    let songs = TRACKS.iter().enumerate().map(|(index, track)| {
        let onclick = {
            let deck = deck.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(deck) = &deck {
                    let transition = deck.cassette.borrow().select(index);
                    deck.run(transition);
                }
            })
        };
        let is_current = state.current() == Some(index);
        html! {
            <button
                key={track.id}
                class={classes!(
                    "w-full",
                    "flex",
                    "items-center",
                    "gap-3",
                    "p-3",
                    "rounded-xl",
                    "text-left",
                    "transition-colors",
                    if is_current { "bg-amber-100 border border-amber-300" } else { "bg-white/60 hover:bg-amber-50" },
                )}
                {onclick}
            >
                <span class="text-xl">{ if is_current && state.is_playing() { "🎶" } else { "📼" } }</span>
                <div>
                    <p class="font-semibold text-amber-900">{track.title}</p>
                    <p class="text-xs italic text-amber-700/80">{track.dedication}</p>
                </div>
            </button>
        }
    });

    html! {
        <GradientBackground gradient={styles::BG_VINTAGE} hearts={8} glyph="✦">
            <div class={styles::SCREEN_SCROLL}>
                <div class={classes!(styles::CONTENT_WIDE, "text-center")}>
                    <h2 class="text-4xl font-dancing text-amber-900 mb-3">{"Our Little Cassette Collection"}</h2>
                    <p class="text-amber-700/80 text-lg font-dancing italic mb-8">
                        {"Every song here was made thinking of you"}
                    </p>

                    <div class="max-w-md mx-auto bg-amber-900/90 rounded-3xl p-6 shadow-2xl text-amber-50 mb-8">
                        <div class="flex justify-center gap-10 mb-4">
                            <div class={classes!("w-16", "h-16", "rounded-full", "border-4", "border-amber-200", state.is_playing().then_some("animate-spin"))} />
                            <div class={classes!("w-16", "h-16", "rounded-full", "border-4", "border-amber-200", state.is_playing().then_some("animate-spin"))} />
                        </div>
                        <p class="font-dancing text-2xl">
                            { current.map(|t| t.title).unwrap_or("Pick a tape…") }
                        </p>
                        if let Some(track) = current {
                            <p class="text-sm italic text-amber-200">{track.dedication}</p>
                        }

                        <div class="w-full h-1.5 bg-amber-800 rounded-full overflow-hidden mt-4">
                            <div class="h-full bg-amber-300" style={format!("width: {}%", progress.percent())} />
                        </div>
                        <div class="flex justify-between text-xs text-amber-200 mt-1">
                            <span>{progress.current_label()}</span>
                            <span>{progress.duration_label()}</span>
                        </div>

                        <div class="flex items-center justify-center gap-6 mt-4">
                            <button class="text-2xl" onclick={on_prev} aria-label="Previous">{"⏮"}</button>
                            <button class={styles::BUTTON_ROUND} onclick={on_toggle} aria-label="Play or pause">
                                { if state.is_playing() { "⏸" } else { "▶" } }
                            </button>
                            <button class="text-2xl" onclick={on_next_track} aria-label="Next">{"⏭"}</button>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 max-w-3xl mx-auto">
                        { for songs }
                    </div>

                    <ContinueButton on_next={props.on_next.clone()} />
                </div>
            </div>
        </GradientBackground>
    }
}
