pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod media;
pub mod storage;

use yew::prelude::*;
use shared::shared_journey::Screen;
use crate::pages::{
    bucket_list::BucketListPage,
    cassette::CassettePlayer,
    finale::Finale,
    puzzle::MemoryPuzzle,
    scanner::CutenessScanner,
    scratch_cards::ScratchCards,
    spin_wheel::SpinWheel,
    splash::Splash,
    time_since_met::TimeSinceMet,
    video_songs::VideoSongs,
    voice_note::VoiceNote,
};

#[function_component(App)]
pub fn app() -> Html {
    let screen = use_state(Screen::first);

    let on_next = {
        let screen = screen.clone();
        Callback::from(move |_| {
            match (*screen).next() {
                Some(next) => {
                    log::info!("Moving on to {:?}", next);
                    screen.set(next);
                }
                None => log::debug!("Already on the last screen"),
            }
        })
    };

    {
        use_effect_with(*screen, |screen| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("{} · Our Little World", screen.title()));
            }
            || ()
        });
    }

    let on_restart = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::first()))
    };

    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                { switch(*screen, on_next, on_restart) }
            </div>
        </div>
    }
}

pub fn switch(screen: Screen, on_next: Callback<()>, on_restart: Callback<()>) -> Html {
    match screen {
        Screen::Splash => html! { <Splash {on_next} /> },
        Screen::Scanner => html! { <CutenessScanner {on_next} /> },
        Screen::Puzzle => html! { <MemoryPuzzle {on_next} /> },
        Screen::VoiceNote => html! { <VoiceNote {on_next} /> },
        Screen::ScratchCards => html! { <ScratchCards {on_next} /> },
        Screen::BucketList => html! { <BucketListPage {on_next} /> },
        Screen::Cassette => html! { <CassettePlayer {on_next} /> },
        Screen::SpinWheel => html! { <SpinWheel {on_next} /> },
        Screen::TimeSinceMet => html! { <TimeSinceMet {on_next} /> },
        Screen::VideoSongs => html! { <VideoSongs {on_next} /> },
        Screen::Finale => html! { <Finale {on_restart} /> },
    }
}
