use std::rc::Rc;

use shared::shared_media::{Playlist, VIDEO_SONGS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::config::get_asset_url;
use crate::media::MediaPlayer;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct VideoSongsProps {
    pub on_next: Callback<()>,
}

enum VideoAction {
    Select(usize),
    Next,
    Close,
    ToggleMute,
}

#[derive(Clone, PartialEq)]
struct VideoState {
    playlist: Playlist,
    muted: bool,
}

impl Reducible for VideoState {
    type Action = VideoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            VideoAction::Select(index) => {
                state.playlist.select(index);
            }
            VideoAction::Next => {
                state.playlist.next();
            }
            VideoAction::Close => state.playlist.close(),
            VideoAction::ToggleMute => state.muted = !state.muted,
        }
        Rc::new(state)
    }
}

#[function_component(VideoSongs)]
pub fn video_songs(props: &VideoSongsProps) -> Html {
    let videos = use_reducer(|| VideoState {
        playlist: Playlist::new(VIDEO_SONGS.len()),
        muted: false,
    });
    let video_ref = use_node_ref();
    let selected = videos.playlist.selected();

    // Load and autoplay whenever the selection changes; end rolls on to the next
    {
        let video_ref = video_ref.clone();
        let dispatcher = videos.dispatcher();
        use_effect_with(selected, move |selected| {
            let player = selected.and_then(|index| {
                let player = MediaPlayer::from_node(&video_ref)?;
                player.load(&get_asset_url(VIDEO_SONGS[index].src));
                let autoplay = player.clone();
                spawn_local(async move {
                    if let Err(e) = autoplay.play().await {
                        log::warn!("{}", e);
                    }
                });
                Some(player)
            });
            let ended = player.as_ref().map(|player| {
                player.on("ended", move |_| dispatcher.dispatch(VideoAction::Next))
            });
            move || {
                drop(ended);
                if let Some(player) = player {
                    player.pause();
                    player.seek(0.0);
                }
            }
        });
    }

    {
        let video_ref = video_ref.clone();
        use_effect_with((selected, videos.muted), move |(_, muted)| {
            if let Some(player) = MediaPlayer::from_node(&video_ref) {
                player.set_muted(*muted);
            }
            || ()
        });
    }

    let on_close = {
        let dispatcher = videos.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(VideoAction::Close))
    };
    let on_next_video = {
        let dispatcher = videos.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(VideoAction::Next))
    };
    let on_mute = {
        let dispatcher = videos.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(VideoAction::ToggleMute))
    };

    let cards = VIDEO_SONGS.iter().enumerate().map(|(index, song)| {
        let onclick = {
            let dispatcher = videos.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(VideoAction::Select(index)))
        };
        html! {
            <button key={song.id} class={classes!(styles::CARD_TILE, "text-left", "group")} {onclick}>
                <div class="relative h-52 overflow-hidden bg-gradient-to-br from-rose-100 to-pink-100">
                    <img src={song.thumbnail} alt={song.title} class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-300" />
                    <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity">
                        <div class="w-16 h-16 rounded-full bg-white/90 flex items-center justify-center shadow-lg text-rose-600 text-2xl">{"▶"}</div>
                    </div>
                </div>
                <div class="p-5">
                    <h3 class="text-xl font-dancing text-rose-900">{song.title}</h3>
                    <p class="text-sm text-rose-600/80 mb-2">{song.artist}</p>
                    <p class="text-sm italic text-gray-600">{song.emotion}</p>
                </div>
            </button>
        }
    });

    let modal = selected.and_then(|index| VIDEO_SONGS.get(index)).map(|song| html! {
        <div class="fixed inset-0 z-50 bg-black/80 flex items-center justify-center p-4">
            <div class="w-full max-w-3xl bg-black rounded-3xl overflow-hidden shadow-2xl">
                <video ref={video_ref.clone()} class="w-full aspect-video" playsinline=true controls=true />
                <div class="flex items-center justify-between p-4 text-white">
                    <div>
                        <p class="font-dancing text-2xl">{song.title}</p>
                        <p class="text-sm italic text-rose-200">{song.emotion}</p>
                    </div>
                    <div class="flex gap-3 text-xl">
                        <button onclick={on_mute} aria-label="Mute">{ if videos.muted { "🔇" } else { "🔊" } }</button>
                        <button onclick={on_next_video} aria-label="Next">{"⏭"}</button>
                        <button onclick={on_close} aria-label="Close">{"✕"}</button>
                    </div>
                </div>
            </div>
        </div>
    });

    html! {
        <GradientBackground gradient={styles::BG_BLUSH}>
            <div class={styles::SCREEN_SCROLL}>
                <div class={classes!(styles::CONTENT_WIDE, "text-center")}>
                    <h2 class="text-4xl font-dancing text-rose-900 mb-4">
                        {"These Songs Look the Way My Heart Feels About You"}
                    </h2>
                    <p class="text-rose-700/80 text-lg font-dancing italic max-w-2xl mx-auto mb-10">
                        {"Some moments are meant to be seen, heard, and felt. Not rushed, not skipped, just experienced with you."}
                    </p>

                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for cards }
                    </div>

                    <ContinueButton on_next={props.on_next.clone()} />
                </div>
            </div>
            { modal.unwrap_or_default() }
        </GradientBackground>
    }
}
