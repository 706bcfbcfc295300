#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use frontend::media::{Fader, MediaPlayer};
use gloo_timers::future::TimeoutFuture;
use shared::shared_media::VolumeRamp;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_fade_out_can_start_the_next_fade_when_done() {
    let player = MediaPlayer::audio().unwrap();
    player.set_volume(1.0);
    let fader = Fader::new();
    let finished = Rc::new(Cell::new(0));

    {
        let chained = fader.clone();
        let next_player = player.clone();
        let finished = finished.clone();
        fader.start(player.clone(), VolumeRamp::with_step(1.0, 0.0, 0.5), move || {
            finished.set(finished.get() + 1);
            let finished = finished.clone();
            chained.start(next_player, VolumeRamp::with_step(0.0, 1.0, 0.5), move || {
                finished.set(finished.get() + 1);
            });
        });
    }

    TimeoutFuture::new(600).await;
    assert_eq!(finished.get(), 2);
    assert_eq!(player.volume(), 1.0);
}

#[wasm_bindgen_test]
async fn test_cancelled_fade_never_finishes() {
    let player = MediaPlayer::audio().unwrap();
    player.set_volume(1.0);
    let fader = Fader::new();
    let finished = Rc::new(Cell::new(false));

    {
        let finished = finished.clone();
        fader.start(player.clone(), VolumeRamp::with_step(1.0, 0.0, 0.5), move || finished.set(true));
    }
    fader.cancel();

    TimeoutFuture::new(300).await;
    assert!(!finished.get());
    assert_eq!(player.volume(), 1.0);
}
