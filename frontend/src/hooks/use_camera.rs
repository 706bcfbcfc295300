use std::cell::RefCell;
use std::rc::Rc;

use shared::shared_scanner::CameraStatus;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, HtmlMediaElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CameraHandle {
    pub status: CameraStatus,
    pub video_ref: NodeRef,
}

async fn request_front_camera() -> Result<MediaStream, String> {
    let devices = window()
        .ok_or("No window")?
        .navigator()
        .media_devices()
        .map_err(|e| format!("No media devices: {:?}", e))?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &JsValue::from_str("facingMode"), &JsValue::from_str("user"))
        .map_err(|e| format!("{:?}", e))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| format!("getUserMedia failed: {:?}", e))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Camera access denied: {:?}", e))?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| "getUserMedia returned something that is not a stream".to_string())
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Asks for the front camera on mount and shows it in the element behind
/// `video_ref`. Every track is stopped on unmount.
#[hook]
pub fn use_camera() -> CameraHandle {
    let status = use_state(|| CameraStatus::Pending);
    let video_ref = use_node_ref();
    let stream = use_mut_ref(|| None::<MediaStream>);

    {
        let status = status.clone();
        let video_ref = video_ref.clone();
        let stream = stream.clone();
        use_effect_with((), move |_| {
            // Set once unmounted so a late stream is stopped straight away
            let unmounted = Rc::new(RefCell::new(false));
            {
                let unmounted = unmounted.clone();
                let stream = stream.clone();
                spawn_local(async move {
                    match request_front_camera().await {
                        Ok(media) => {
                            if *unmounted.borrow() {
                                stop_tracks(&media);
                                return;
                            }
                            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                                video.set_src_object(Some(&media));
                            }
                            *stream.borrow_mut() = Some(media);
                            status.set(CameraStatus::Ready);
                        }
                        Err(e) => {
                            log::warn!("{}", e);
                            if !*unmounted.borrow() {
                                status.set(CameraStatus::Denied);
                            }
                        }
                    }
                });
            }

            move || {
                *unmounted.borrow_mut() = true;
                if let Some(media) = stream.borrow_mut().take() {
                    stop_tracks(&media);
                }
            }
        });
    }

    CameraHandle {
        status: *status,
        video_ref,
    }
}
