use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Rewind and play the success cue. Playback is best-effort: browsers may
/// reject `play()` until a user gesture has been seen, and the rejection
/// is discarded without surfacing anything to the player.
pub fn play_success(audio: Option<&HtmlAudioElement>) {
    let Some(audio) = audio else {
        return;
    };
    audio.set_current_time(0.0);
    if let Ok(promise) = audio.play() {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}
