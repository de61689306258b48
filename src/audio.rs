//! Music and sound cues
//!
//! The simulation only reports events; this module turns them into
//! start/stop/play-once calls on an `AudioSink`. Playback failures are
//! logged and never reach the game.

use crate::sim::GameEvent;

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// An obstacle was passed
    Score,
}

/// Anything that can play the game's audio
pub trait AudioSink {
    /// Start the looping background track from the beginning
    fn start_music(&mut self);
    fn stop_music(&mut self);
    fn play(&mut self, cue: SoundCue);
}

/// Route a tick's events to audio calls
pub fn play_events(events: &[GameEvent], sink: &mut impl AudioSink) {
    for event in events {
        match event {
            GameEvent::Scored { .. } => sink.play(SoundCue::Score),
            GameEvent::GameOver { .. } => sink.stop_music(),
            GameEvent::Restarted => sink.start_music(),
            GameEvent::Spawned { .. } => {}
        }
    }
}

/// Sink for builds without audio output
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn start_music(&mut self) {
        log::debug!("music: start");
    }

    fn stop_music(&mut self) {
        log::debug!("music: stop");
    }

    fn play(&mut self, cue: SoundCue) {
        log::debug!("sound: {:?}", cue);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, HtmlAudioElement};

    use super::{AudioSink, SoundCue};
    use crate::Settings;

    /// Plays the page's `<audio>` elements
    pub struct AudioManager {
        music: Option<HtmlAudioElement>,
        score: Option<HtmlAudioElement>,
        music_volume: f32,
        sfx_volume: f32,
        muted: bool,
    }

    fn find_audio(document: &Document, id: &str) -> Option<HtmlAudioElement> {
        let el = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
        if el.is_none() {
            log::warn!("Audio element #{} not found - cue disabled", id);
        }
        el
    }

    /// Start playback; autoplay rejections are logged, not propagated
    fn play_from_start(el: &HtmlAudioElement, volume: f32) {
        el.set_volume(volume as f64);
        el.set_current_time(0.0);
        match el.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("Audio playback rejected: {:?}", e);
                    }
                });
            }
            Err(e) => log::warn!("Audio playback failed: {:?}", e),
        }
    }

    impl AudioManager {
        pub fn new(document: &Document, settings: &Settings) -> Self {
            let music = find_audio(document, "gameMusic");
            if let Some(music) = &music {
                music.set_loop(true);
            }
            Self {
                music,
                score: find_audio(document, "scoreSound"),
                music_volume: settings.music_volume.clamp(0.0, 1.0),
                sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
                muted: settings.muted,
            }
        }
    }

    impl AudioSink for AudioManager {
        fn start_music(&mut self) {
            if self.muted {
                return;
            }
            if let Some(music) = &self.music {
                play_from_start(music, self.music_volume);
            }
        }

        fn stop_music(&mut self) {
            if let Some(music) = &self.music {
                if let Err(e) = music.pause() {
                    log::warn!("Failed to stop music: {:?}", e);
                }
            }
        }

        fn play(&mut self, cue: SoundCue) {
            if self.muted {
                return;
            }
            let el = match cue {
                SoundCue::Score => &self.score,
            };
            if let Some(el) = el {
                play_from_start(el, self.sfx_volume);
            }
        }
    }
}
