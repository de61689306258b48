//! Game settings and preferences
//!
//! Read as JSON from LocalStorage on the web, or from an environment
//! variable natively; anything missing or unreadable falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::sim::input::{DEFAULT_SWIPE_DOWN_FACTOR, DEFAULT_SWIPE_THRESHOLD};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,

    // === Audio ===
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Input ===
    /// Vertical swipe distance (pixels) for a swipe up
    pub swipe_threshold: f32,
    /// Swipe down must travel `swipe_threshold * swipe_down_factor`
    pub swipe_down_factor: f32,

    // === Timing ===
    /// Longest frame delta fed to the simulation (ms)
    pub max_frame_ms: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            music_volume: 0.2,
            sfx_volume: 1.0,
            muted: false,

            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe_down_factor: DEFAULT_SWIPE_DOWN_FACTOR,

            max_frame_ms: 250.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "parallax_runner_settings";

    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native: read `PARALLAX_RUNNER_SETTINGS` as JSON if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var("PARALLAX_RUNNER_SETTINGS") {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring PARALLAX_RUNNER_SETTINGS: {}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.music_volume, 0.2);
        assert_eq!(settings.swipe_threshold, 30.0);
        assert_eq!(settings.swipe_down_factor, 5.0);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"seed": 42, "muted": true}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.muted);
        assert_eq!(settings.music_volume, 0.2);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            max_frame_ms: 100.0,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{seed:").is_err());
    }
}
