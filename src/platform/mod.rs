//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timestamps → elapsed milliseconds
//! - Run seeds

/// Turns host frame timestamps into per-tick elapsed time
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_elapsed_ms: f32,
}

impl FrameClock {
    /// A negative or NaN cap is treated as 0
    pub fn new(max_elapsed_ms: f32) -> Self {
        Self {
            last: None,
            max_elapsed_ms: max_elapsed_ms.max(0.0),
        }
    }

    /// Elapsed ms since the previous timestamp. The first frame after
    /// construction or `reset` reports 0; backwards time reports 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let elapsed = match self.last {
            Some(last) => ((timestamp_ms - last) as f32).clamp(0.0, self.max_elapsed_ms),
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Seed for a new run: from settings if pinned, else from the clock
pub fn run_seed(pinned: Option<u64>) -> u64 {
    pinned.unwrap_or_else(now_seed)
}

#[cfg(target_arch = "wasm32")]
fn now_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
