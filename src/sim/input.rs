//! Logical input actions and device-event translation
//!
//! Raw key and touch events are folded into a set of active actions. The
//! simulation only ever asks whether an action is active.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Default vertical swipe distance (pixels) that counts as a gesture
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 30.0;
/// A swipe down must travel this many thresholds to count
pub const DEFAULT_SWIPE_DOWN_FACTOR: f32 = 5.0;

/// A logical input action, decoupled from the key or gesture behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Restart,
}

/// Map a browser `KeyboardEvent.key` value to its action
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "ArrowLeft" => Some(Action::MoveLeft),
        "ArrowRight" => Some(Action::MoveRight),
        "ArrowUp" | " " => Some(Action::Jump),
        "Enter" => Some(Action::Restart),
        _ => None,
    }
}

/// A normalized device event
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    KeyDown(String),
    KeyUp(String),
    /// Touch began at page y
    TouchStart { y: f32 },
    /// Touch moved to page y
    TouchMove { y: f32 },
    TouchEnd,
}

/// Currently active logical actions
#[derive(Debug, Clone)]
pub struct InputState {
    active: BTreeSet<Action>,
    /// Actions held only because of the current gesture
    gesture: BTreeSet<Action>,
    touch_start_y: Option<f32>,
    swipe_threshold: f32,
    swipe_down_factor: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD, DEFAULT_SWIPE_DOWN_FACTOR)
    }
}

impl InputState {
    pub fn new(swipe_threshold: f32, swipe_down_factor: f32) -> Self {
        Self {
            active: BTreeSet::new(),
            gesture: BTreeSet::new(),
            touch_start_y: None,
            swipe_threshold,
            swipe_down_factor,
        }
    }

    pub fn activate(&mut self, action: Action) {
        self.active.insert(action);
    }

    pub fn deactivate(&mut self, action: Action) {
        self.active.remove(&action);
        self.gesture.remove(&action);
    }

    #[inline]
    pub fn is_active(&self, action: Action) -> bool {
        self.active.contains(&action)
    }

    /// Drop every action so held keys don't leak into the next run
    pub fn reset(&mut self) {
        self.active.clear();
        self.gesture.clear();
        self.touch_start_y = None;
    }

    /// Active actions in a stable order
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.active.iter().copied()
    }

    /// Fold a device event into the action set. Returns the action this
    /// event pressed, if any; releases and unrecognized events return `None`.
    pub fn handle(&mut self, event: &DeviceEvent) -> Option<Action> {
        match event {
            DeviceEvent::KeyDown(key) => {
                let action = action_for_key(key)?;
                self.activate(action);
                Some(action)
            }
            DeviceEvent::KeyUp(key) => {
                if let Some(action) = action_for_key(key) {
                    self.deactivate(action);
                }
                None
            }
            DeviceEvent::TouchStart { y } => {
                self.touch_start_y = Some(*y);
                None
            }
            DeviceEvent::TouchMove { y } => {
                let start = self.touch_start_y?;
                let distance = y - start;
                let action = if distance < -self.swipe_threshold {
                    Action::Jump
                } else if distance > self.swipe_threshold * self.swipe_down_factor {
                    Action::Restart
                } else {
                    return None;
                };
                self.activate_gesture(action);
                Some(action)
            }
            DeviceEvent::TouchEnd => {
                for action in std::mem::take(&mut self.gesture) {
                    self.active.remove(&action);
                }
                self.touch_start_y = None;
                None
            }
        }
    }

    fn activate_gesture(&mut self, action: Action) {
        // A key already holding the action keeps ownership of it
        if self.active.insert(action) {
            self.gesture.insert(action);
        }
    }
}
