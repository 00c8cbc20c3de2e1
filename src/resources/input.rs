use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Logical controls the flight session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKey {
    ThrottleUp,
    ThrottleDown,
    YawLeft,
    YawRight,
    ClimbUp,
    ClimbDown,
    Reset,
    ToggleCamera,
    Brake,
}

impl ControlKey {
    pub const ALL: [ControlKey; 9] = [
        ControlKey::ThrottleUp,
        ControlKey::ThrottleDown,
        ControlKey::YawLeft,
        ControlKey::YawRight,
        ControlKey::ClimbUp,
        ControlKey::ClimbDown,
        ControlKey::Reset,
        ControlKey::ToggleCamera,
        ControlKey::Brake,
    ];
}

/// Pressed state of every control key, last writer wins.
///
/// The flight model only reads [`InputSnapshot::is_pressed`]. Rising edges are
/// latched until consumed, so a press is seen exactly once even if the fixed
/// tick does not run in the frame the key went down, and OS key-repeat never
/// produces a second edge.
///
/// Held state is only sampled once per frame. A tap of Reset or Brake that is
/// released before the next fixed tick runs is never seen by the flight model.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct InputSnapshot {
    pressed: HashMap<ControlKey, bool>,
    edges: HashSet<ControlKey>,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            pressed: ControlKey::ALL.iter().map(|key| (*key, false)).collect(),
            edges: HashSet::new(),
        }
    }
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given keys held, mostly useful for scripted input.
    pub fn with_pressed(keys: &[ControlKey]) -> Self {
        let mut snapshot = Self::default();
        for key in keys {
            snapshot.set(*key, true);
        }
        snapshot
    }

    /// Record a key transition. Returns `true` on a released-to-pressed edge.
    pub fn set(&mut self, key: ControlKey, pressed: bool) -> bool {
        let was_pressed = self.pressed.insert(key, pressed).unwrap_or(false);
        let rising = pressed && !was_pressed;
        if rising {
            self.edges.insert(key);
        }
        rising
    }

    pub fn press(&mut self, key: ControlKey) -> bool {
        self.set(key, true)
    }

    pub fn release(&mut self, key: ControlKey) {
        self.set(key, false);
    }

    pub fn is_pressed(&self, key: ControlKey) -> bool {
        self.pressed.get(&key).copied().unwrap_or(false)
    }

    /// Consume the latched press of `key`, if any.
    pub fn take_press(&mut self, key: ControlKey) -> bool {
        self.edges.remove(&key)
    }
}

/// Physical key assigned to each control.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub throttle_up: KeyCode,
    pub throttle_down: KeyCode,
    pub yaw_left: KeyCode,
    pub yaw_right: KeyCode,
    pub climb_up: KeyCode,
    pub climb_down: KeyCode,
    pub reset: KeyCode,
    pub toggle_camera: KeyCode,
    pub brake: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            throttle_up: KeyCode::KeyW,
            throttle_down: KeyCode::KeyS,
            yaw_left: KeyCode::KeyA,
            yaw_right: KeyCode::KeyD,
            climb_up: KeyCode::KeyQ,
            climb_down: KeyCode::KeyE,
            reset: KeyCode::KeyR,
            toggle_camera: KeyCode::KeyC,
            brake: KeyCode::Space,
        }
    }
}

impl KeyBindings {
    pub fn key_for(&self, control: ControlKey) -> KeyCode {
        match control {
            ControlKey::ThrottleUp => self.throttle_up,
            ControlKey::ThrottleDown => self.throttle_down,
            ControlKey::YawLeft => self.yaw_left,
            ControlKey::YawRight => self.yaw_right,
            ControlKey::ClimbUp => self.climb_up,
            ControlKey::ClimbDown => self.climb_down,
            ControlKey::Reset => self.reset,
            ControlKey::ToggleCamera => self.toggle_camera,
            ControlKey::Brake => self.brake,
        }
    }

    /// Controls sharing one physical key.
    pub fn conflicts(&self) -> Vec<(ControlKey, ControlKey)> {
        let mut conflicts = Vec::new();
        for (i, a) in ControlKey::ALL.iter().enumerate() {
            for b in &ControlKey::ALL[i + 1..] {
                if self.key_for(*a) == self.key_for(*b) {
                    conflicts.push((*a, *b));
                }
            }
        }
        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_starts_released() {
        let snapshot = InputSnapshot::new();
        assert!(ControlKey::ALL.iter().all(|key| !snapshot.is_pressed(*key)));
    }

    #[test]
    fn test_repeat_does_not_latch_twice() {
        let mut snapshot = InputSnapshot::new();
        assert!(snapshot.press(ControlKey::ToggleCamera));
        assert!(!snapshot.press(ControlKey::ToggleCamera));
        assert!(!snapshot.press(ControlKey::ToggleCamera));

        assert!(snapshot.take_press(ControlKey::ToggleCamera));
        assert!(!snapshot.take_press(ControlKey::ToggleCamera));
        assert!(snapshot.is_pressed(ControlKey::ToggleCamera));
    }

    #[test]
    fn test_release_and_press_latches_again() {
        let mut snapshot = InputSnapshot::new();
        snapshot.press(ControlKey::ToggleCamera);
        assert!(snapshot.take_press(ControlKey::ToggleCamera));
        snapshot.release(ControlKey::ToggleCamera);
        assert!(snapshot.press(ControlKey::ToggleCamera));
        assert!(snapshot.take_press(ControlKey::ToggleCamera));
    }

    #[test]
    fn test_default_bindings_follow_wasd_layout() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.key_for(ControlKey::ThrottleUp), KeyCode::KeyW);
        assert_eq!(bindings.key_for(ControlKey::Brake), KeyCode::Space);
        assert!(bindings.conflicts().is_empty());
    }

    #[test]
    fn test_conflicting_bindings_are_reported() {
        let bindings = KeyBindings {
            reset: KeyCode::KeyW,
            ..Default::default()
        };
        assert_eq!(
            bindings.conflicts(),
            vec![(ControlKey::ThrottleUp, ControlKey::Reset)]
        );
    }
}
