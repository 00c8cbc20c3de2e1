use bevy::prelude::*;

use crate::resources::{ControlKey, InputSnapshot, KeyBindings};

/// Copies the bound physical keys into the [`InputSnapshot`].
pub fn keyboard_snapshot_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    for control in ControlKey::ALL {
        let pressed = keyboard.pressed(bindings.key_for(control));
        if snapshot.is_pressed(control) == pressed {
            continue;
        }
        if snapshot.set(control, pressed) {
            debug!("{:?} pressed", control);
            if control == ControlKey::Reset {
                info!("Reset requested, returning airplane to spawn");
            }
        }
    }
}
