use bevy::prelude::*;

use super::AirplaneVariant;

/// Marks the airplane flown by the local player and the model it is built from.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerController {
    pub variant: AirplaneVariant,
}

impl PlayerController {
    pub fn new(variant: AirplaneVariant) -> Self {
        Self { variant }
    }
}
