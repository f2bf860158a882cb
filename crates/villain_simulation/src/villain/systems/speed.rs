//! Speed system: SetSpeedMultiplier / ResetSpeed.

use bevy::prelude::*;
use crate::components::MoveSpeed;
use crate::villain::{SpeedCommand, Villain};

/// Система: применение SpeedCommand в порядке поступления
pub fn apply_speed_commands(
    mut events: EventReader<SpeedCommand>,
    mut speeds: Query<&mut MoveSpeed, With<Villain>>,
) {
    for event in events.read() {
        let Ok(mut speed) = speeds.get_mut(event.villain()) else {
            crate::logger::log_warning(&format!("SpeedCommand: villain {:?} not found", event.villain()));
            continue;
        };

        match event {
            SpeedCommand::SetMultiplier { factor, .. } => speed.set_multiplier(*factor),
            SpeedCommand::Reset { .. } => speed.reset(),
        }
    }
}
