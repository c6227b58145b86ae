//! Capture check: агент догнал цель.

use bevy::prelude::*;

use crate::ai::{CaptureLatch, PursuerConfig, PursuerState, RoamState, TargetCaptured};
use crate::components::{Pursuer, PursuitTarget};
use crate::SimulationTick;

/// Строго ближе capture_distance
pub fn is_within_capture(agent_position: Vec3, target_position: Vec3, capture_distance: f32) -> bool {
    agent_position.distance(target_position) < capture_distance
}

/// Система: capture check (независим от FSM state)
///
/// Edge trigger через CaptureLatch: событие один раз на вход в радиус.
/// Что делать дальше (restart, death screen) решает подписчик.
pub fn check_capture(
    mut pursuers: Query<
        (Entity, &Pursuer, &Transform, &PursuerConfig, &PursuerState, &mut CaptureLatch),
        With<RoamState>,
    >,
    targets: Query<&Transform, With<PursuitTarget>>,
    tick: Res<SimulationTick>,
    mut captured: EventWriter<TargetCaptured>,
) {
    for (entity, pursuer, transform, config, state, mut latch) in pursuers.iter_mut() {
        let Ok(target_transform) = targets.get(pursuer.target) else {
            continue;
        };

        let inside = is_within_capture(
            transform.translation,
            target_transform.translation,
            config.capture_distance,
        );

        match (inside, latch.armed) {
            (true, true) => {
                latch.armed = false;
                crate::log_info(&format!(
                    "AI: pursuer {:?} captured target {:?} at tick {}",
                    entity, pursuer.target, tick.0
                ));
                captured.write(TargetCaptured {
                    pursuer: entity,
                    target: pursuer.target,
                    pursuer_position: transform.translation,
                    target_position: target_transform.translation,
                    pursuer_state: *state,
                    tick: tick.0,
                });
            }
            (false, false) => latch.armed = true,
            _ => {}
        }
    }
}
