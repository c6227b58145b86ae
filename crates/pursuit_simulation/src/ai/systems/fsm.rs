//! FSM AI systems (locomotion state transitions).

use bevy::prelude::*;

use crate::ai::locomotion::{step, LocomotionInput};
use crate::ai::{HeadingTurnRequested, PursuerConfig, PursuerState, PursuerStateChanged, RoamState};
use crate::components::{MovementCommand, Pursuer, PursuitTarget};
use crate::perception::PerceptionReport;
use crate::spatial::{ObstacleField, ProbeReport};
use crate::DeterministicRng;

/// Система: locomotion FSM transitions
///
/// Читает PerceptionReport (посчитан в этом же тике) → шаг FSM →
/// пишет PursuerState, RoamState, MovementCommand (handoff в navigation).
/// Поворот при avoidance уходит наружу событием HeadingTurnRequested —
/// Transform агента ядро не пишет.
pub fn pursuer_state_transitions(
    mut pursuers: Query<(
        Entity,
        &Pursuer,
        &Transform,
        &PursuerConfig,
        &PerceptionReport,
        &mut PursuerState,
        &mut RoamState,
        &mut MovementCommand,
        &mut ProbeReport,
    )>,
    targets: Query<&Transform, With<PursuitTarget>>,
    field: Res<ObstacleField>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
    mut turns: EventWriter<HeadingTurnRequested>,
    mut changes: EventWriter<PursuerStateChanged>,
) {
    // Система живёт в FixedUpdate: длина тика = timestep
    let delta = time.timestep().as_secs_f32();

    for (entity, pursuer, transform, config, perception, mut state, mut roam, mut command, mut probe) in
        pursuers.iter_mut()
    {
        let input = LocomotionInput {
            position: transform.translation,
            forward: transform.forward().as_vec3(),
            target_position: targets.get(pursuer.target).ok().map(|t| t.translation),
            should_pursue: perception.should_pursue,
            delta,
        };

        let previous = *state;
        let decision = step(previous, &mut roam, config, &input, &*field, &mut rng.rng);

        if let Some(report) = decision.probe {
            if *probe != report {
                *probe = report;
            }
        }

        if let Some(yaw) = decision.heading_turn {
            turns.write(HeadingTurnRequested {
                pursuer: entity,
                yaw,
            });
        }

        // Проверяем что команда изменилась, иначе Changed<MovementCommand> спамит
        let new_command = MovementCommand::MoveToPosition {
            target: decision.destination,
        };
        if *command != new_command {
            *command = new_command;
        }

        if previous != decision.state {
            crate::log(&format!(
                "AI: {:?} {:?} → {:?} (distance to target {:.2}, visible {}, heard {})",
                entity,
                previous,
                decision.state,
                perception.distance,
                perception.visible,
                perception.heard
            ));
            changes.write(PursuerStateChanged {
                pursuer: entity,
                from: previous,
                to: decision.state,
            });
            *state = decision.state;
        }
    }
}
