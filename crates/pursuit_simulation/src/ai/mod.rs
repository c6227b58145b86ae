//! AI decision-making module
//!
//! Pursuit FSM: Roaming → Pursuing → Roaming, AvoidingObstacle как
//! одно-тиковая реакция на forward probe. Capture check независим от FSM.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod locomotion;
pub mod roam;
pub mod systems;


// Re-export основных типов
pub use components::*;
pub use events::*;

use crate::perception::update_perception;
use crate::spatial::{refresh_obstacle_field, ObstacleField};

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения (один тик):
/// 1. advance_simulation_tick: номер тика для событий
/// 2. refresh_obstacle_field: snapshot коллайдеров (single writer)
/// 3. initialize_pursuers: новые агенты: origin + первая roam точка / fault
/// 4. update_perception: sight + hearing → PerceptionReport
/// 5. pursuer_state_transitions: FSM → MovementCommand
/// 6. check_capture: TargetCaptured
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObstacleField>()
            .init_resource::<crate::SimulationTick>()
            .add_event::<TargetCaptured>()
            .add_event::<PursuerStateChanged>()
            .add_event::<HeadingTurnRequested>()
            .add_event::<PursuitSetupFailed>()
            .add_systems(
                FixedUpdate,
                (
                    crate::advance_simulation_tick,
                    refresh_obstacle_field,
                    systems::initialize_pursuers,
                    update_perception,
                    systems::pursuer_state_transitions,
                    systems::check_capture,
                )
                    .chain() // Последовательное выполнение для детерминизма
                    .in_set(PursuitSet),
            );
    }
}

/// SystemSet всего pursuit тика, чтобы navigation/movement могли встать after/before
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PursuitSet;
