//! Locomotion intent: один шаг FSM (Roaming / Pursuing / AvoidingObstacle)
//!
//! Чистая функция без ECS — система `pursuer_state_transitions` только
//! собирает input и раскладывает результат по компонентам.
//!
//! Порядок правил за тик:
//! 1. should_pursue → Pursuing, destination = live позиция цели
//! 2. был Pursuing, цель потеряна → Roaming + СВЕЖАЯ roam точка
//! 3. был AvoidingObstacle → Roaming (реакция разрешается за один тик, probe не делаем)
//! 4. Roaming: forward probe; hit → AvoidingObstacle (поворот 90..180° + новая точка),
//!    иначе идём к roam точке, arrival/timeout → новая точка

use bevy::prelude::*;
use rand::Rng;

use crate::ai::roam::{pick_avoidance_turn, pick_roam_target};
use crate::ai::{PursuerConfig, PursuerState, RoamState};
use crate::spatial::{probe_for_obstacle, ProbeReport, SpatialQuery};

/// Всё, что locomotion читает из мира за тик
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionInput {
    /// Текущая позиция агента (пишет navigation)
    pub position: Vec3,
    /// Текущее forward направление агента
    pub forward: Vec3,
    /// Live позиция цели (None если цели нет)
    pub target_position: Option<Vec3>,
    /// Сигнал perception
    pub should_pursue: bool,
    /// Длина тика (секунды)
    pub delta: f32,
}

/// Результат шага FSM
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionDecision {
    pub state: PursuerState,
    /// Куда агент хочет идти (handoff в navigation)
    pub destination: Vec3,
    /// One-shot поворот вокруг Y (radians)
    pub heading_turn: Option<f32>,
    /// Forward probe, если он делался в этом тике
    pub probe: Option<ProbeReport>,
}

impl LocomotionDecision {
    fn moving(state: PursuerState, destination: Vec3) -> Self {
        Self {
            state,
            destination,
            heading_turn: None,
            probe: None,
        }
    }
}

/// Один тик locomotion FSM
pub fn step(
    previous: PursuerState,
    roam: &mut RoamState,
    config: &PursuerConfig,
    input: &LocomotionInput,
    spatial: &impl SpatialQuery,
    rng: &mut impl Rng,
) -> LocomotionDecision {
    // 1. Pursue: приоритет над всем остальным
    if input.should_pursue {
        if let Some(target_position) = input.target_position {
            return LocomotionDecision::moving(PursuerState::Pursuing, target_position);
        }
    }

    match previous {
        // 2. Потеряли цель: старую roam точку не возобновляем
        PursuerState::Pursuing => {
            roam.retarget(pick_roam_target(roam.origin, config.roaming_range, rng));
            LocomotionDecision::moving(PursuerState::Roaming, roam.target)
        }

        // 3. Avoidance уже выбрал новую точку и поворот, просто возвращаемся в Roaming
        PursuerState::AvoidingObstacle => {
            roam.time_since_change += input.delta;
            LocomotionDecision::moving(PursuerState::Roaming, roam.target)
        }

        // 4. Обычный roam
        PursuerState::Roaming => {
            roam.time_since_change += input.delta;

            let hit_distance = probe_for_obstacle(
                spatial,
                input.position,
                input.forward,
                config.obstacle_probe_range,
            );
            let probe = ProbeReport {
                origin: input.position,
                direction: input.forward,
                range: config.obstacle_probe_range,
                hit_distance,
            };

            if hit_distance.is_some() {
                let yaw = pick_avoidance_turn(rng);
                roam.retarget(pick_roam_target(roam.origin, config.roaming_range, rng));
                return LocomotionDecision {
                    state: PursuerState::AvoidingObstacle,
                    destination: roam.target,
                    heading_turn: Some(yaw),
                    probe: Some(probe),
                };
            }

            let arrived = input.position.distance(roam.target) < config.arrival_tolerance;
            let timed_out = roam.time_since_change >= config.roam_change_interval;
            if arrived || timed_out {
                roam.retarget(pick_roam_target(roam.origin, config.roaming_range, rng));
            }

            LocomotionDecision {
                state: PursuerState::Roaming,
                destination: roam.target,
                heading_turn: None,
                probe: Some(probe),
            }
        }
    }
}
