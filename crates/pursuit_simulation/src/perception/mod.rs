//! Perception: sight + hearing → "target acquired"
//!
//! Sight: дистанция <= sight_range И occlusion ray (обрезан на sight_range)
//! не упирается в Obstacle до цели.
//!
//! Hearing: радиус растёт со скоростью цели,
//! `clamp(speed * sensitivity, 0, max_hearing_radius)`.
//! Звук сквозь стены проходит, НО реагируем на него только если тот же
//! occlusion ray чист. Громкая цель за стеной не слышна — поведение
//! сохранено как есть, см. DESIGN.md (open question).
//!
//! Пересчитывается полностью каждый тик, без hysteresis.

use bevy::prelude::*;

use crate::ai::{PursuerConfig, RoamState};
use crate::components::{Pursuer, PursuitTarget, TargetMotion};
use crate::spatial::{is_occluded, ObstacleField, SpatialQuery};

/// Результат perception за тик (также observable для debug/UI)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PerceptionReport {
    /// Дистанция до цели (f32::INFINITY если цели нет)
    pub distance: f32,
    /// Occlusion ray чист
    pub unobstructed: bool,
    /// В sight_range и видна
    pub visible: bool,
    /// Текущий hearing radius
    pub hearing_radius: f32,
    /// В hearing radius и occlusion ray чист
    pub heard: bool,
    /// Итоговый сигнал для state machine
    pub should_pursue: bool,
}

impl PerceptionReport {
    /// Цели нет: ничего не воспринимаем
    pub fn nothing() -> Self {
        Self {
            distance: f32::INFINITY,
            ..Self::default()
        }
    }
}

/// Hearing radius от скорости цели
pub fn hearing_radius(target_speed: f32, sensitivity: f32, max_radius: f32) -> f32 {
    let radius = target_speed * sensitivity;
    if radius.is_nan() {
        return 0.0;
    }
    radius.clamp(0.0, max_radius.max(0.0))
}

/// Sight test (range + occlusion)
pub fn can_see(
    spatial: &impl SpatialQuery,
    agent_position: Vec3,
    target_position: Vec3,
    sight_range: f32,
) -> bool {
    agent_position.distance(target_position) <= sight_range
        && !is_occluded(spatial, agent_position, target_position, sight_range)
}

/// Полная оценка perception для одного агента
pub fn evaluate(
    spatial: &impl SpatialQuery,
    agent_position: Vec3,
    target_position: Vec3,
    target_speed: f32,
    config: &PursuerConfig,
) -> PerceptionReport {
    let distance = agent_position.distance(target_position);
    // Один raycast на тик: sight и hearing gate используют один и тот же луч
    let unobstructed = !is_occluded(spatial, agent_position, target_position, config.sight_range);
    let radius = hearing_radius(
        target_speed,
        config.hearing_sensitivity,
        config.max_hearing_radius,
    );

    let visible = distance <= config.sight_range && unobstructed;
    let heard = distance <= radius && unobstructed;

    PerceptionReport {
        distance,
        unobstructed,
        visible,
        hearing_radius: radius,
        heard,
        should_pursue: visible || heard,
    }
}

/// Система: perception для всех инициализированных pursuer'ов
///
/// Цель пропала (despawn) → `PerceptionReport::nothing()`, без паники.
pub fn update_perception(
    mut pursuers: Query<
        (&Pursuer, &Transform, &PursuerConfig, &mut PerceptionReport),
        With<RoamState>,
    >,
    targets: Query<(&Transform, &TargetMotion), With<PursuitTarget>>,
    field: Res<ObstacleField>,
) {
    for (pursuer, transform, config, mut report) in pursuers.iter_mut() {
        let new_report = match targets.get(pursuer.target) {
            Ok((target_transform, motion)) => evaluate(
                &*field,
                transform.translation,
                target_transform.translation,
                motion.linear_speed(),
                config,
            ),
            Err(_) => PerceptionReport::nothing(),
        };

        if *report != new_report {
            *report = new_report;
        }
    }
}
