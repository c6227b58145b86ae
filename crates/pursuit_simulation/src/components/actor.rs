//! Базовые компоненты акторов: Pursuer (агент), PursuitTarget (цель)

use bevy::prelude::*;

use crate::ai::{CaptureLatch, PursuerConfig, PursuerState};
use crate::perception::PerceptionReport;
use crate::spatial::ProbeReport;

/// Агент-преследователь
///
/// `target` — ссылка на преследуемую entity. Проверяется один раз при
/// инициализации (`initialize_pursuers`), после этого только читается.
///
/// Навигационный handle (`MovementCommand`) НЕ required: его отсутствие —
/// ошибка конфигурации, а не повод молча вставить default.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    PursuerState,
    PursuerConfig,
    PerceptionReport,
    ProbeReport,
    CaptureLatch
)]
pub struct Pursuer {
    pub target: Entity,
}

impl Pursuer {
    pub fn new(target: Entity) -> Self {
        Self { target }
    }
}

/// Преследуемый актор (игрок)
///
/// Ядро только читает Transform и TargetMotion, никогда их не пишет.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, TargetMotion)]
pub struct PursuitTarget;

/// Линейная скорость цели (пишется movement-кодом цели)
///
/// Используется hearing: чем быстрее цель, тем громче.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TargetMotion {
    pub velocity: Vec3,
}

impl TargetMotion {
    pub fn new(velocity: Vec3) -> Self {
        Self { velocity }
    }

    /// Модуль скорости (м/с)
    pub fn linear_speed(&self) -> f32 {
        self.velocity.length()
    }
}
