//! Movement компоненты: navigation handoff, скорость движения

use bevy::prelude::*;

/// Команда движения для агента (выполняется внешним navigation service)
///
/// Архитектура:
/// - ECS система пишет MovementCommand (desired destination)
/// - Navigation service читает и ведёт агента по terrain
/// - Transform агента обновляет navigation, ядро только читает
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum MovementCommand {
    /// Стоять на месте
    #[default]
    Idle,
    /// Двигаться к позиции (world coordinates)
    MoveToPosition { target: Vec3 },
}

impl MovementCommand {
    /// Текущая destination (если есть)
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            MovementCommand::Idle => None,
            MovementCommand::MoveToPosition { target } => Some(*target),
        }
    }
}

/// Скорость движения агента (метры/сек)
///
/// Вставляется при инициализации из `PursuerConfig::move_speed`,
/// читается navigation service.
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 3.0 }
    }
}
