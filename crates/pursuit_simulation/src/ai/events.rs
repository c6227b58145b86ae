//! AI Events — наружу из ядра (capture sink, state observer, navigation turns)

use bevy::prelude::*;

use crate::ai::PursuerState;
use crate::error::PursuitSetupError;

/// Агент поймал цель (terminal сигнал)
///
/// Payload несёт всё, что нужно presentation слою (death screen, звук,
/// restart), чтобы не писать в глобальное состояние.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TargetCaptured {
    pub pursuer: Entity,
    pub target: Entity,
    pub pursuer_position: Vec3,
    pub target_position: Vec3,
    /// Состояние FSM в момент захвата
    pub pursuer_state: PursuerState,
    /// Номер fixed тика симуляции
    pub tick: u64,
}

/// Смена состояния FSM (для анимации/debug UI, обратно в ядро не читается)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PursuerStateChanged {
    pub pursuer: Entity,
    pub from: PursuerState,
    pub to: PursuerState,
}

/// One-shot поворот агента вокруг вертикальной оси (radians)
///
/// Пишет locomotion при входе в AvoidingObstacle, применяет navigation service.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HeadingTurnRequested {
    pub pursuer: Entity,
    pub yaw: f32,
}

/// Инициализация агента провалилась (fatal, один раз на агента)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PursuitSetupFailed {
    pub pursuer: Entity,
    pub error: PursuitSetupError,
}
