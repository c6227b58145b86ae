//! Ошибки инициализации pursuer'а
//!
//! Tick pipeline ошибок не поднимает: всё, что может пойти не так, проверяется
//! один раз при инициализации агента.

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PursuitSetupError {
    /// Target entity из `Pursuer::target` не существует
    #[error("pursuer target {0:?} does not exist")]
    MissingTarget(Entity),

    /// Entity существует, но не помечена `PursuitTarget`
    #[error("entity {0:?} is not a pursuit target (missing PursuitTarget)")]
    TargetNotPursuable(Entity),

    /// У агента нет `MovementCommand` — навигации некуда отдавать destination
    #[error("pursuer {0:?} has no navigation handle (missing MovementCommand)")]
    MissingNavigation(Entity),

    /// Параметр `PursuerConfig` вне допустимого диапазона
    #[error("invalid pursuer config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },

    /// Невалидный JSON конфига
    #[error("failed to parse pursuer config: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PursuitSetupError>;
