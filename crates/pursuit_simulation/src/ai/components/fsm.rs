//! FSM AI components (state machine, config, roam state, capture latch).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PursuitSetupError, Result};

/// Locomotion FSM состояния
///
/// Ровно одно активно. `AvoidingObstacle` — реакция, а не режим:
/// на следующем тике всегда разрешается в `Roaming` (или `Pursuing`).
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize,
)]
#[reflect(Component)]
pub enum PursuerState {
    /// Бродим вокруг roam origin
    #[default]
    Roaming,
    /// Цель воспринята — идём на её live позицию
    Pursuing,
    /// Probe упёрся в obstacle — развернулись, выбрали новую roam точку
    AvoidingObstacle,
}

/// Параметры агента (константы на время жизни instance)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct PursuerConfig {
    /// Скорость движения (м/с), отдаётся navigation через MovementSpeed
    pub move_speed: f32,
    /// Полуширина квадрата roam вокруг origin (метры)
    pub roaming_range: f32,
    /// Максимум секунд на одну roam точку
    pub roam_change_interval: f32,
    /// Длина forward probe (метры)
    pub obstacle_probe_range: f32,
    /// Дальность зрения (метры)
    pub sight_range: f32,
    /// Верхняя граница hearing radius (метры)
    pub max_hearing_radius: f32,
    /// Множитель скорость цели → hearing radius
    pub hearing_sensitivity: f32,
    /// Дистанция захвата (строго меньше — пойман)
    pub capture_distance: f32,
    /// Дистанция "дошли до roam точки"
    pub arrival_tolerance: f32,
}

impl Default for PursuerConfig {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            roaming_range: 10.0,
            roam_change_interval: 2.0,
            obstacle_probe_range: 5.0,
            sight_range: 15.0,
            max_hearing_radius: 20.0,
            hearing_sensitivity: 0.5,
            capture_distance: 1.0,
            arrival_tolerance: 0.1,
        }
    }
}

impl PursuerConfig {
    /// Проверка диапазонов (вызывается при инициализации агента)
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("roaming_range", self.roaming_range),
            ("obstacle_probe_range", self.obstacle_probe_range),
            ("max_hearing_radius", self.max_hearing_radius),
            ("hearing_sensitivity", self.hearing_sensitivity),
            ("arrival_tolerance", self.arrival_tolerance),
        ];
        let positive = [
            ("roam_change_interval", self.roam_change_interval),
            ("sight_range", self.sight_range),
            ("capture_distance", self.capture_distance),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PursuitSetupError::InvalidConfig { field, value });
            }
        }
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PursuitSetupError::InvalidConfig { field, value });
            }
        }

        Ok(())
    }

    /// Parse + validate из JSON (отсутствующие поля берутся из Default)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PursuitSetupError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Roam state агента
///
/// Инвариант: `target` в пределах `roaming_range` от `origin` по X и Z.
/// Создаётся один раз в `initialize_pursuers`; его наличие = агент инициализирован.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct RoamState {
    /// Snapshot позиции спавна
    pub origin: Vec3,
    /// Текущая roam точка
    pub target: Vec3,
    /// Секунды с последней смены roam точки
    pub time_since_change: f32,
}

impl RoamState {
    pub fn new(origin: Vec3, target: Vec3) -> Self {
        Self {
            origin,
            target,
            time_since_change: 0.0,
        }
    }

    /// Новая roam точка + сброс таймера
    pub fn retarget(&mut self, target: Vec3) {
        self.target = target;
        self.time_since_change = 0.0;
    }
}

/// Edge trigger для TargetCaptured
///
/// `armed == true` → следующее попадание в capture_distance шлёт событие.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CaptureLatch {
    pub armed: bool,
}

impl Default for CaptureLatch {
    fn default() -> Self {
        Self { armed: true }
    }
}

/// Агент не прошёл инициализацию — в tick pipeline не участвует
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PursuerFault(pub PursuitSetupError);
