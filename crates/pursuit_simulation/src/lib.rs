//! Pursuit Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 (strategic layer) для агента-преследователя:
//! perception (sight + hearing) → locomotion FSM → capture check.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (perception, FSM, capture)
//! - Engine = tactical layer (navigation/pathfinding, rendering, audio)
//!   читает MovementCommand, пишет Transform агента и цели.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod components;
pub mod error;
pub mod logger;
pub mod navigation;
pub mod perception;
pub mod spatial;

// Re-export базовых типов для удобства
pub use ai::{
    AIPlugin, HeadingTurnRequested, PursuerConfig, PursuerState, PursuerStateChanged, PursuitSet,
    PursuitSetupFailed, RoamState, TargetCaptured,
};
pub use components::*;
pub use error::PursuitSetupError;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use navigation::HeadlessNavigationPlugin;
pub use perception::PerceptionReport;
pub use spatial::{ObstacleField, ProbeReport, SpatialQuery};

/// Частота fixed тика симуляции
pub const TICK_HZ: f64 = 60.0;

/// Seed по умолчанию для DeterministicRng
pub const DEFAULT_SEED: u64 = 42;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // create_headless_app уже мог вставить RNG со своим seed, не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_plugins(AIPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Единственный источник случайности симуляции (roam точки, avoidance повороты).
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Номер fixed тика (для payload событий)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationTick(pub u64);

/// Система: +1 тик (первая в pursuit цепочке)
pub fn advance_simulation_tick(mut tick: ResMut<SimulationTick>) {
    tick.0 += 1;
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает вручную: каждый `app.update()` продвигает часы ровно на
/// один fixed timestep (1/60 сек), без wall clock.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(1.0 / TICK_HZ),
        ));

    app
}

/// Прогнать ровно `ticks` fixed тиков через полный `app.update()`
///
/// Полный Main schedule нужен ради `event_update_system` в First: события
/// живут два update'а и потом очищаются, буферы не растут.
/// Первый update у `ManualDuration` имеет нулевую delta (часы только
/// стартуют), поэтому он прогоняется один раз отдельно и тика не даёт.
pub fn run_fixed_ticks(app: &mut App, ticks: u64) {
    if app.world().resource::<Time<Real>>().first_update().is_none() {
        app.update();
    }

    for _ in 0..ticks {
        app.update();
    }
}

/// Байтовый snapshot компонента `T` всех entity
///
/// Сравнивается между прогонами с одним seed (позиции, RoamState, PursuerState).
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Порядок archetype итерации не гарантирован, сортируем по index
    entities.sort_by_key(|(entity, _)| entity.index());

    // Debug вывод f32 round-trip точен: разные позиции/roam точки дают разные байты
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
