//! Headless navigation (замена engine NavigationAgent)
//!
//! Реальный navigation service внешний: он читает MovementCommand и двигает
//! агента по terrain. Для headless симуляции и тестов — простой stand-in:
//! прямая линия к destination со скоростью MovementSpeed, без pathfinding.
//!
//! SimulationPlugin его НЕ добавляет — embedder подключает явно.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::ai::{HeadingTurnRequested, PursuitSet};
use crate::components::{MovementCommand, MovementSpeed, Pursuer};

/// Ближе этого к destination стоим
const STOP_DISTANCE: f32 = 0.01;

/// Один шаг по прямой к destination, не перелетая её
pub fn step_towards(position: Vec3, destination: Vec3, speed: f32, delta: f32) -> Vec3 {
    let to_destination = destination - position;
    let distance = to_destination.length();
    let max_step = (speed * delta).max(0.0);

    if distance <= max_step || distance <= STOP_DISTANCE {
        destination
    } else {
        position + to_destination / distance * max_step
    }
}

/// Система: применить повороты и MovementCommand к Transform агентов
///
/// Агент, получивший HeadingTurnRequested, в этом тике только поворачивается.
/// Остальные идут к destination и смотрят по ходу движения (горизонтально).
pub fn drive_pursuers(
    mut turns: EventReader<HeadingTurnRequested>,
    mut agents: Query<(Entity, &MovementCommand, &MovementSpeed, &mut Transform), With<Pursuer>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.timestep().as_secs_f32();

    let mut pending_turns: HashMap<Entity, f32> = HashMap::new();
    for turn in turns.read() {
        *pending_turns.entry(turn.pursuer).or_default() += turn.yaw;
    }

    for (entity, command, speed, mut transform) in agents.iter_mut() {
        if let Some(yaw) = pending_turns.get(&entity) {
            transform.rotate_y(*yaw);
            continue;
        }

        let Some(destination) = command.destination() else {
            continue;
        };

        let next = step_towards(transform.translation, destination, speed.speed, delta);
        let heading = Vec3::new(next.x - transform.translation.x, 0.0, next.z - transform.translation.z);
        if heading.length_squared() > 1e-8 {
            transform.look_to(heading, Vec3::Y);
        }
        transform.translation = next;
    }
}

/// Plugin для headless navigation
///
/// Работает в FixedUpdate после pursuit тика: решение этого тика
/// исполняется сразу, perception следующего тика видит новую позицию.
pub struct HeadlessNavigationPlugin;

impl Plugin for HeadlessNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, drive_pursuers.after(PursuitSet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_towards_moves_at_speed() {
        let next = step_towards(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 3.0, 0.5);
        assert!((next - Vec3::new(1.5, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_step_towards_does_not_overshoot() {
        let destination = Vec3::new(0.2, 0.0, 0.0);
        assert_eq!(step_towards(Vec3::ZERO, destination, 3.0, 0.5), destination);
    }

    #[test]
    fn test_step_towards_zero_speed_stays() {
        let next = step_towards(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.0, 0.5);
        assert_eq!(next, Vec3::ZERO);
    }
}
