//! Headless pursuit симуляция
//!
//! Один агент, одна цель бегает по кругу, пара стен. Крутим тики до
//! TargetCaptured или лимита. Первый аргумент (опционально) — JSON PursuerConfig.

use bevy::prelude::*;
use std::process::ExitCode;

use pursuit_simulation::*;

const SEED: u64 = 42;
const MAX_TICKS: u64 = 3000;

/// Скриптовое движение цели: круг вокруг center
#[derive(Component)]
struct CircleWalker {
    center: Vec3,
    radius: f32,
    angular_speed: f32,
    angle: f32,
}

fn walk_in_circle(
    mut walkers: Query<(&mut CircleWalker, &mut Transform, &mut TargetMotion)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.timestep().as_secs_f32();

    for (mut walker, mut transform, mut motion) in walkers.iter_mut() {
        walker.angle += walker.angular_speed * delta;
        let next = walker.center
            + Vec3::new(walker.angle.cos(), 0.0, walker.angle.sin()) * walker.radius;

        motion.velocity = (next - transform.translation) / delta;
        transform.translation = next;
    }
}

fn load_config() -> Result<PursuerConfig, PursuitSetupError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| PursuitSetupError::Parse(format!("{}: {}", path, e)))?;
            PursuerConfig::from_json(&json)
        }
        None => Ok(PursuerConfig::default()),
    }
}

fn main() -> ExitCode {
    init_logger();

    let config = match load_config() {
        Ok(config) => config,
        Err(error) => {
            log_error(&format!("Config error: {}", error));
            return ExitCode::FAILURE;
        }
    };

    log_info(&format!("Starting headless pursuit simulation (seed: {})", SEED));

    let mut app = create_headless_app(SEED);
    app.add_plugins((SimulationPlugin, HeadlessNavigationPlugin))
        .add_systems(FixedUpdate, walk_in_circle.before(PursuitSet));

    let target = app
        .world_mut()
        .spawn((
            PursuitTarget,
            Transform::from_xyz(18.0, 0.0, 0.0),
            Collider::target_sphere(0.4),
            CircleWalker {
                center: Vec3::ZERO,
                radius: 18.0,
                angular_speed: 0.12,
                angle: 0.0,
            },
        ))
        .id();

    app.world_mut().spawn((
        Pursuer::new(target),
        config,
        MovementCommand::Idle,
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    for (x, z) in [(6.0, 0.0), (-6.0, 4.0)] {
        app.world_mut().spawn((
            Collider::obstacle_box(Vec3::new(0.5, 2.0, 3.0)),
            Transform::from_xyz(x, 0.0, z),
        ));
    }

    for tick in 1..=MAX_TICKS {
        run_fixed_ticks(&mut app, 1);

        let captured: Vec<TargetCaptured> = app
            .world_mut()
            .resource_mut::<Events<TargetCaptured>>()
            .drain()
            .collect();
        if let Some(event) = captured.first() {
            log_info(&format!(
                "Game over: caught at tick {} ({:?} at {:?}, target at {:?})",
                event.tick, event.pursuer_state, event.pursuer_position, event.target_position
            ));
            return ExitCode::SUCCESS;
        }

        if tick % 300 == 0 {
            let world = app.world_mut();
            let mut query = world.query::<(&PursuerState, &Transform, &PerceptionReport)>();
            for (state, transform, perception) in query.iter(world) {
                log_info(&format!(
                    "Tick {}: {:?} at {:?}, distance {:.1}",
                    tick, state, transform.translation, perception.distance
                ));
            }
        }
    }

    log_info("Simulation complete: target escaped");
    ExitCode::SUCCESS
}
