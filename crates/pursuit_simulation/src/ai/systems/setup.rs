//! Инициализация pursuer'ов (один раз на агента).
//!
//! Missing dependency (нет цели / нет navigation handle) и кривой config —
//! fatal: логируем один раз, вешаем PursuerFault, агент в tick не попадает.

use bevy::prelude::*;

use crate::ai::roam::pick_roam_target;
use crate::ai::{PursuerConfig, PursuerFault, PursuitSetupFailed, RoamState};
use crate::components::{MovementCommand, MovementSpeed, Pursuer, PursuitTarget};
use crate::error::{PursuitSetupError, Result};
use crate::DeterministicRng;

/// Проверка зависимостей агента (без ECS)
///
/// Порядок: config → target существует → target помечен → navigation handle.
pub fn validate_pursuer(
    entity: Entity,
    pursuer: &Pursuer,
    config: &PursuerConfig,
    target_exists: bool,
    target_is_pursuable: bool,
    has_navigation: bool,
) -> Result<()> {
    config.validate()?;

    if !target_exists {
        return Err(PursuitSetupError::MissingTarget(pursuer.target));
    }
    if !target_is_pursuable {
        return Err(PursuitSetupError::TargetNotPursuable(pursuer.target));
    }
    if !has_navigation {
        return Err(PursuitSetupError::MissingNavigation(entity));
    }

    Ok(())
}

/// Система: инициализация новых pursuer'ов
///
/// Успех: snapshot roam origin, первая roam точка, MovementSpeed из config.
/// Ошибка: PursuerFault + PursuitSetupFailed event + log_error.
pub fn initialize_pursuers(
    mut commands: Commands,
    pending: Query<
        (Entity, &Pursuer, &Transform, &PursuerConfig, Has<MovementCommand>),
        (Without<RoamState>, Without<PursuerFault>),
    >,
    existing: Query<()>,
    pursuable: Query<(), With<PursuitTarget>>,
    mut rng: ResMut<DeterministicRng>,
    mut failures: EventWriter<PursuitSetupFailed>,
) {
    for (entity, pursuer, transform, config, has_navigation) in pending.iter() {
        let checked = validate_pursuer(
            entity,
            pursuer,
            config,
            existing.contains(pursuer.target),
            pursuable.contains(pursuer.target),
            has_navigation,
        );

        match checked {
            Ok(()) => {
                let origin = transform.translation;
                let first_target = pick_roam_target(origin, config.roaming_range, &mut rng.rng);

                commands.entity(entity).insert((
                    RoamState::new(origin, first_target),
                    MovementSpeed {
                        speed: config.move_speed,
                    },
                ));

                crate::log_info(&format!(
                    "AI: pursuer {:?} initialized at {:?} (target {:?}, first roam point {:?})",
                    entity, origin, pursuer.target, first_target
                ));
            }
            Err(error) => {
                crate::log_error(&format!("AI: pursuer {:?} setup failed: {}", entity, error));

                commands.entity(entity).insert(PursuerFault(error.clone()));
                failures.write(PursuitSetupFailed {
                    pursuer: entity,
                    error,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pursuer() -> Pursuer {
        Pursuer::new(Entity::from_raw(7))
    }

    #[test]
    fn test_validate_ok() {
        let result = validate_pursuer(Entity::PLACEHOLDER, &pursuer(), &PursuerConfig::default(), true, true, true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_missing_target() {
        let result = validate_pursuer(Entity::PLACEHOLDER, &pursuer(), &PursuerConfig::default(), false, false, true);
        assert_eq!(result, Err(PursuitSetupError::MissingTarget(Entity::from_raw(7))));
    }

    #[test]
    fn test_validate_target_not_pursuable() {
        let result = validate_pursuer(Entity::PLACEHOLDER, &pursuer(), &PursuerConfig::default(), true, false, true);
        assert_eq!(result, Err(PursuitSetupError::TargetNotPursuable(Entity::from_raw(7))));
    }

    #[test]
    fn test_validate_missing_navigation() {
        let result = validate_pursuer(Entity::PLACEHOLDER, &pursuer(), &PursuerConfig::default(), true, true, false);
        assert_eq!(result, Err(PursuitSetupError::MissingNavigation(Entity::PLACEHOLDER)));
    }

    #[test]
    fn test_validate_config_checked_first() {
        let config = PursuerConfig {
            capture_distance: -1.0,
            ..Default::default()
        };
        let result = validate_pursuer(Entity::PLACEHOLDER, &pursuer(), &config, false, false, false);
        assert!(matches!(result, Err(PursuitSetupError::InvalidConfig { field: "capture_distance", .. })));
    }
}
