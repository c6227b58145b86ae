//! Tests for spatial queries.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::components::{Collider, SurfaceKind};

    fn wall_at(x: f32) -> ObstacleField {
        ObstacleField::new().with(
            Collider::obstacle_box(Vec3::new(0.5, 2.0, 5.0)),
            Transform::from_xyz(x, 0.0, 0.0),
        )
    }

    #[test]
    fn test_raycast_hits_nearest_face() {
        let field = wall_at(5.0);
        let hit = field
            .raycast(Vec3::ZERO, Vec3::X, 10.0, RayFilter::Any)
            .expect("wall in front");

        assert_eq!(hit.kind, SurfaceKind::Obstacle);
        assert!((hit.distance - 4.5).abs() < 1e-4, "distance = {}", hit.distance);
    }

    #[test]
    fn test_raycast_truncated_by_max_distance() {
        let field = wall_at(5.0);
        assert!(field.raycast(Vec3::ZERO, Vec3::X, 4.0, RayFilter::Any).is_none());
    }

    #[test]
    fn test_raycast_direction_not_normalized() {
        let field = wall_at(5.0);
        let hit = field
            .raycast(Vec3::ZERO, Vec3::X * 20.0, 10.0, RayFilter::Any)
            .expect("wall in front");
        assert!((hit.distance - 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_direction_is_no_hit() {
        let field = wall_at(0.0); // origin внутри стены
        assert!(field.raycast(Vec3::ZERO, Vec3::ZERO, 10.0, RayFilter::Any).is_none());
        assert!(field.raycast(Vec3::ZERO, Vec3::NAN, 10.0, RayFilter::Any).is_none());
        assert!(field.raycast(Vec3::ZERO, Vec3::X, 0.0, RayFilter::Any).is_none());
    }

    #[test]
    fn test_rotated_box() {
        // Тонкая стена, повёрнутая на 90° — теперь она перекрывает ось Z, а не X
        let field = ObstacleField::new().with(
            Collider::obstacle_box(Vec3::new(5.0, 2.0, 0.5)),
            Transform::from_xyz(5.0, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );

        let hit = field
            .raycast(Vec3::ZERO, Vec3::X, 10.0, RayFilter::Any)
            .expect("rotated wall in front");
        assert!((hit.distance - 4.5).abs() < 1e-3, "distance = {}", hit.distance);
    }

    #[test]
    fn test_filter_skips_other_kinds() {
        let field = ObstacleField::new()
            .with(Collider::scenery_box(Vec3::splat(0.5)), Transform::from_xyz(2.0, 0.0, 0.0))
            .with(Collider::obstacle_sphere(1.0), Transform::from_xyz(6.0, 0.0, 0.0));

        let any = field.raycast(Vec3::ZERO, Vec3::X, 10.0, RayFilter::Any).unwrap();
        assert_eq!(any.kind, SurfaceKind::Scenery);

        let blocking = field.raycast(Vec3::ZERO, Vec3::X, 10.0, RayFilter::Blocking).unwrap();
        assert_eq!(blocking.kind, SurfaceKind::Obstacle);
        assert!((blocking.distance - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_is_occluded_only_before_target() {
        let field = wall_at(5.0);

        // Стена между агентом и целью
        assert!(is_occluded(&field, Vec3::ZERO, Vec3::new(8.0, 0.0, 0.0), 15.0));
        // Стена за целью
        assert!(!is_occluded(&field, Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), 15.0));
        // Пустой мир
        assert!(!is_occluded(&ObstacleField::new(), Vec3::ZERO, Vec3::X * 8.0, 15.0));
        // Цель в той же точке — луч вырожден
        assert!(!is_occluded(&field, Vec3::ZERO, Vec3::ZERO, 15.0));
    }

    #[test]
    fn test_target_body_in_front_of_wall_is_not_occlusion() {
        let field = wall_at(5.0)
            .with(Collider::target_sphere(0.5), Transform::from_xyz(2.0, 0.0, 0.0));

        assert!(!is_occluded(&field, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 15.0));
    }

    #[test]
    fn test_probe_ignores_non_obstacles() {
        let field = ObstacleField::new()
            .with(Collider::target_sphere(0.5), Transform::from_xyz(0.0, 0.0, -2.0));
        assert_eq!(probe_for_obstacle(&field, Vec3::ZERO, Vec3::NEG_Z, 5.0), None);

        let field = field.with(Collider::obstacle_sphere(1.0), Transform::from_xyz(0.0, 0.0, -4.0));
        let hit = probe_for_obstacle(&field, Vec3::ZERO, Vec3::NEG_Z, 5.0).unwrap();
        assert!((hit - 3.0).abs() < 1e-4);
    }
}
