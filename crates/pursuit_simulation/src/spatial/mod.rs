//! Spatial query service: ray intersection против коллайдеров мира
//!
//! Sight, hearing gate и forward probe используют ОДИН и тот же raycast
//! через trait `SpatialQuery`. В headless режиме backend — `ObstacleField`
//! (snapshot всех `Collider` на начало тика). Engine bridge может подставить
//! свою реализацию trait'а и вызывать чистые функции perception/locomotion.
//!
//! Degenerate geometry (нулевое/NaN направление, max_distance <= 0) → no hit.

use bevy::math::bounding::{Aabb3d, BoundingSphere, RayCast3d};
use bevy::math::{Dir3A, Vec3A};
use bevy::prelude::*;

use crate::components::{Collider, ColliderShape, SurfaceKind};

#[cfg(test)]
mod spatial_tests;

/// Результат raycast: ближайшее пересечение
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Option<Entity>,
    pub kind: SurfaceKind,
    /// Расстояние от origin вдоль луча (метры)
    pub distance: f32,
}

/// Какие поверхности учитывает raycast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RayFilter {
    /// Любой коллайдер
    #[default]
    Any,
    /// Только указанный kind
    Only(SurfaceKind),
    /// То, что физически перекрывает луч: Obstacle и Target (scenery игнорируется)
    Blocking,
}

impl RayFilter {
    pub fn accepts(&self, kind: SurfaceKind) -> bool {
        match self {
            RayFilter::Any => true,
            RayFilter::Only(only) => *only == kind,
            RayFilter::Blocking => matches!(kind, SurfaceKind::Obstacle | SurfaceKind::Target),
        }
    }
}

/// Ray-intersection primitive (consumed interface)
pub trait SpatialQuery {
    /// Ближайший hit вдоль `direction` (не обязательно нормализованного)
    /// в пределах `max_distance`, среди поверхностей, которые пропускает `filter`.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: RayFilter,
    ) -> Option<RayHit>;
}

/// Нормализованное направление луча; `None` для нулевого/неконечного вектора
pub fn ray_direction(direction: Vec3) -> Option<Dir3A> {
    Dir3A::new(Vec3A::from(direction)).ok()
}

/// Occlusion test: есть ли Obstacle между `from` и `to`
///
/// Луч обрезан на `max_distance`. Пустой результат raycast — не occlusion.
/// Hit на target-коллайдере раньше obstacle тоже не occlusion.
pub fn is_occluded(spatial: &impl SpatialQuery, from: Vec3, to: Vec3, max_distance: f32) -> bool {
    let offset = to - from;
    let distance = offset.length();

    match spatial.raycast(from, offset, max_distance, RayFilter::Blocking) {
        Some(hit) => hit.kind == SurfaceKind::Obstacle && hit.distance < distance,
        None => false,
    }
}

/// Forward obstacle probe: расстояние до ближайшего Obstacle перед агентом
pub fn probe_for_obstacle(
    spatial: &impl SpatialQuery,
    origin: Vec3,
    forward: Vec3,
    range: f32,
) -> Option<f32> {
    spatial
        .raycast(origin, forward, range, RayFilter::Only(SurfaceKind::Obstacle))
        .map(|hit| hit.distance)
}

/// Последний forward probe агента (для debug-визуализации, обратно в ядро не читается)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ProbeReport {
    pub origin: Vec3,
    pub direction: Vec3,
    pub range: f32,
    /// Расстояние до obstacle, если probe попал
    pub hit_distance: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FieldBody {
    entity: Option<Entity>,
    kind: SurfaceKind,
    shape: ColliderShape,
    center: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl FieldBody {
    fn intersect(&self, origin: Vec3, direction: Dir3A, max_distance: f32) -> Option<f32> {
        match self.shape {
            ColliderShape::Sphere { radius } => {
                let radius = radius * self.scale.abs().max_element();
                let sphere = BoundingSphere::new(self.center, radius);
                RayCast3d::new(origin, direction, max_distance).sphere_intersection_at(&sphere)
            }
            ColliderShape::Cuboid { half_extents } => {
                // Переводим луч в локальный frame box'а, там он axis-aligned
                let inverse = self.rotation.inverse();
                let local_origin = inverse * (origin - self.center);
                let local_direction = ray_direction(inverse * Vec3::from(*direction))?;
                let aabb = Aabb3d::new(Vec3::ZERO, half_extents * self.scale.abs());
                RayCast3d::new(local_origin, local_direction, max_distance).aabb_intersection_at(&aabb)
            }
        }
    }
}

/// Snapshot коллайдеров мира на текущий тик
///
/// Single writer (`refresh_obstacle_field`) в начале тика, дальше только чтение.
#[derive(Resource, Debug, Clone, Default)]
pub struct ObstacleField {
    bodies: Vec<FieldBody>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: Option<Entity>, collider: &Collider, transform: &Transform) {
        self.bodies.push(FieldBody {
            entity,
            kind: collider.kind,
            shape: collider.shape,
            center: transform.translation,
            rotation: transform.rotation,
            scale: transform.scale,
        });
    }

    /// Builder для тестов и ручной сборки сцены
    pub fn with(mut self, collider: Collider, transform: Transform) -> Self {
        self.insert(None, &collider, &transform);
        self
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl SpatialQuery for ObstacleField {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: RayFilter,
    ) -> Option<RayHit> {
        if !max_distance.is_finite() || max_distance <= 0.0 || !origin.is_finite() {
            return None;
        }
        let direction = ray_direction(direction)?;

        self.bodies
            .iter()
            .filter(|body| filter.accepts(body.kind))
            .filter_map(|body| {
                body.intersect(origin, direction, max_distance).map(|distance| RayHit {
                    entity: body.entity,
                    kind: body.kind,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// Система: пересобрать ObstacleField из всех Collider (первая в тике)
pub fn refresh_obstacle_field(
    mut field: ResMut<ObstacleField>,
    colliders: Query<(Entity, &Collider, &Transform)>,
) {
    field.clear();
    for (entity, collider, transform) in colliders.iter() {
        field.insert(Some(entity), collider, transform);
    }
}
