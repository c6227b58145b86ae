//! World geometry компоненты: Collider + typed classification
//!
//! Вместо сравнения string tags ("Obstacle", "Player") на каждом call site —
//! `SurfaceKind`, который spatial query service возвращает вместе с hit.

use bevy::prelude::*;

/// Классификация поверхности для ray queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum SurfaceKind {
    /// Блокирует обзор и разворачивает агента при probe
    Obstacle,
    /// Тело преследуемой цели
    Target,
    /// Всё остальное (пол, декор), не блокирует
    #[default]
    Scenery,
}

/// Форма коллайдера в локальных координатах entity
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum ColliderShape {
    Sphere { radius: f32 },
    /// Box, ориентированный по rotation из Transform
    Cuboid { half_extents: Vec3 },
}

/// Коллайдер для spatial queries
///
/// Позиция/rotation/scale берутся из Transform (иерархии не поддерживаются).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Collider {
    pub shape: ColliderShape,
    pub kind: SurfaceKind,
}

impl Collider {
    pub fn obstacle_box(half_extents: Vec3) -> Self {
        Self {
            shape: ColliderShape::Cuboid { half_extents },
            kind: SurfaceKind::Obstacle,
        }
    }

    pub fn obstacle_sphere(radius: f32) -> Self {
        Self {
            shape: ColliderShape::Sphere { radius },
            kind: SurfaceKind::Obstacle,
        }
    }

    pub fn target_sphere(radius: f32) -> Self {
        Self {
            shape: ColliderShape::Sphere { radius },
            kind: SurfaceKind::Target,
        }
    }

    pub fn scenery_box(half_extents: Vec3) -> Self {
        Self {
            shape: ColliderShape::Cuboid { half_extents },
            kind: SurfaceKind::Scenery,
        }
    }
}
