//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: агент и цель (Pursuer, PursuitTarget, TargetMotion)
//! - movement: navigation handoff (MovementCommand, MovementSpeed)
//! - world: геометрия мира (Collider, SurfaceKind)
//! - ai: state machine компоненты (re-export из crate::ai)

pub mod actor;
pub mod ai;
pub mod movement;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use ai::*;
pub use movement::*;
pub use world::*;
