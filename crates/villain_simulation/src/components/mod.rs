//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: здоровье юнита (Health)
//! - movement: скорость передвижения (MoveSpeed)
//! - world: теги ресурсов (Harvestable)
//! - animation: опциональный animation collaborator (AnimationController)

pub mod actor;
pub mod animation;
pub mod movement;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use movement::*;
pub use world::*;
