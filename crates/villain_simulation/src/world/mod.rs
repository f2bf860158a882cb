//! World setup: спавн ресурсов и юнитов для headless прогонов.

use bevy::prelude::*;
use rand::Rng;
use crate::components::{AnimationController, Harvestable};
use crate::villain::{villain_bundle, VillainConfig};
use crate::DeterministicRng;

/// Заспавнить один ресурс ("Tree") в позиции
pub fn spawn_resource(world: &mut World, position: Vec3) -> Entity {
    world.spawn((Harvestable, Transform::from_translation(position))).id()
}

/// Разбросать `count` ресурсов в квадрате [-radius, radius] по XZ
///
/// Позиции берутся из DeterministicRng: одинаковый seed → одинаковый лес.
/// Нечисловой или бесконечный `radius` ничего не спавнит (warning в лог).
pub fn scatter_resources(world: &mut World, count: usize, radius: f32) -> Vec<Entity> {
    if !radius.is_finite() {
        crate::logger::log_warning(&format!("scatter_resources: invalid radius {}, nothing spawned", radius));
        return Vec::new();
    }

    // Ширина диапазона [-radius, radius] не должна переполнить f32
    let radius = radius.abs().min(f32::MAX / 4.0);

    let positions: Vec<Vec3> = {
        let mut rng = world.get_resource_or_insert_with(|| DeterministicRng::new(42));
        (0..count)
            .map(|_| {
                let x = rng.rng.gen_range(-radius..=radius);
                let z = rng.rng.gen_range(-radius..=radius);
                Vec3::new(x, 0.0, z)
            })
            .collect()
    };

    positions
        .into_iter()
        .map(|position| spawn_resource(world, position))
        .collect()
}

/// Заспавнить юнита (Dormant, без AI до InitializeVillain)
pub fn spawn_villain(world: &mut World, config: VillainConfig, position: Vec3) -> Entity {
    world.spawn(villain_bundle(config, position)).id()
}

/// Заспавнить юнита с animation collaborator
pub fn spawn_animated_villain(world: &mut World, config: VillainConfig, position: Vec3) -> Entity {
    world
        .spawn((villain_bundle(config, position), AnimationController::default()))
        .id()
}
