//! Villain Simulation Core
//!
//! Headless ECS-симуляция на Bevy 0.16: юнит-злодей идёт к ближайшему
//! ресурсу, рубит его несколькими ударами, получает урон и умирает.
//!
//! Движок (рендер, анимации, коллизии) — снаружи; сюда приходят только
//! события (InitializeVillain, SpeedCommand, TakeDamage) и Transform'ы.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod components;
pub mod logger;
pub mod villain;
pub mod world;

// Re-export базовых компонентов для удобства
pub use components::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use villain::{
    nearest_resource, villain_bundle, AttackLanded, AttackState, InitializeVillain, LifeState, ResourceDestroyed,
    SpeedCommand, TakeDamage, Villain, VillainConfig, VillainDied, VillainPlugin, VillainRemoved, VillainSystems,
    VillainTarget, DEATH_DELAY, RESOURCE_HIT_POINTS,
};

/// Частота simulation tick (Гц)
///
/// 50Hz → шаг ровно 20ms, таймеры в Duration считаются без дрейфа.
pub const TICK_HZ: f64 = 50.0;

/// Длительность одного тика
pub fn tick_duration() -> Duration {
    Duration::from_secs_f64(1.0 / TICK_HZ)
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_plugins(VillainPlugin);

        // Детерминистичный RNG (seed по умолчанию), если хост не поставил свой
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Детерминистичный RNG resource (seeded)
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

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную: каждый `app.update()` продвигает часы ровно на
/// один тик (кроме самого первого update, который только запускает часы).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick_duration()));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
