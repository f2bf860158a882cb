//! Villain unit: юнит идёт к ближайшему ресурсу, рубит его и умирает от урона.
//!
//! FSM разнесена по компонентам:
//! - LifeState: Dormant → Alive → Dying → despawn
//! - AttackState: Idle → Swinging → CoolingDown → Idle
//! - VillainTarget: слабая ссылка на ресурс + его оставшиеся удары
//!
//! Хост общается с юнитом только через события (InitializeVillain,
//! SpeedCommand, TakeDamage) и получает уведомления (AttackLanded,
//! ResourceDestroyed, VillainDied, VillainRemoved).

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;
pub mod targeting;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod components_tests;

// Re-export основных типов
pub use components::*;
pub use events::*;
pub use systems::*;
pub use targeting::nearest_resource;

/// Набор систем юнита (для ordering внешних систем через `.after(VillainSystems)`)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VillainSystems;

/// Villain Plugin
///
/// Регистрирует системы в FixedUpdate, один проход цепочки = один тик.
/// Порядок выполнения:
/// 1. initialize_villains — запуск AI по InitializeVillain
/// 2. apply_speed_commands — SetMultiplier / Reset
/// 3. tick_death_sequences — удаление юнитов после DEATH_DELAY
/// 4. apply_villain_damage — TakeDamage → Health, Alive → Dying
/// 5. tick_attack_cooldowns — CoolingDown → Idle
/// 6. villain_control_loop — поиск цели / движение / запуск атаки
/// 7. resolve_villain_attacks — урон по ресурсу, уничтожение
/// 8. tick_cross_fades — blend таймеры анимаций
pub struct VillainPlugin;

impl Plugin for VillainPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InitializeVillain>()
            .add_event::<SpeedCommand>()
            .add_event::<TakeDamage>()
            .add_event::<AttackLanded>()
            .add_event::<ResourceDestroyed>()
            .add_event::<VillainDied>()
            .add_event::<VillainRemoved>();

        app.add_systems(
            FixedUpdate,
            (
                initialize_villains,
                apply_speed_commands,
                tick_death_sequences,
                apply_villain_damage,
                tick_attack_cooldowns,
                villain_control_loop,
                resolve_villain_attacks,
                crate::components::tick_cross_fades,
            )
                .chain() // Последовательное выполнение для детерминизма
                .in_set(VillainSystems),
        );
    }
}
