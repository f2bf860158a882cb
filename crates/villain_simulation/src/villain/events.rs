//! Villain events: внешний интерфейс юнита и уведомления для хоста.

use bevy::prelude::*;

// ============================================================================
// Входящие команды (host → villain)
// ============================================================================

/// Запустить AI юнита с начальной целью (вызывается ровно один раз после спавна)
#[derive(Event, Debug, Clone)]
pub struct InitializeVillain {
    pub villain: Entity,
    pub starting_target: Option<Entity>,
}

/// Изменение скорости на лету
///
/// Один enum вместо двух событий: команды применяются в порядке поступления.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SpeedCommand {
    SetMultiplier { villain: Entity, factor: f32 },
    Reset { villain: Entity },
}

impl SpeedCommand {
    pub fn villain(&self) -> Entity {
        match self {
            SpeedCommand::SetMultiplier { villain, .. } | SpeedCommand::Reset { villain } => *villain,
        }
    }
}

/// Одно очко урона по юниту
#[derive(Event, Debug, Clone)]
pub struct TakeDamage {
    pub villain: Entity,
}

// ============================================================================
// Исходящие уведомления (villain → host)
// ============================================================================

/// Удар по ресурсу нанесён (урон применяется в начале атаки)
#[derive(Event, Debug, Clone)]
pub struct AttackLanded {
    pub villain: Entity,
    pub resource: Entity,
    /// Сколько ударов осталось ресурсу после этого
    pub resource_health: i32,
}

/// Ресурс уничтожен ударом юнита
#[derive(Event, Debug, Clone)]
pub struct ResourceDestroyed {
    pub villain: Entity,
    pub resource: Entity,
}

/// Юнит начал умирать (срабатывает ровно один раз)
#[derive(Event, Debug, Clone)]
pub struct VillainDied {
    pub villain: Entity,
}

/// Юнит удаляется из мира (конец death sequence)
#[derive(Event, Debug, Clone)]
pub struct VillainRemoved {
    pub villain: Entity,
}
