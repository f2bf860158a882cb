//! Villain components: конфиг, цель, состояние атаки и жизненный цикл.

use bevy::prelude::*;
use std::time::Duration;

/// Сколько ударов выдерживает ресурс (сбрасывается при каждом захвате цели)
pub const RESOURCE_HIT_POINTS: i32 = 10;

/// Пауза между началом смерти и удалением юнита (время на death animation)
pub const DEATH_DELAY: Duration = Duration::from_secs(1);

/// Маркер юнита-злодея
///
/// Автоматически добавляет VillainTarget, AttackState, LifeState через Required Components.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(VillainTarget, AttackState, LifeState)]
pub struct Villain;

/// Параметры юнита, фиксируются при спавне
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct VillainConfig {
    /// Дистанция, с которой юнит бьёт ресурс (метры)
    pub attack_range: f32,
    /// Базовая скорость передвижения (метры/сек)
    pub move_speed: f32,
    /// Стартовое здоровье
    pub max_health: i32,
    /// Пауза между атаками (секунды)
    pub attack_cooldown: f32,
}

impl Default for VillainConfig {
    fn default() -> Self {
        Self {
            attack_range: 2.0,
            move_speed: 5.0,
            max_health: 5,
            attack_cooldown: 1.0,
        }
    }
}

impl VillainConfig {
    /// Cooldown как Duration (отрицательные/NaN значения → 0, слишком большие/+inf → Duration::MAX).
    pub fn attack_cooldown_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.attack_cooldown.max(0.0)).unwrap_or(Duration::MAX)
    }
}

/// Текущая цель юнита
///
/// `resource` — слабая ссылка: entity может исчезнуть в любой момент,
/// поэтому перед использованием всегда проверяется через запрос.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct VillainTarget {
    pub resource: Option<Entity>,
    /// Оставшиеся удары до уничтожения цели
    pub resource_health: i32,
}

impl Default for VillainTarget {
    fn default() -> Self {
        Self {
            resource: None,
            resource_health: RESOURCE_HIT_POINTS,
        }
    }
}

impl VillainTarget {
    /// Запомнить результат поиска цели. Здоровье цели сбрасывается только если цель найдена.
    pub fn acquire(&mut self, found: Option<Entity>) {
        self.resource = found;
        if found.is_some() {
            self.resource_health = RESOURCE_HIT_POINTS;
        }
    }

    /// Нанести один удар. Возвращает true, если ресурс исчерпан.
    pub fn strike(&mut self) -> bool {
        self.resource_health -= 1;
        self.resource_health <= 0
    }

    pub fn clear(&mut self) {
        self.resource = None;
    }
}

/// Фазы атаки
///
/// Заменяет флаг "атакую": новая атака возможна только из `Idle`.
#[derive(Component, Debug, Clone, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum AttackState {
    /// Готов атаковать
    #[default]
    Idle,
    /// Атака запрошена control loop, урон ещё не применён
    Swinging,
    /// Урон применён, ждём cooldown
    CoolingDown { remaining: Duration },
}

impl AttackState {
    pub fn is_idle(&self) -> bool {
        matches!(self, AttackState::Idle)
    }

    /// Idle → Swinging. Возвращает false если атака уже идёт.
    pub fn begin(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = AttackState::Swinging;
        true
    }

    pub fn start_cooldown(&mut self, cooldown: Duration) {
        *self = AttackState::CoolingDown { remaining: cooldown };
    }

    /// Продвинуть cooldown. Возвращает true, когда юнит снова готов атаковать.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let AttackState::CoolingDown { remaining } = self else {
            return false;
        };

        *remaining = remaining.saturating_sub(delta);
        if remaining.is_zero() {
            *self = AttackState::Idle;
            return true;
        }
        false
    }
}

/// Жизненный цикл юнита: Dormant → Alive → Dying → (despawn)
#[derive(Component, Debug, Clone, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum LifeState {
    /// Заспавнен, но ещё не инициализирован (AI не запущен)
    #[default]
    Dormant,
    /// AI работает каждый тик
    Alive,
    /// Играет death animation, по истечении таймера entity удаляется
    Dying { remaining: Duration },
}

impl LifeState {
    /// Может получать урон и умереть
    pub fn is_living(&self) -> bool {
        matches!(self, LifeState::Dormant | LifeState::Alive)
    }

    /// AI control loop активен
    pub fn is_alive(&self) -> bool {
        matches!(self, LifeState::Alive)
    }

    pub fn is_dying(&self) -> bool {
        matches!(self, LifeState::Dying { .. })
    }

    /// Dormant → Alive (ровно один раз)
    pub fn activate(&mut self) -> bool {
        if !matches!(self, LifeState::Dormant) {
            return false;
        }
        *self = LifeState::Alive;
        true
    }

    /// Dormant/Alive → Dying. Повторный вызов — no-op.
    pub fn begin_dying(&mut self) -> bool {
        if !self.is_living() {
            return false;
        }
        *self = LifeState::Dying {
            remaining: DEATH_DELAY,
        };
        true
    }

    /// Продвинуть death таймер. Возвращает true, когда юнит пора удалить.
    pub fn tick_dying(&mut self, delta: Duration) -> bool {
        let LifeState::Dying { remaining } = self else {
            return false;
        };

        *remaining = remaining.saturating_sub(delta);
        remaining.is_zero()
    }
}

/// Полный набор компонентов юнита (без AnimationController — он опционален)
pub fn villain_bundle(config: VillainConfig, position: Vec3) -> impl Bundle {
    (
        Villain,
        Transform::from_translation(position),
        crate::components::Health::new(config.max_health),
        crate::components::MoveSpeed::new(config.move_speed),
        config,
    )
}
