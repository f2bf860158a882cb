//! Базовые компоненты живых юнитов: Health

use bevy::prelude::*;

/// Здоровье юнита (очки попаданий)
///
/// Каждый удар снимает ровно 1 очко. Значение не клампится снизу:
/// удары по уже умирающему юниту продолжают уменьшать `current`,
/// но смерть срабатывает только на первом переходе через 0.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Снять одно очко здоровья.
    pub fn take_hit(&mut self) {
        self.current -= 1;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}
