//! Movement компоненты: скорость передвижения

use bevy::prelude::*;

/// Скорость передвижения (метры/сек)
///
/// Эффективная скорость = `base * multiplier`. Множитель меняется снаружи
/// (замедление, ускорение), `reset()` возвращает ровно базовую скорость.
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveSpeed {
    pub base: f32,
    pub multiplier: f32,
}

impl Default for MoveSpeed {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl MoveSpeed {
    pub fn new(base: f32) -> Self {
        Self {
            base,
            multiplier: 1.0,
        }
    }

    pub fn current(&self) -> f32 {
        self.base * self.multiplier
    }

    pub fn set_multiplier(&mut self, multiplier: f32) {
        self.multiplier = multiplier;
    }

    pub fn reset(&mut self) {
        self.multiplier = 1.0;
    }
}
