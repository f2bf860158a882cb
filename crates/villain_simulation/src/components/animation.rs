//! Animation collaborator: cross-fade между именованными состояниями
//!
//! ECS не проигрывает анимации сам, а только выставляет желаемое состояние.
//! Компонент опционален: юнит без `AnimationController` работает так же,
//! просто без визуальных cue.

use bevy::prelude::*;

/// Длительность cross-fade для всех cue (секунды)
pub const CROSSFADE_SECS: f32 = 0.15;

/// Именованные состояния анимации юнита
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AnimationCue {
    Running,
    AttackHor,
    Death,
}

impl AnimationCue {
    /// Имя state в AnimationTree/Animator
    pub fn state_name(&self) -> &'static str {
        match self {
            AnimationCue::Running => "Running",
            AnimationCue::AttackHor => "AttackHor",
            AnimationCue::Death => "Death",
        }
    }
}

#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct AnimationController {
    /// Текущее (целевое) состояние
    pub current: Option<AnimationCue>,
    /// Сколько осталось до конца blend (секунды)
    pub fade_remaining: f32,
    /// Количество реальных переходов (без повторов того же cue)
    pub transitions: u32,
}

impl AnimationController {
    /// Запросить переход в `cue` за `duration` секунд.
    ///
    /// Повторный запрос активного cue ничего не делает — иначе blend
    /// перезапускался бы каждый тик, пока юнит идёт.
    pub fn cross_fade(&mut self, cue: AnimationCue, duration: f32) {
        if self.current == Some(cue) {
            return;
        }

        self.current = Some(cue);
        self.fade_remaining = duration;
        self.transitions += 1;
    }

    pub fn is_blending(&self) -> bool {
        self.fade_remaining > 0.0
    }
}

/// Best-effort cue: без контроллера молча пропускаем.
pub fn play_cue(controller: Option<&mut AnimationController>, cue: AnimationCue) {
    if let Some(controller) = controller {
        controller.cross_fade(cue, CROSSFADE_SECS);
    }
}

/// System: продвигаем blend таймеры
pub fn tick_cross_fades(mut controllers: Query<&mut AnimationController>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut controller in controllers.iter_mut() {
        if controller.fade_remaining > 0.0 {
            controller.fade_remaining = (controller.fade_remaining - delta).max(0.0);
        }
    }
}
