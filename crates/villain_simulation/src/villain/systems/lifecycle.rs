//! Lifecycle systems: инициализация, урон и death sequence.

use bevy::prelude::*;
use crate::components::{play_cue, AnimationController, AnimationCue, Health};
use crate::villain::{InitializeVillain, LifeState, TakeDamage, Villain, VillainDied, VillainRemoved, VillainTarget};

/// Система: запуск AI по InitializeVillain
///
/// Повторная инициализация (или инициализация умирающего юнита) игнорируется.
pub fn initialize_villains(
    mut events: EventReader<InitializeVillain>,
    mut villains: Query<(&mut LifeState, &mut VillainTarget), With<Villain>>,
) {
    for event in events.read() {
        let Ok((mut life, mut target)) = villains.get_mut(event.villain) else {
            crate::logger::log_warning(&format!(
                "InitializeVillain: {:?} is not a villain (already removed?)",
                event.villain
            ));
            continue;
        };

        if !life.activate() {
            crate::logger::log_warning(&format!(
                "InitializeVillain: {:?} ignored, state is {:?}",
                event.villain, *life
            ));
            continue;
        }

        target.resource = event.starting_target;

        crate::logger::log_info(&format!(
            "👹 Villain {:?} initialized (starting target: {:?})",
            event.villain, event.starting_target
        ));
    }
}

/// Система: применение урона по юнитам
///
/// Каждое событие снимает 1 HP. Переход в Dying — только на первом
/// опустошении здоровья, дальнейшие удары смерть не перезапускают.
pub fn apply_villain_damage(
    mut hits: EventReader<TakeDamage>,
    mut villains: Query<(&mut Health, &mut LifeState, Option<&mut AnimationController>), With<Villain>>,
    mut died_events: EventWriter<VillainDied>,
) {
    for hit in hits.read() {
        let Ok((mut health, mut life, controller)) = villains.get_mut(hit.villain) else {
            crate::logger::log_warning(&format!("TakeDamage: villain {:?} not found", hit.villain));
            continue;
        };

        health.take_hit();

        if health.is_depleted() && life.begin_dying() {
            play_cue(controller.map(Mut::into_inner), AnimationCue::Death);
            died_events.write(VillainDied { villain: hit.villain });

            crate::logger::log_info(&format!("💀 Villain {:?} died", hit.villain));
        }
    }
}

/// Система: death sequence
///
/// После DEATH_DELAY юнит удаляется из мира. Запущенную последовательность
/// ничто не отменяет.
pub fn tick_death_sequences(
    mut commands: Commands,
    mut villains: Query<(Entity, &mut LifeState), With<Villain>>,
    mut removed_events: EventWriter<VillainRemoved>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta();

    for (entity, mut life) in villains.iter_mut() {
        if !life.is_dying() {
            continue;
        }

        if life.tick_dying(delta) {
            removed_events.write(VillainRemoved { villain: entity });
            commands.entity(entity).despawn();

            crate::logger::log(&format!("⚰️ Despawning villain {:?} (death sequence complete)", entity));
        }
    }
}
