//! Attack systems: cooldown таймеры и применение удара.

use bevy::prelude::*;
use crate::components::{play_cue, AnimationController, AnimationCue, Harvestable};
use crate::villain::{AttackLanded, AttackState, ResourceDestroyed, Villain, VillainConfig, VillainTarget};

/// System: обновление attack cooldown таймеров
pub fn tick_attack_cooldowns(mut villains: Query<&mut AttackState, With<Villain>>, time: Res<Time<Fixed>>) {
    let delta = time.delta();

    for mut attack in villains.iter_mut() {
        if matches!(*attack, AttackState::CoolingDown { .. }) {
            attack.tick(delta);
        }
    }
}

/// Система: применение атаки (Swinging → CoolingDown)
///
/// Урон по ресурсу применяется сразу в начале атаки, cooldown после него
/// только ограничивает частоту. Когда удар исчерпывает ресурс и тот ещё
/// существует, ресурс удаляется, а ссылка на него очищается.
pub fn resolve_villain_attacks(
    mut commands: Commands,
    mut villains: Query<
        (
            Entity,
            &VillainConfig,
            &mut AttackState,
            &mut VillainTarget,
            Option<&mut AnimationController>,
        ),
        With<Villain>,
    >,
    resources: Query<(), With<Harvestable>>,
    mut landed_events: EventWriter<AttackLanded>,
    mut destroyed_events: EventWriter<ResourceDestroyed>,
) {
    // Несколько юнитов могут добить один ресурс в одном тике — удаляем его один раз
    let mut felled: Vec<Entity> = Vec::new();

    for (entity, config, mut attack, mut target, controller) in villains.iter_mut() {
        if !matches!(*attack, AttackState::Swinging) {
            continue;
        }

        play_cue(controller.map(Mut::into_inner), AnimationCue::AttackHor);

        let resource = target.resource;
        let depleted = target.strike();

        if let Some(resource) = resource {
            landed_events.write(AttackLanded {
                villain: entity,
                resource,
                resource_health: target.resource_health,
            });
        }

        let live_resource = resource.filter(|r| resources.contains(*r) && !felled.contains(r));

        if depleted {
            if let Some(resource) = live_resource {
                commands.entity(resource).despawn();
                felled.push(resource);
                target.clear();

                destroyed_events.write(ResourceDestroyed {
                    villain: entity,
                    resource,
                });

                crate::logger::log_info(&format!("🌲 Villain {:?} destroyed resource {:?}", entity, resource));
            }
        }

        attack.start_cooldown(config.attack_cooldown_duration());
    }
}
