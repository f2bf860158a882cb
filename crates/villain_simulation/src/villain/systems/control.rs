//! Control loop: поиск цели, движение, запуск атаки.

use bevy::prelude::*;
use crate::components::{play_cue, AnimationController, AnimationCue, Harvestable, MoveSpeed};
use crate::villain::{nearest_resource, AttackState, LifeState, Villain, VillainConfig, VillainTarget};

/// Система: per-tick AI юнита
///
/// Приоритет каждый тик:
/// 1. Нет живой цели → ищем ближайший ресурс и пропускаем остаток тика
/// 2. Цель дальше attack_range → идём к ней
/// 3. Цель в радиусе и атака не идёт → AttackState::Swinging
///
/// Урон наносит `resolve_villain_attacks` в этом же тике.
pub fn villain_control_loop(
    mut villains: Query<
        (
            Entity,
            &VillainConfig,
            &mut Transform,
            &MoveSpeed,
            &mut VillainTarget,
            &mut AttackState,
            &LifeState,
            Option<&mut AnimationController>,
        ),
        (With<Villain>, Without<Harvestable>),
    >,
    resources: Query<(Entity, &Transform), (With<Harvestable>, Without<Villain>)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, config, mut transform, speed, mut target, mut attack, life, controller) in villains.iter_mut() {
        if !life.is_alive() {
            continue;
        }

        // Удалённая снаружи цель == отсутствующая цель
        let target_position = target
            .resource
            .and_then(|resource| resources.get(resource).ok())
            .map(|(_, resource_transform)| resource_transform.translation);

        let Some(target_position) = target_position else {
            let found = nearest_resource(
                transform.translation,
                resources.iter().map(|(resource, t)| (resource, t.translation)),
            );
            target.acquire(found);

            if let Some(resource) = found {
                crate::logger::log(&format!("🎯 Villain {:?} acquired resource {:?}", entity, resource));
            }
            continue;
        };

        let distance = transform.translation.distance(target_position);

        if distance > config.attack_range {
            let direction = (target_position - transform.translation).normalize_or_zero();
            transform.translation += direction * speed.current() * delta;

            if direction != Vec3::ZERO {
                transform.look_to(direction, Vec3::Y);
            }

            play_cue(controller.map(Mut::into_inner), AnimationCue::Running);
        } else if attack.begin() {
            crate::logger::log(&format!(
                "🪓 Villain {:?} attacking {:?} (distance {:.2})",
                entity, target.resource, distance
            ));
        }
    }
}
