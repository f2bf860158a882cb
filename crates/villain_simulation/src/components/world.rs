//! World компоненты: ресурсы, которые юниты рубят

use bevy::prelude::*;

/// Маркер категории ресурса ("Tree")
///
/// Реестр всех ресурсов — обычный ECS запрос `(Entity, &Transform), With<Harvestable>`.
/// Жизненный цикл ресурса юниту не принадлежит: его могут убрать снаружи
/// в любой момент, поэтому ссылки на него проверяются перед каждым использованием.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Harvestable;
