//! Target acquisition: поиск ближайшего ресурса.

use bevy::prelude::*;

/// Ближайший кандидат к `origin`, либо None если кандидатов нет.
///
/// При равных дистанциях выигрывает первый найденный. Кандидаты с
/// нечисловой или бесконечной дистанцией никогда не выбираются.
pub fn nearest_resource<I>(origin: Vec3, candidates: I) -> Option<Entity>
where
    I: IntoIterator<Item = (Entity, Vec3)>,
{
    let mut best_distance = f32::MAX;
    let mut nearest: Option<Entity> = None;

    for (entity, position) in candidates {
        let distance = origin.distance(position);

        if distance < best_distance {
            best_distance = distance;
            nearest = Some(entity);
        }
    }

    nearest
}
