//! Headless симуляция: несколько злодеев вырубают случайный лес
//!
//! Запускает Bevy App без рендера, 1000 тиков по 20ms.

use villain_simulation::world::{scatter_resources, spawn_villain};
use villain_simulation::{
    create_headless_app, Harvestable, InitializeVillain, SimulationPlugin, TakeDamage, Villain, VillainConfig,
};
use bevy::prelude::*;

fn main() {
    let seed = 42;
    println!("Starting villain headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let world = app.world_mut();
    scatter_resources(world, 12, 25.0);

    let spawn_points = [
        Vec3::new(-30.0, 0.0, -30.0),
        Vec3::new(30.0, 0.0, -30.0),
        Vec3::new(0.0, 0.0, 30.0),
    ];

    let villains: Vec<Entity> = spawn_points
        .iter()
        .map(|position| spawn_villain(world, VillainConfig::default(), *position))
        .collect();

    for villain in &villains {
        world.send_event(InitializeVillain {
            villain: *villain,
            starting_target: None,
        });
    }

    for tick in 0..1000 {
        // Игрок "попадает" по первому злодею раз в секунду после 10-й секунды
        if tick >= 500 && tick % 50 == 0 {
            app.world_mut().send_event(TakeDamage { villain: villains[0] });
        }

        app.update();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let trees = world.query_filtered::<Entity, With<Harvestable>>().iter(world).count();
            let alive = world.query_filtered::<Entity, With<Villain>>().iter(world).count();
            println!("Tick {}: {} trees, {} villains", tick, trees, alive);
        }
    }

    println!("Simulation complete!");
}
